pub mod catalog;
pub mod time;

pub use time::{local_minute_of_day, local_time_string, utc_day_start, utc_offset_label};

use crate::error::{timezone_error, ZoneResult};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use tracing::debug;

/// Source of UTC offsets for timezone identifiers
///
/// This is the only external capability the clock math needs. Implementations
/// decide what to do with identifiers they don't know.
pub trait OffsetResolver: Send + Sync {
    /// Offset from UTC in minutes for `timezone` at `instant`
    fn offset_minutes(&self, timezone: &str, instant: DateTime<Utc>) -> i64;
}

/// Parse an IANA timezone identifier
pub fn parse_timezone(timezone: &str) -> ZoneResult<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| timezone_error(&format!("Unknown timezone: {}", timezone)))
}

/// Offsets from the IANA database shipped with chrono-tz
#[derive(Debug, Clone, Copy)]
pub struct TzDatabase {
    fallback: Tz,
}

impl TzDatabase {
    /// Create a resolver that uses `fallback` for unknown identifiers
    pub fn new(fallback: Tz) -> Self {
        Self { fallback }
    }

    /// Create a resolver with the fallback given by identifier
    pub fn with_fallback(fallback: &str) -> ZoneResult<Self> {
        Ok(Self::new(parse_timezone(fallback)?))
    }

    fn resolve(&self, timezone: &str) -> Tz {
        match timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                debug!(
                    "Unknown timezone {}, falling back to {}",
                    timezone,
                    self.fallback
                );
                self.fallback
            }
        }
    }
}

impl Default for TzDatabase {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl OffsetResolver for TzDatabase {
    fn offset_minutes(&self, timezone: &str, instant: DateTime<Utc>) -> i64 {
        let tz = self.resolve(timezone);
        let seconds = tz
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();
        i64::from(seconds) / 60
    }
}

/// Fixed offsets per identifier, independent of the instant
#[derive(Debug, Clone, Default)]
pub struct FixedOffsets {
    offsets: HashMap<String, i64>,
    default_offset: i64,
}

impl FixedOffsets {
    /// Create an empty table where unknown identifiers resolve to UTC
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset used for identifiers not in the table
    pub fn with_default(mut self, offset_minutes: i64) -> Self {
        self.default_offset = offset_minutes;
        self
    }

    /// Add an identifier with its offset in minutes
    pub fn with_zone(mut self, timezone: impl Into<String>, offset_minutes: i64) -> Self {
        self.offsets.insert(timezone.into(), offset_minutes);
        self
    }
}

impl OffsetResolver for FixedOffsets {
    fn offset_minutes(&self, timezone: &str, _instant: DateTime<Utc>) -> i64 {
        *self.offsets.get(timezone).unwrap_or(&self.default_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tz_database_offsets() {
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 14, 30, 0).unwrap();
        let db = TzDatabase::default();

        assert_eq!(db.offset_minutes("Asia/Tokyo", winter), 540);
        assert_eq!(db.offset_minutes("Asia/Kolkata", winter), 330);
        assert_eq!(db.offset_minutes("Asia/Kathmandu", winter), 345);
        assert_eq!(db.offset_minutes("America/New_York", winter), -300);
        assert_eq!(db.offset_minutes("America/New_York", summer), -240);
        assert_eq!(db.offset_minutes("Europe/London", winter), 0);
        assert_eq!(db.offset_minutes("Europe/London", summer), 60);
    }

    #[test]
    fn test_tz_database_fallback() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap();
        let db = TzDatabase::with_fallback("Europe/Helsinki").unwrap();

        assert_eq!(db.offset_minutes("Not/AZone", instant), 120);
        assert_eq!(db.offset_minutes("", instant), 120);
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("America/Los_Angeles").is_ok());
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
        assert!(TzDatabase::with_fallback("nowhere").is_err());
    }

    #[test]
    fn test_fixed_offsets() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let offsets = FixedOffsets::new()
            .with_zone("east", 120)
            .with_zone("west", -420)
            .with_default(60);

        assert_eq!(offsets.offset_minutes("east", instant), 120);
        assert_eq!(offsets.offset_minutes("west", instant), -420);
        assert_eq!(offsets.offset_minutes("elsewhere", instant), 60);
    }
}
