use super::time::utc_offset_label;
use super::TzDatabase;
use chrono::{DateTime, Utc};
use chrono_tz::TZ_VARIANTS;
use serde::Serialize;

/// A timezone as offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInfo {
    /// IANA identifier, e.g. "America/Los_Angeles"
    pub id: String,
    /// Last identifier segment with underscores as spaces, e.g. "Los Angeles"
    pub city: String,
    /// Offset label at the listing instant
    pub offset_label: String,
    /// "City (UTC±H[:MM])"
    pub display: String,
}

impl ZoneInfo {
    fn new(id: &str, instant: DateTime<Utc>, db: &TzDatabase) -> Self {
        let city = city_name(id);
        let offset_label = utc_offset_label(id, instant, db);
        let display = format!("{} ({})", city, offset_label);
        Self {
            id: id.to_string(),
            city,
            offset_label,
            display,
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.id.to_lowercase().contains(query)
            || self.city.to_lowercase().contains(query)
            || self.display.to_lowercase().contains(query)
    }
}

/// City part of an identifier
pub fn city_name(id: &str) -> String {
    id.rsplit('/').next().unwrap_or(id).replace('_', " ")
}

/// All known timezones with their offsets at `instant`, sorted by city
pub fn list_zones(instant: DateTime<Utc>) -> Vec<ZoneInfo> {
    let db = TzDatabase::default();
    let mut zones: Vec<ZoneInfo> = TZ_VARIANTS
        .iter()
        .map(|tz| ZoneInfo::new(tz.name(), instant, &db))
        .collect();
    zones.sort_by(|a, b| a.city.cmp(&b.city).then_with(|| a.id.cmp(&b.id)));
    zones
}

/// Timezones whose identifier, city or display text contains `query`
///
/// Matching is case-insensitive. An empty query returns every zone.
pub fn search_zones(query: &str, instant: DateTime<Utc>) -> Vec<ZoneInfo> {
    let query = query.trim().to_lowercase();
    let zones = list_zones(instant);
    if query.is_empty() {
        return zones;
    }
    zones.into_iter().filter(|zone| zone.matches(&query)).collect()
}
