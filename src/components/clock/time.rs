use super::OffsetResolver;
use crate::utils::time::{format_time, positive_modulo, MINUTES_PER_DAY};
use chrono::{DateTime, NaiveTime, Timelike, Utc};

/// Local minute-of-day in `timezone` at `instant`, in `[0, 1440)`
pub fn local_minute_of_day(
    instant: DateTime<Utc>,
    timezone: &str,
    resolver: &dyn OffsetResolver,
) -> i64 {
    let utc_minute = i64::from(instant.hour()) * 60 + i64::from(instant.minute());
    let offset = resolver.offset_minutes(timezone, instant);
    positive_modulo(utc_minute + offset, MINUTES_PER_DAY)
}

/// Local wall clock time in `timezone` at `instant` as HH:MM
pub fn local_time_string(
    instant: DateTime<Utc>,
    timezone: &str,
    resolver: &dyn OffsetResolver,
) -> String {
    format_time(local_minute_of_day(instant, timezone, resolver))
}

/// UTC offset label such as "UTC+2", "UTC-3:30" or "UTC+0"
pub fn utc_offset_label(
    timezone: &str,
    instant: DateTime<Utc>,
    resolver: &dyn OffsetResolver,
) -> String {
    format_offset(resolver.offset_minutes(timezone, instant))
}

/// Format an offset in minutes as a UTC label, minutes only when non-zero
pub fn format_offset(offset_minutes: i64) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let absolute = offset_minutes.abs();
    let hours = absolute / 60;
    let minutes = absolute % 60;

    if minutes == 0 {
        format!("UTC{}{}", sign, hours)
    } else {
        format!("UTC{}{}:{:02}", sign, hours, minutes)
    }
}

/// Start (00:00) of the UTC calendar day containing `instant`
pub fn utc_day_start(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
