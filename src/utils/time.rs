/// Number of minutes in a day, the size of the circular minute domain
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Mathematical modulo, always in `[0, modulus)` even for negative values
///
/// Panics if `modulus` is not positive.
pub fn positive_modulo(value: i64, modulus: i64) -> i64 {
    assert!(modulus > 0, "modulus must be positive, got {}", modulus);
    value.rem_euclid(modulus)
}

/// Format a minute-of-day as zero-padded HH:MM
///
/// Unnormalized values (negative, or past midnight) wrap around the day.
pub fn format_time(minute_of_day: i64) -> String {
    let minute = positive_modulo(minute_of_day, MINUTES_PER_DAY);
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Format a duration in minutes as "Xh Ym", dropping the zero part
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
