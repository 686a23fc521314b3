use crate::components::clock::{local_minute_of_day, OffsetResolver};
use crate::utils::time::{positive_modulo, MINUTES_PER_DAY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::{classify, Status};

/// Half-open range of minutes, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinuteRange {
    pub start: i64,
    pub end: i64,
}

impl MinuteRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }

    /// The same range moved by `minutes`
    pub fn shifted(&self, minutes: i64) -> Self {
        Self::new(self.start + minutes, self.end + minutes)
    }

    /// Minutes from `probe` to the nearest boundary of the range, 0 if inside
    ///
    /// `end` is outside the half-open range, so a probe sitting exactly on it
    /// still counts as 1 minute away.
    pub fn distance_from(&self, probe: i64) -> i64 {
        if probe < self.start {
            self.start - probe
        } else if probe >= self.end {
            (probe - self.end).max(1)
        } else {
            0
        }
    }
}

impl fmt::Display for MinuteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A person's daily working window, in local whole hours
///
/// Start and end are taken modulo 24. `end <= start` wraps past midnight,
/// `start == end` is a full day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl WorkHours {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn start_minute(&self) -> i64 {
        i64::from(self.start_hour % 24) * 60
    }

    pub fn end_minute(&self) -> i64 {
        i64::from(self.end_hour % 24) * 60
    }

    /// Minute ranges within `[0, 1440)` covering the window
    ///
    /// A window wrapping past midnight gives two ranges, the second one empty
    /// when it ends exactly at midnight.
    pub fn ranges(&self) -> Vec<MinuteRange> {
        let start = self.start_minute();
        let end = self.end_minute();

        if start == end {
            vec![MinuteRange::new(0, MINUTES_PER_DAY)]
        } else if start < end {
            vec![MinuteRange::new(start, end)]
        } else {
            vec![
                MinuteRange::new(start, MINUTES_PER_DAY),
                MinuteRange::new(0, end),
            ]
        }
    }

    /// Whether the minute-of-day (any integer, wrapped onto the day) is inside
    pub fn contains(&self, minute_of_day: i64) -> bool {
        let minute = positive_modulo(minute_of_day, MINUTES_PER_DAY);
        self.ranges().iter().any(|range| range.contains(minute))
    }

    /// Circular distance in minutes to the window, 0 when inside
    pub fn distance_to_range(&self, minute_of_day: i64) -> i64 {
        let minute = positive_modulo(minute_of_day, MINUTES_PER_DAY);
        if self.contains(minute) {
            return 0;
        }

        // Probe today and tomorrow against today's and tomorrow's ranges so the
        // nearest edge is found even when it lies across midnight
        let ranges = self.ranges();
        let candidates: Vec<MinuteRange> = ranges
            .iter()
            .copied()
            .chain(ranges.iter().map(|range| range.shifted(MINUTES_PER_DAY)))
            .collect();

        [minute, minute + MINUTES_PER_DAY]
            .iter()
            .flat_map(|&probe| candidates.iter().map(move |range| range.distance_from(probe)))
            .min()
            .unwrap_or(MINUTES_PER_DAY)
    }

    /// Total working minutes per day
    pub fn duration_minutes(&self) -> i64 {
        self.ranges()
            .iter()
            .map(|range| range.end - range.start)
            .sum()
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self::new(9, 17)
    }
}

impl fmt::Display for WorkHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start_hour % 24, self.end_hour % 24)
    }
}

/// A team member as seen by the clock math
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub timezone: String,
    pub work_hours: WorkHours,
}

impl Person {
    pub fn new(name: impl Into<String>, timezone: impl Into<String>, work_hours: WorkHours) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
            work_hours,
        }
    }

    /// Local minute-of-day for this person at `instant`
    pub fn local_minute(&self, instant: DateTime<Utc>, resolver: &dyn OffsetResolver) -> i64 {
        local_minute_of_day(instant, &self.timezone, resolver)
    }

    /// Whether this person is inside their working window at `instant`
    pub fn is_working_at(&self, instant: DateTime<Utc>, resolver: &dyn OffsetResolver) -> bool {
        self.work_hours.contains(self.local_minute(instant, resolver))
    }

    /// Minutes to this person's working window at `instant`
    pub fn distance_at(&self, instant: DateTime<Utc>, resolver: &dyn OffsetResolver) -> i64 {
        self.work_hours
            .distance_to_range(self.local_minute(instant, resolver))
    }

    /// Working status at `instant`
    pub fn status_at(&self, instant: DateTime<Utc>, resolver: &dyn OffsetResolver) -> Status {
        classify(self.distance_at(instant, resolver))
    }
}
