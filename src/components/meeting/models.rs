use crate::components::clock::{local_time_string, OffsetResolver};
use crate::components::work_hours::Person;
use crate::utils::time::format_duration;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A stretch of a UTC day when everyone is inside their working hours
///
/// Minutes are counted from 00:00 UTC, `[start_minute_utc, end_minute_utc)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapSlot {
    pub start_minute_utc: i64,
    pub end_minute_utc: i64,
}

/// One person's local clock at the edges of a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSlotTime {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl OverlapSlot {
    pub const fn new(start_minute_utc: i64, end_minute_utc: i64) -> Self {
        Self {
            start_minute_utc,
            end_minute_utc,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_minute_utc - self.start_minute_utc
    }

    /// Duration such as "8h", "45m" or "2h 30m"
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes())
    }

    pub fn start_instant(&self, day_start: DateTime<Utc>) -> DateTime<Utc> {
        day_start + Duration::minutes(self.start_minute_utc)
    }

    pub fn end_instant(&self, day_start: DateTime<Utc>) -> DateTime<Utc> {
        day_start + Duration::minutes(self.end_minute_utc)
    }

    /// The slot in the viewer's own timezone, "HH:MM – HH:MM"
    pub fn display_range(
        &self,
        viewer_timezone: &str,
        day_start: DateTime<Utc>,
        resolver: &dyn OffsetResolver,
    ) -> String {
        format!(
            "{} – {}",
            local_time_string(self.start_instant(day_start), viewer_timezone, resolver),
            local_time_string(self.end_instant(day_start), viewer_timezone, resolver)
        )
    }

    /// Each person's local start and end of the slot, in input order
    pub fn local_times(
        &self,
        people: &[Person],
        day_start: DateTime<Utc>,
        resolver: &dyn OffsetResolver,
    ) -> Vec<LocalSlotTime> {
        let start = self.start_instant(day_start);
        let end = self.end_instant(day_start);

        people
            .iter()
            .map(|person| LocalSlotTime {
                name: person.name.clone(),
                start: local_time_string(start, &person.timezone, resolver),
                end: local_time_string(end, &person.timezone, resolver),
            })
            .collect()
    }

    /// Local times joined as "Name: HH:MM–HH:MM · Name: HH:MM–HH:MM"
    pub fn local_times_label(
        &self,
        people: &[Person],
        day_start: DateTime<Utc>,
        resolver: &dyn OffsetResolver,
    ) -> String {
        self.local_times(people, day_start, resolver)
            .iter()
            .map(|t| format!("{}: {}–{}", t.name, t.start, t.end))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
