pub mod render;
pub mod scheduler;

pub use render::{render_json, render_text};

use crate::components::clock::{
    local_minute_of_day, local_time_string, utc_day_start, utc_offset_label, OffsetResolver,
};
use crate::components::meeting::{compute_overlap_slots, LocalSlotTime, OverlapSlot};
use crate::components::work_hours::{classify, MinuteRange, Person, Status};
use crate::utils::time::{format_duration, format_time};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One person's line on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    pub name: String,
    pub timezone: String,
    pub local_time: String,
    pub local_minute: i64,
    pub offset_label: String,
    pub status: Status,
    pub distance_minutes: i64,
    /// Working hours with their length, e.g. "09:00-17:00 (8h)"
    pub work_hours: String,
    pub work_ranges: Vec<MinuteRange>,
}

/// One shared meeting window on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRow {
    pub start_utc: String,
    pub end_utc: String,
    pub display_range: String,
    pub local_times: Vec<LocalSlotTime>,
    pub duration_label: String,
}

/// Everything shown for one refresh of the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub viewer_timezone: String,
    pub viewer_time: String,
    pub team: Option<String>,
    pub people: Vec<PersonRow>,
    pub meetings: Vec<MeetingRow>,
}

impl PersonRow {
    fn new(person: &Person, instant: DateTime<Utc>, resolver: &dyn OffsetResolver) -> Self {
        let local_minute = local_minute_of_day(instant, &person.timezone, resolver);
        let distance_minutes = person.work_hours.distance_to_range(local_minute);
        Self {
            name: person.name.clone(),
            timezone: person.timezone.clone(),
            local_time: format_time(local_minute),
            local_minute,
            offset_label: utc_offset_label(&person.timezone, instant, resolver),
            status: classify(distance_minutes),
            distance_minutes,
            work_hours: format!(
                "{} ({})",
                person.work_hours,
                format_duration(person.work_hours.duration_minutes())
            ),
            work_ranges: person.work_hours.ranges(),
        }
    }
}

impl MeetingRow {
    fn new(
        slot: &OverlapSlot,
        people: &[Person],
        viewer_timezone: &str,
        day_start: DateTime<Utc>,
        resolver: &dyn OffsetResolver,
    ) -> Self {
        Self {
            start_utc: format_time(slot.start_minute_utc),
            end_utc: format_time(slot.end_minute_utc),
            display_range: slot.display_range(viewer_timezone, day_start, resolver),
            local_times: slot.local_times(people, day_start, resolver),
            duration_label: slot.duration_label(),
        }
    }
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of people currently inside their working hours
    pub fn working_count(&self) -> usize {
        self.people
            .iter()
            .filter(|row| row.status == Status::InWindow)
            .count()
    }
}

/// Compute the dashboard for `people` at `instant`
pub fn build_snapshot(
    people: &[Person],
    instant: DateTime<Utc>,
    viewer_timezone: &str,
    team: Option<&str>,
    resolver: &dyn OffsetResolver,
) -> Snapshot {
    let day_start = utc_day_start(instant);

    let rows = people
        .iter()
        .map(|person| PersonRow::new(person, instant, resolver))
        .collect();

    let meetings = compute_overlap_slots(people, instant, resolver)
        .iter()
        .map(|slot| MeetingRow::new(slot, people, viewer_timezone, day_start, resolver))
        .collect();

    Snapshot {
        generated_at: instant,
        viewer_timezone: viewer_timezone.to_string(),
        viewer_time: local_time_string(instant, viewer_timezone, resolver),
        team: team.map(str::to_string),
        people: rows,
        meetings,
    }
}
