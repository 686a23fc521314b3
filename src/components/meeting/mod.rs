pub mod models;

pub use models::{LocalSlotTime, OverlapSlot};

use crate::components::clock::{utc_day_start, OffsetResolver};
use crate::components::work_hours::Person;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Sampling step of the day sweep, in minutes
pub const SAMPLE_STEP_MINUTES: i64 = 15;

/// Stretches of the UTC day containing `reference` when everyone is working
///
/// The day is sampled every [`SAMPLE_STEP_MINUTES`]; each person's offset is
/// resolved at the sample instant. An empty `people` list has no slots.
pub fn compute_overlap_slots(
    people: &[Person],
    reference: DateTime<Utc>,
    resolver: &dyn OffsetResolver,
) -> Vec<OverlapSlot> {
    if people.is_empty() {
        return Vec::new();
    }

    let day_start = utc_day_start(reference);
    let mut slots = Vec::new();
    let mut run_start: Option<i64> = None;

    for utc_minute in (0..MINUTES_PER_DAY).step_by(SAMPLE_STEP_MINUTES as usize) {
        let sample = day_start + Duration::minutes(utc_minute);
        let all_working = people
            .iter()
            .all(|person| person.is_working_at(sample, resolver));

        match (all_working, run_start) {
            (true, None) => run_start = Some(utc_minute),
            (false, Some(start)) => {
                slots.push(OverlapSlot::new(start, utc_minute));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        slots.push(OverlapSlot::new(start, MINUTES_PER_DAY));
    }

    debug!(
        "Found {} overlap slots for {} people on {}",
        slots.len(),
        people.len(),
        day_start.format("%Y-%m-%d")
    );

    slots
}
