// Export components
pub mod clock;
pub mod dashboard;
pub mod meeting;
pub mod roster;
pub mod work_hours;

// Re-export the types most callers need
pub use clock::{FixedOffsets, OffsetResolver, TzDatabase};
pub use dashboard::{build_snapshot, Snapshot};
pub use meeting::{compute_overlap_slots, OverlapSlot};
pub use roster::Roster;
pub use work_hours::{Person, Status, WorkHours};
