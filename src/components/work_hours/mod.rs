pub mod models;
pub mod status;

pub use models::{MinuteRange, Person, WorkHours};
pub use status::{classify, Status, NEAR_THRESHOLD_MINUTES};
