use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance (minutes) up to which someone outside their hours counts as near
pub const NEAR_THRESHOLD_MINUTES: i64 = 120;

/// Working status derived from the distance to the working window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Inside working hours
    InWindow,
    /// Outside, but within two hours of the window
    Near,
    /// Everything else
    Far,
}

impl Status {
    /// Single character marker used in terminal output
    pub fn marker(&self) -> char {
        match self {
            Status::InWindow => '●',
            Status::Near => '◐',
            Status::Far => '○',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::InWindow => "working",
            Status::Near => "near",
            Status::Far => "off",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a distance to the working window
pub fn classify(distance_minutes: i64) -> Status {
    if distance_minutes == 0 {
        Status::InWindow
    } else if distance_minutes <= NEAR_THRESHOLD_MINUTES {
        Status::Near
    } else {
        Status::Far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(0), Status::InWindow);
        assert_eq!(classify(1), Status::Near);
        assert_eq!(classify(120), Status::Near);
        assert_eq!(classify(121), Status::Far);
        assert_eq!(classify(720), Status::Far);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Status::InWindow).unwrap(), "\"in-window\"");
        assert_eq!(serde_json::to_string(&Status::Near).unwrap(), "\"near\"");
        assert_eq!(serde_json::to_string(&Status::Far).unwrap(), "\"far\"");
    }
}
