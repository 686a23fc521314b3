use crate::components::work_hours::{Person, WorkHours};
use serde::{Deserialize, Serialize};

fn default_work_start_hour() -> u32 {
    9
}

fn default_work_end_hour() -> u32 {
    17
}

/// A team declared in the roster file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// A person declared in the roster file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    /// IANA timezone identifier
    pub timezone: String,
    #[serde(default = "default_work_start_hour")]
    pub work_start_hour: u32,
    #[serde(default = "default_work_end_hour")]
    pub work_end_hour: u32,
    /// Name of the team this person belongs to, if any
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl PersonEntry {
    pub fn work_hours(&self) -> WorkHours {
        WorkHours::new(self.work_start_hour, self.work_end_hour)
    }

    pub fn to_person(&self) -> Person {
        Person::new(self.name.clone(), self.timezone.clone(), self.work_hours())
    }

    pub fn is_in_team(&self, team: &str) -> bool {
        self.team.as_deref() == Some(team)
    }
}
