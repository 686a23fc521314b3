pub mod models;

pub use models::{PersonEntry, TeamEntry};

use crate::components::clock::parse_timezone;
use crate::components::work_hours::Person;
use crate::error::{roster_error, ZoneResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// The people and teams shown on the clock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

impl Roster {
    /// Load and validate a roster from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ZoneResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            roster_error(&format!("Failed to read {}: {}", path.display(), e))
        })?;
        let roster = Self::from_toml_str(&content)?;
        info!(
            "Loaded roster from {} ({} people, {} teams)",
            path.display(),
            roster.people.len(),
            roster.teams.len()
        );
        Ok(roster)
    }

    /// Parse and validate a roster from TOML text
    pub fn from_toml_str(content: &str) -> ZoneResult<Self> {
        let roster: Roster = toml::from_str(content)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Check hours, names and team references
    ///
    /// Unknown timezone identifiers are only warned about; the offset
    /// resolver decides how to treat them.
    pub fn validate(&self) -> ZoneResult<()> {
        let mut team_names = HashSet::new();
        for team in &self.teams {
            if team.name.trim().is_empty() {
                return Err(roster_error("Team name cannot be empty"));
            }
            if !team_names.insert(team.name.as_str()) {
                return Err(roster_error(&format!("Duplicate team: {}", team.name)));
            }
        }

        for person in &self.people {
            if person.name.trim().is_empty() {
                return Err(roster_error("Person name cannot be empty"));
            }
            if person.work_start_hour > 23 || person.work_end_hour > 23 {
                return Err(roster_error(&format!(
                    "Working hours for {} must be between 0 and 23, got {}-{}",
                    person.name, person.work_start_hour, person.work_end_hour
                )));
            }
            if let Some(team) = &person.team {
                if !team_names.contains(team.as_str()) {
                    return Err(roster_error(&format!(
                        "{} belongs to undeclared team {}",
                        person.name, team
                    )));
                }
            }
            if parse_timezone(&person.timezone).is_err() {
                warn!(
                    "Unknown timezone {} for {}, the fallback timezone will be used",
                    person.timezone, person.name
                );
            }
        }

        Ok(())
    }

    /// Teams in display order
    pub fn teams(&self) -> Vec<&TeamEntry> {
        let mut teams: Vec<&TeamEntry> = self.teams.iter().collect();
        teams.sort_by_key(|team| team.sort_order);
        teams
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team.name == name)
    }

    /// Number of people in a team
    pub fn member_count(&self, team: &str) -> usize {
        self.people.iter().filter(|p| p.is_in_team(team)).count()
    }

    /// People in display order, optionally limited to one team
    ///
    /// A team that isn't in the roster shows everyone.
    pub fn members(&self, team: Option<&str>) -> Vec<Person> {
        let team = match team {
            Some(name) if !self.has_team(name) => {
                warn!("Team {} is not in the roster, showing everyone", name);
                None
            }
            other => other,
        };

        let mut entries: Vec<&PersonEntry> = self
            .people
            .iter()
            .filter(|p| team.map_or(true, |name| p.is_in_team(name)))
            .collect();
        // Stable sort keeps file order for equal sort_order
        entries.sort_by_key(|p| p.sort_order);
        entries.into_iter().map(PersonEntry::to_person).collect()
    }
}
