use crate::components::clock::parse_timezone;
use crate::error::{config_error, ZoneResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default roster file location
pub const DEFAULT_ROSTER_PATH: &str = "config/roster.toml";

/// Default refresh interval in seconds
pub const DEFAULT_REFRESH_INTERVAL: u64 = 30;

/// Main configuration structure for the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the TOML roster with people and teams
    pub roster_path: PathBuf,
    /// Timezone of the viewer, also used for unknown identifiers
    pub timezone: String,
    /// Seconds between refreshes in watch mode
    pub refresh_interval: u64,
    /// Only show this team
    pub team: Option<String>,
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub roster_path: Option<PathBuf>,
    pub timezone: Option<String>,
    pub refresh_interval: Option<u64>,
    pub team: Option<String>,
}

impl Config {
    /// Load configuration from the environment and an optional .env file
    ///
    /// Command line values in `overrides` win over the environment. The
    /// result is validated once everything is applied.
    pub fn load(overrides: Overrides) -> ZoneResult<Self> {
        // Load .env file if it exists
        dotenv().ok();
        Self::from_sources(|key| env::var(key).ok(), overrides)
    }

    /// Build configuration from a variable getter (for testing)
    pub fn from_getter<F>(get: F) -> ZoneResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(get, Overrides::default())
    }

    /// Build configuration from a variable getter with command line overrides
    pub fn from_sources<F>(get: F, overrides: Overrides) -> ZoneResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|s| !s.trim().is_empty());

        let roster_path = overrides
            .roster_path
            .or_else(|| get("ROSTER_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_PATH));

        let timezone = overrides
            .timezone
            .or_else(|| get("TIMEZONE"))
            .unwrap_or_else(|| String::from("UTC"));

        let refresh_interval = match (overrides.refresh_interval, get("REFRESH_INTERVAL")) {
            (Some(interval), _) => interval,
            (None, Some(value)) => value.trim().parse::<u64>().map_err(|_| {
                config_error(&format!("Invalid REFRESH_INTERVAL format: {}", value))
            })?,
            (None, None) => DEFAULT_REFRESH_INTERVAL,
        };

        let team = overrides.team.or_else(|| get("TEAM"));

        let config = Config {
            roster_path,
            timezone,
            refresh_interval,
            team,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the viewer timezone and refresh interval
    pub fn validate(&self) -> ZoneResult<()> {
        parse_timezone(&self.timezone)
            .map_err(|_| config_error(&format!("Unknown TIMEZONE: {}", self.timezone)))?;
        if self.refresh_interval == 0 {
            return Err(config_error("REFRESH_INTERVAL must be at least 1 second"));
        }
        Ok(())
    }

    pub fn refresh_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            timezone: String::from("UTC"),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            team: None,
        }
    }
}
