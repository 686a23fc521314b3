use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for zonesync
#[derive(Parser, Debug)]
#[command(
    name = "zonesync",
    version = env!("CARGO_PKG_VERSION"),
    about = "See your team's local times, who is working, and when everyone overlaps",
    long_about = None
)]
pub struct Cli {
    /// Roster file with people and teams (overrides ROSTER_PATH)
    #[arg(global = true, long = "roster")]
    pub roster: Option<PathBuf>,

    /// Only show one team (overrides TEAM)
    #[arg(global = true, long = "team", short = 't')]
    pub team: Option<String>,

    /// Your own timezone, used for meeting times (overrides TIMEZONE)
    #[arg(global = true, long = "timezone", short = 'z')]
    pub timezone: Option<String>,

    /// Evaluate at a fixed RFC 3339 instant instead of now
    #[arg(global = true, long = "at")]
    pub at: Option<String>,

    /// Print JSON instead of text
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the dashboard once (default)
    Show,

    /// Keep the dashboard refreshed until interrupted
    Watch {
        /// Seconds between refreshes (overrides REFRESH_INTERVAL)
        #[arg(long = "interval", short = 'i')]
        interval: Option<u64>,
    },

    /// Show only the best meeting times
    Meet,

    /// List timezones, optionally filtered
    Zones {
        /// City, identifier or offset such as "UTC+5:30"
        query: Option<String>,
    },

    /// List the teams in the roster
    Teams,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show)
    }
}
