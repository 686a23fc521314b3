use crate::cli::{Cli, Commands};
use crate::shutdown;
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zonesync::components::clock::catalog::search_zones;
use zonesync::components::clock::TzDatabase;
use zonesync::components::dashboard::render::render_meetings;
use zonesync::components::dashboard::scheduler::{run_refresh_loop, RefreshSettings};
use zonesync::components::Roster;
use zonesync::config::{Config, Overrides};
use zonesync::error::{config_error, Error};

/// Initialize logging with environment-based configuration
///
/// Logs go to stderr so the dashboard on stdout stays clean.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the config from the environment and apply command line overrides
pub fn load_config(cli: &Cli) -> miette::Result<Config> {
    let interval = match cli.command() {
        Commands::Watch { interval } => interval,
        _ => None,
    };
    let overrides = Overrides {
        roster_path: cli.roster.clone(),
        timezone: cli.timezone.clone(),
        refresh_interval: interval,
        team: cli.team.clone(),
    };

    match Config::load(overrides) {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Parse the `--at` flag
fn parse_instant(at: Option<&str>) -> miette::Result<Option<DateTime<Utc>>> {
    match at {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| config_error(&format!("Invalid --at instant {}: {}", value, e)).into()),
        None => Ok(None),
    }
}

/// Write one watch frame and flush it
///
/// Text frames clear the terminal first. JSON frames are written as they
/// are so the stream can be piped.
pub fn write_frame(out: &mut impl Write, frame: &str, json: bool) -> io::Result<()> {
    if !json {
        out.write_all(b"\x1B[2J\x1B[H")?;
    }
    writeln!(out, "{}", frame)?;
    out.flush()
}

/// Run the selected command
pub async fn run(cli: Cli, config: Config) -> miette::Result<()> {
    let at = parse_instant(cli.at.as_deref())?;
    let resolver = TzDatabase::with_fallback(&config.timezone)?;
    let settings = RefreshSettings {
        interval: config.refresh_duration(),
        viewer_timezone: config.timezone.clone(),
        team: config.team.clone(),
        json: cli.json,
        at,
    };

    let mut out = io::stdout().lock();

    if let Commands::Zones { query } = cli.command() {
        let zones = search_zones(query.as_deref().unwrap_or(""), settings.instant());
        if cli.json {
            let json = serde_json::to_string_pretty(&zones).map_err(Error::from)?;
            writeln!(out, "{}", json).map_err(Error::from)?;
        } else {
            for zone in zones {
                writeln!(out, "{:<40} {}", zone.id, zone.display).map_err(Error::from)?;
            }
        }
        return Ok(());
    }

    let roster = Roster::load(&config.roster_path)?;
    let people = roster.members(config.team.as_deref());

    match cli.command() {
        Commands::Show => {
            let snapshot = settings.snapshot(&people, &resolver);
            writeln!(out, "{}", settings.render(&snapshot)?).map_err(Error::from)?;
        }
        Commands::Meet => {
            let snapshot = settings.snapshot(&people, &resolver);
            if cli.json {
                let meetings = serde_json::to_string_pretty(&snapshot.meetings).map_err(Error::from)?;
                writeln!(out, "{}", meetings).map_err(Error::from)?;
            } else {
                write!(out, "{}", render_meetings(&snapshot)).map_err(Error::from)?;
            }
        }
        Commands::Teams => {
            for team in roster.teams() {
                writeln!(out, "{} ({} people)", team.name, roster.member_count(&team.name))
                    .map_err(Error::from)?;
            }
        }
        Commands::Watch { .. } => {
            let (shutdown_send, shutdown_recv) = oneshot::channel();
            tokio::spawn(shutdown::handle_signals(shutdown_send));

            let json = settings.json;
            let refreshes = run_refresh_loop(
                settings,
                people,
                Arc::new(resolver),
                shutdown_recv,
                |frame| {
                    if let Err(e) = write_frame(&mut out, frame, json) {
                        warn!("Failed to write dashboard frame: {}", e);
                    }
                },
            )
            .await;
            info!("Watch finished after {} refreshes", refreshes);
        }
        Commands::Zones { .. } => {}
    }

    Ok(())
}
