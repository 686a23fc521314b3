use super::{build_snapshot, render_json, render_text, Snapshot};
use crate::components::clock::OffsetResolver;
use crate::components::work_hours::Person;
use crate::config::DEFAULT_REFRESH_INTERVAL;
use crate::error::ZoneResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

/// What the refresh loop shows and how often
#[derive(Debug, Clone)]
pub struct RefreshSettings {
    pub interval: Duration,
    pub viewer_timezone: String,
    pub team: Option<String>,
    pub json: bool,
    /// Evaluate at this instant instead of the current time
    pub at: Option<DateTime<Utc>>,
}

impl RefreshSettings {
    pub fn instant(&self) -> DateTime<Utc> {
        self.at.unwrap_or_else(Utc::now)
    }

    /// Compute the snapshot for the current refresh
    pub fn snapshot(&self, people: &[Person], resolver: &dyn OffsetResolver) -> Snapshot {
        build_snapshot(
            people,
            self.instant(),
            &self.viewer_timezone,
            self.team.as_deref(),
            resolver,
        )
    }

    /// Render a snapshot in the configured format
    pub fn render(&self, snapshot: &Snapshot) -> ZoneResult<String> {
        if self.json {
            render_json(snapshot)
        } else {
            Ok(render_text(snapshot))
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL),
            viewer_timezone: "UTC".to_string(),
            team: None,
            json: false,
            at: None,
        }
    }
}

fn refresh<F>(
    settings: &RefreshSettings,
    people: &[Person],
    resolver: &dyn OffsetResolver,
    output: &mut F,
) where
    F: FnMut(&str),
{
    let snapshot = settings.snapshot(people, resolver);
    debug!(
        "Refreshed dashboard: {} people, {} working, {} meeting slots",
        snapshot.people.len(),
        snapshot.working_count(),
        snapshot.meetings.len()
    );
    match settings.render(&snapshot) {
        Ok(rendered) => output(&rendered),
        Err(e) => error!("Failed to render dashboard: {}", e),
    }
}

/// Render the dashboard now and then on every interval until shutdown
///
/// Returns the number of refreshes performed.
pub async fn run_refresh_loop<F>(
    settings: RefreshSettings,
    people: Vec<Person>,
    resolver: Arc<dyn OffsetResolver>,
    mut shutdown: oneshot::Receiver<()>,
    mut output: F,
) -> u64
where
    F: FnMut(&str),
{
    info!(
        "Starting dashboard refresh every {}s for {} people",
        settings.interval.as_secs_f64(),
        people.len()
    );

    let mut ticker = interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately
    ticker.tick().await;

    refresh(&settings, &people, resolver.as_ref(), &mut output);
    let mut refreshes = 1;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Stopping dashboard refresh after {} refreshes", refreshes);
                break;
            }
            _ = ticker.tick() => {
                refresh(&settings, &people, resolver.as_ref(), &mut output);
                refreshes += 1;
            }
        }
    }

    refreshes
}
