use chrono::{DateTime, TimeZone, Utc};
use std::io::Write;
use zonesync::components::dashboard::render_text;
use zonesync::components::dashboard::scheduler::{run_refresh_loop, RefreshSettings};
use zonesync::components::{build_snapshot, Roster, Status, TzDatabase};
use zonesync::config::Config;
use zonesync::error::Error;

const ROSTER: &str = r#"
[[teams]]
name = "Platform"

[[people]]
name = "Alex"
timezone = "America/New_York"
team = "Platform"

[[people]]
name = "Sam"
timezone = "Europe/London"
work_start_hour = 8
work_end_hour = 16
team = "Platform"
sort_order = 1

[[people]]
name = "Yuki"
timezone = "Asia/Tokyo"
work_start_hour = 10
work_end_hour = 18
sort_order = 2
"#;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap()
}

fn roster_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Smoke test to verify that the config can be loaded
#[test]
fn test_config_loads() {
    let config = Config::from_getter(|key| match key {
        "TIMEZONE" => Some("Europe/Helsinki".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.timezone, "Europe/Helsinki");
    assert_eq!(config.refresh_interval, 30);
}

#[test]
fn test_roster_loads_from_file() {
    let file = roster_file(ROSTER);
    let roster = Roster::load(file.path()).unwrap();

    assert_eq!(roster.people.len(), 3);
    assert_eq!(roster.member_count("Platform"), 2);
}

#[test]
fn test_missing_roster_file() {
    let err = Roster::load("/nonexistent/zonesync/roster.toml").unwrap_err();
    assert!(matches!(err, Error::Roster(_)));
}

#[test]
fn test_invalid_roster_file() {
    let file = roster_file("[[people]]\nname = \"Alex\"\n");
    assert!(Roster::load(file.path()).is_err());
}

/// At 14:30 UTC in January: New York 09:30, London 14:30, Tokyo 23:30
#[test]
fn test_dashboard_end_to_end() {
    let file = roster_file(ROSTER);
    let roster = Roster::load(file.path()).unwrap();
    let resolver = TzDatabase::default();

    let snapshot = build_snapshot(
        &roster.members(None),
        reference(),
        "Europe/Helsinki",
        None,
        &resolver,
    );

    let statuses: Vec<(&str, &str, Status)> = snapshot
        .people
        .iter()
        .map(|row| (row.name.as_str(), row.local_time.as_str(), row.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("Alex", "09:30", Status::InWindow),
            ("Sam", "14:30", Status::InWindow),
            ("Yuki", "23:30", Status::Far),
        ]
    );
    assert_eq!(snapshot.viewer_time, "16:30");
    // New York and Tokyo never share a working hour in January
    assert!(snapshot.meetings.is_empty());

    let text = render_text(&snapshot);
    assert!(text.contains("Alex"));
    assert!(text.contains("No full overlap found for all members"));
}

#[test]
fn test_dashboard_for_one_team() {
    let roster = Roster::from_toml_str(ROSTER).unwrap();
    let resolver = TzDatabase::default();

    let snapshot = build_snapshot(
        &roster.members(Some("Platform")),
        reference(),
        "UTC",
        Some("Platform"),
        &resolver,
    );

    assert_eq!(snapshot.people.len(), 2);
    assert_eq!(snapshot.meetings.len(), 1);
    // New York 09:00-17:00 is 14:00-22:00 UTC, London 08:00-16:00 is 08:00-16:00 UTC
    assert_eq!(snapshot.meetings[0].display_range, "14:00 – 16:00");
    assert_eq!(snapshot.meetings[0].duration_label, "2h");
}

#[tokio::test]
async fn test_refresh_loop_stops_on_shutdown() {
    let roster = Roster::from_toml_str(ROSTER).unwrap();
    let (shutdown_send, shutdown_recv) = tokio::sync::oneshot::channel();
    shutdown_send.send(()).unwrap();

    let settings = RefreshSettings {
        json: true,
        at: Some(reference()),
        ..RefreshSettings::default()
    };
    let mut frames = Vec::new();
    let refreshes = run_refresh_loop(
        settings,
        roster.members(None),
        std::sync::Arc::new(TzDatabase::default()),
        shutdown_recv,
        |frame| frames.push(frame.to_string()),
    )
    .await;

    assert_eq!(refreshes, 1);
    let json: serde_json::Value = serde_json::from_str(&frames[0]).unwrap();
    assert_eq!(json["people"].as_array().map(|p| p.len()), Some(3));
}
