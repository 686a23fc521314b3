use super::{MeetingRow, PersonRow, Snapshot};
use crate::error::ZoneResult;

const EMPTY_ROSTER: &str = "Add people to see their timezones";
const NO_OVERLAP: &str = "No full overlap found for all members";

const WORK_CELL: char = '█';
const OFF_CELL: char = '·';

/// 24 cells, one per local hour, with the current hour marked by status
pub fn hour_bar(row: &PersonRow) -> String {
    let current_hour = row.local_minute / 60;
    (0..24i64)
        .map(|hour| {
            if hour == current_hour {
                row.status.marker()
            } else if row.work_ranges.iter().any(|r| r.contains(hour * 60)) {
                WORK_CELL
            } else {
                OFF_CELL
            }
        })
        .collect()
}

fn person_lines(row: &PersonRow, name_width: usize, zone_width: usize) -> String {
    format!(
        "  {} {:<name_width$}  {:<zone_width$}  {}  {:<9} {:<8} {}\n    {}\n",
        row.status.marker(),
        row.name,
        row.timezone,
        row.local_time,
        row.offset_label,
        row.status,
        row.work_hours,
        hour_bar(row),
    )
}

fn meeting_lines(meeting: &MeetingRow) -> String {
    let local_times = meeting
        .local_times
        .iter()
        .map(|t| format!("{}: {}–{}", t.name, t.start, t.end))
        .collect::<Vec<_>>()
        .join(" · ");
    format!(
        "  {}  ({} – {} UTC)  {}\n    {}\n",
        meeting.display_range,
        meeting.start_utc,
        meeting.end_utc,
        meeting.duration_label,
        local_times
    )
}

fn header(snapshot: &Snapshot) -> String {
    let mut header = format!(
        "{}  ({} {})",
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC"),
        snapshot.viewer_timezone,
        snapshot.viewer_time
    );
    if let Some(team) = &snapshot.team {
        header.push_str(&format!("  team: {}", team));
    }
    header.push('\n');
    header
}

/// Plain text dashboard for the terminal
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = header(snapshot);
    out.push('\n');

    if snapshot.is_empty() {
        out.push_str(EMPTY_ROSTER);
        out.push('\n');
        return out;
    }

    let name_width = snapshot.people.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let zone_width = snapshot.people.iter().map(|r| r.timezone.len()).max().unwrap_or(0);

    out.push_str("Timelines\n");
    for row in &snapshot.people {
        out.push_str(&person_lines(row, name_width, zone_width));
    }

    out.push('\n');
    out.push_str(&render_meetings(snapshot));
    out
}

/// Only the "Best meeting times" section
pub fn render_meetings(snapshot: &Snapshot) -> String {
    let mut out = format!("Best meeting times ({})\n", snapshot.viewer_timezone);
    if snapshot.meetings.is_empty() {
        out.push_str(&format!("  {}\n", NO_OVERLAP));
    } else {
        for meeting in &snapshot.meetings {
            out.push_str(&meeting_lines(meeting));
        }
    }
    out
}

/// Pretty-printed JSON dashboard
pub fn render_json(snapshot: &Snapshot) -> ZoneResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::clock::TzDatabase;
    use crate::components::dashboard::build_snapshot;
    use crate::components::work_hours::{Person, WorkHours};
    use chrono::{DateTime, TimeZone, Utc};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap()
    }

    fn pair() -> Vec<Person> {
        vec![
            Person::new("Aino", "Europe/Helsinki", WorkHours::new(9, 17)),
            Person::new("Olly", "Europe/London", WorkHours::new(9, 17)),
        ]
    }

    #[test]
    fn test_hour_bar() {
        let snapshot = build_snapshot(&pair(), reference(), "UTC", None, &TzDatabase::default());
        // Aino is at 16:30, inside 09-17
        assert_eq!(
            hour_bar(&snapshot.people[0]),
            "·········███████●·······"
        );
        assert_eq!(hour_bar(&snapshot.people[0]).chars().count(), 24);
    }

    #[test]
    fn test_render_text_sections() {
        let snapshot = build_snapshot(&pair(), reference(), "UTC", Some("Nordics"), &TzDatabase::default());
        let text = render_text(&snapshot);

        assert!(text.starts_with("2026-01-15 14:30 UTC  (UTC 14:30)  team: Nordics\n"));
        assert!(text.contains("Timelines"));
        assert!(text.contains("Aino  Europe/Helsinki  16:30  UTC+2"));
        assert!(text.contains("09:00-17:00 (8h)"));
        assert!(text.contains("Best meeting times (UTC)"));
        assert!(text.contains("09:00 – 15:00  (09:00 – 15:00 UTC)  6h"));
        assert!(text.contains("Aino: 11:00–17:00 · Olly: 09:00–15:00"));
    }

    #[test]
    fn test_render_text_no_overlap() {
        let people = vec![
            Person::new("Lee", "America/Los_Angeles", WorkHours::new(9, 17)),
            Person::new("Ren", "Asia/Tokyo", WorkHours::new(9, 17)),
            Person::new("Olly", "Europe/London", WorkHours::new(9, 17)),
        ];
        let snapshot = build_snapshot(&people, reference(), "UTC", None, &TzDatabase::default());
        assert!(render_text(&snapshot).contains(NO_OVERLAP));
    }

    #[test]
    fn test_render_text_empty_roster() {
        let snapshot = build_snapshot(&[], reference(), "UTC", None, &TzDatabase::default());
        let text = render_text(&snapshot);
        assert!(text.contains(EMPTY_ROSTER));
        assert!(!text.contains("Timelines"));
    }

    #[test]
    fn test_render_json() {
        let snapshot = build_snapshot(&pair(), reference(), "UTC", None, &TzDatabase::default());
        let json: serde_json::Value = serde_json::from_str(&render_json(&snapshot).unwrap()).unwrap();

        assert_eq!(json["generated_at"], "2026-01-15T14:30:00Z");
        assert_eq!(json["people"][0]["status"], "in-window");
        assert_eq!(json["people"][1]["local_time"], "14:30");
        assert_eq!(json["meetings"][0]["duration_label"], "6h");
        assert_eq!(json["team"], serde_json::Value::Null);
    }
}
