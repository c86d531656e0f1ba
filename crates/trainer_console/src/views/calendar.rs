//! Month view of scheduled sessions: a day grid plus an agenda list.

use crate::error::{ConsoleError, ConsoleResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use traineeapp_client::TrainingRecord;

/// One scheduled session placed on the calendar. The end time is the start
/// plus the training's duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: String,
}

/// Parse `YYYY-MM` into a validated (year, month) pair.
pub fn parse_month(input: &str) -> ConsoleResult<(i32, u32)> {
    let parsed = input
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|(y, m)| NaiveDate::from_ymd_opt(*y, *m, 1).is_some());
    parsed.ok_or_else(|| {
        ConsoleError::InvalidArgument(format!("invalid month '{}', expected YYYY-MM", input))
    })
}

fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Sessions falling in the given month, sorted by start time. Records with
/// unparseable dates are skipped; a session without a customer is titled by
/// its activity alone.
pub fn sessions_for_month(
    records: &[TrainingRecord],
    year: i32,
    month: u32,
) -> Vec<Session> {
    let mut sessions: Vec<Session> = records
        .iter()
        .filter_map(|r| {
            let start = parse_start(&r.date)?;
            if start.year() != year || start.month() != month {
                return None;
            }
            let title = match &r.customer {
                Some(c) => format!("{} - {}", c.full_name(), r.activity),
                None => r.activity.clone(),
            };
            Some(Session {
                start,
                end: start + Duration::minutes(r.duration),
                title,
            })
        })
        .collect();
    sessions.sort_by_key(|s| s.start);
    sessions
}

/// Render the month grid (session days marked with `*`) and the agenda
/// beneath it. A month with no sessions still renders its grid.
pub fn render_month(year: i32, month: u32, sessions: &[Session]) -> ConsoleResult<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ConsoleError::InvalidArgument(format!("invalid month {}-{:02}", year, month))
    })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| ConsoleError::InvalidArgument(format!("invalid month {}-{:02}", year, month)))?;
    let days_in_month = next_first.pred_opt().map(|d| d.day()).unwrap_or(31);

    let session_days: BTreeSet<u32> = sessions.iter().map(|s| s.start.day()).collect();

    let mut out = String::new();
    out.push_str(&format!("{}\n", first.format("%B %Y")));
    let header: Vec<String> = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        .iter()
        .map(|d| format!("{:>2} ", d))
        .collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');

    let mut slots: Vec<String> = vec!["   ".to_string(); first.weekday().num_days_from_monday() as usize];
    for day in 1..=days_in_month {
        let mark = if session_days.contains(&day) { '*' } else { ' ' };
        slots.push(format!("{:>2}{}", day, mark));
        if slots.len() == 7 {
            out.push_str(slots.join(" ").trim_end());
            out.push('\n');
            slots.clear();
        }
    }
    if !slots.is_empty() {
        out.push_str(slots.join(" ").trim_end());
        out.push('\n');
    }

    if !sessions.is_empty() {
        out.push('\n');
        for s in sessions {
            out.push_str(&format!(
                "{} {}-{}  {}\n",
                s.start.format("%d.%m."),
                s.start.format("%H:%M"),
                s.end.format("%H:%M"),
                s.title,
            ));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(date: &str, duration: i64, activity: &str, name: Option<(&str, &str)>) -> TrainingRecord {
        let customer = name.map(|(first, last)| json!({"firstname": first, "lastname": last}));
        serde_json::from_value(json!({
            "date": date,
            "duration": duration,
            "activity": activity,
            "customer": customer
        }))
        .expect("record")
    }

    #[test]
    fn parse_month_accepts_valid_and_rejects_invalid() {
        assert_eq!(parse_month("2026-08").unwrap(), (2026, 8));
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("aug 2026").is_err());
        assert!(parse_month("2026").is_err());
    }

    #[test]
    fn sessions_are_scoped_to_month_and_sorted() {
        let records = vec![
            record(
                "2026-08-20T18:00:00.000+00:00",
                60,
                "Spinning",
                Some(("Aino", "Virtanen")),
            ),
            record("2026-09-01T08:00:00.000+00:00", 30, "Yoga", None),
            record("2026-08-12T10:00:00.000+00:00", 45, "Running", None),
            record("not a date", 30, "Zumba", None),
        ];
        let sessions = sessions_for_month(&records, 2026, 8);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].title, "Running");
        assert_eq!(sessions[1].title, "Aino Virtanen - Spinning");
    }

    #[test]
    fn session_end_is_start_plus_duration() {
        let records = vec![record(
            "2026-08-12T10:00:00.000+00:00",
            45,
            "Running",
            None,
        )];
        let sessions = sessions_for_month(&records, 2026, 8);
        assert_eq!(
            sessions[0].end - sessions[0].start,
            Duration::minutes(45)
        );
    }

    #[test]
    fn render_marks_session_days_and_lists_agenda() {
        let records = vec![record(
            "2026-08-12T10:00:00.000+00:00",
            60,
            "Spinning",
            Some(("Aino", "Virtanen")),
        )];
        let sessions = sessions_for_month(&records, 2026, 8);
        let out = render_month(2026, 8, &sessions).expect("render");
        assert!(out.starts_with("August 2026"));
        assert!(out.contains("12*"));
        assert!(out.contains("12.08. 10:00-11:00  Aino Virtanen - Spinning"));
    }

    #[test]
    fn empty_month_still_renders_grid() {
        let out = render_month(2026, 2, &[]).expect("render");
        assert!(out.starts_with("February 2026"));
        // 2026-02-28 is the last day and no day is marked
        assert!(out.contains("28"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        let out = render_month(2026, 12, &[]).expect("render");
        assert!(out.starts_with("December 2026"));
        assert!(out.contains("31"));
    }
}
