//! Training list: global filter, sort by column, dates shown as DD.MM.YY HH:mm.

use crate::error::{ConsoleError, ConsoleResult};
use traineeapp_client::TrainingRecord;

pub const COLUMNS: &[&str] = &["date", "duration", "activity", "customer"];

/// One display row of the training table. `date` keeps the API's raw
/// timestamp so chronological sorting stays correct; formatting happens at
/// render time.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingRow {
    pub date: String,
    pub duration: i64,
    pub activity: String,
    pub customer: String,
}

pub fn rows(records: &[TrainingRecord]) -> Vec<TrainingRow> {
    records
        .iter()
        .map(|r| TrainingRow {
            date: r.date.clone(),
            duration: r.duration,
            activity: r.activity.clone(),
            customer: r
                .customer
                .as_ref()
                .map(|c| c.full_name())
                .unwrap_or_default(),
        })
        .collect()
}

/// Format an API timestamp as `DD.MM.YY HH:mm`; unparseable input is shown
/// verbatim rather than dropped.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%y %H:%M").to_string();
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return ndt.format("%d.%m.%y %H:%M").to_string();
    }
    raw.to_string()
}

/// Keep rows whose rendered cells contain `query`, case-insensitively.
/// Mirrors the original console's search-in-all-columns box.
pub fn filter(rows: &[TrainingRow], query: &str) -> Vec<TrainingRow> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|r| {
            format_date(&r.date).to_lowercase().contains(&needle)
                || r.duration.to_string().contains(&needle)
                || r.activity.to_lowercase().contains(&needle)
                || r.customer.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sort in place by a column name from [`COLUMNS`].
pub fn sort_by_column(rows: &mut [TrainingRow], column: &str) -> ConsoleResult<()> {
    match column {
        // RFC3339 timestamps sort chronologically as strings
        "date" => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        "duration" => rows.sort_by_key(|r| r.duration),
        "activity" => rows.sort_by(|a, b| a.activity.cmp(&b.activity)),
        "customer" => rows.sort_by(|a, b| a.customer.cmp(&b.customer)),
        other => {
            return Err(ConsoleError::InvalidArgument(format!(
                "unknown training column '{}', expected one of: {}",
                other,
                COLUMNS.join(", ")
            )));
        }
    }
    Ok(())
}

pub fn render(rows: &[TrainingRow]) -> String {
    let headers = ["Date", "Duration (min)", "Activity", "Customer"];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                format_date(&r.date),
                r.duration.to_string(),
                r.activity.clone(),
                r.customer.clone(),
            ]
        })
        .collect();
    super::render_table(&headers, &cells)
}
