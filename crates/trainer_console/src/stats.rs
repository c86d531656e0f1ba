//! Total minutes per activity, in a shape a bar-chart renderer can consume.

use serde::Serialize;
use std::collections::HashMap;
use traineeapp_client::TrainingRecord;

/// Aggregated total minutes for one activity label.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ActivityTotal {
    pub activity: String,
    pub minutes: i64,
}

/// Sum `duration` per distinct `activity` label.
///
/// Labels are compared by exact string equality, case-sensitive, with no
/// trimming. Each distinct label appears exactly once in the output; the
/// output order is unspecified (callers that need a stable order sort
/// themselves). Empty input yields empty output. Durations are summed
/// as-is, negative values included.
pub fn aggregate(records: &[TrainingRecord]) -> Vec<ActivityTotal> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *totals.entry(record.activity.as_str()).or_insert(0) += record.duration;
    }
    totals
        .into_iter()
        .map(|(activity, minutes)| ActivityTotal {
            activity: activity.to_string(),
            minutes,
        })
        .collect()
}

/// Render totals as a horizontal text bar chart.
///
/// One row per entry, in the order given. Bars are scaled to the largest
/// total; non-positive totals get no bar but keep their row.
pub fn render_chart(totals: &[ActivityTotal]) -> String {
    const BAR_WIDTH: usize = 40;

    if totals.is_empty() {
        return String::new();
    }
    let label_width = totals.iter().map(|t| t.activity.len()).max().unwrap_or(0);
    let scale = totals.iter().map(|t| t.minutes).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for total in totals {
        let bar_len = if total.minutes <= 0 {
            0
        } else {
            // at least one mark for any positive total
            ((total.minutes as u128 * BAR_WIDTH as u128 / scale as u128) as usize).max(1)
        };
        out.push_str(&format!(
            "{:<label_width$}  {:>6}  {}\n",
            total.activity,
            total.minutes,
            "#".repeat(bar_len),
        ));
    }
    out
}
