//! End-to-end view tests: API-shaped JSON in, rendered text out.

use trainer_console::stats;
use trainer_console::views::{calendar, customers, trainings};
use traineeapp_client::{Customer, TrainingRecord};

fn sample_trainings() -> Vec<TrainingRecord> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1, "date": "2026-08-12T10:00:00.000+00:00",
            "duration": 60, "activity": "Spinning",
            "customer": {"firstname": "Aino", "lastname": "Virtanen"}
        },
        {
            "id": 2, "date": "2026-08-20T18:30:00.000+00:00",
            "duration": 30, "activity": "Running",
            "customer": {"firstname": "Pekka", "lastname": "Korhonen"}
        },
        {
            "id": 3, "date": "2026-08-25T09:00:00.000+00:00",
            "duration": 20, "activity": "Running",
            "customer": {"firstname": "Aino", "lastname": "Virtanen"}
        }
    ]))
    .expect("trainings")
}

#[test]
fn training_table_shows_formatted_dates_and_names() {
    let rows = trainings::rows(&sample_trainings());
    let out = trainings::render(&rows);
    assert!(out.contains("12.08.26 10:00"));
    assert!(out.contains("Aino Virtanen"));
    assert!(out.contains("Spinning"));
}

#[test]
fn filtered_sorted_training_table() {
    let mut rows = trainings::rows(&sample_trainings());
    rows = trainings::filter(&rows, "running");
    trainings::sort_by_column(&mut rows, "duration").expect("sort");
    let out = trainings::render(&rows);
    let lines: Vec<&str> = out.lines().collect();
    // header, separator, then the two Running rows shortest first
    assert_eq!(lines.len(), 4);
    assert!(lines[2].contains("20"));
    assert!(lines[3].contains("30"));
}

#[test]
fn stats_pipeline_matches_worked_example() {
    let mut totals = stats::aggregate(&sample_trainings());
    totals.sort_by(|a, b| a.activity.cmp(&b.activity));
    let chart = stats::render_chart(&totals);
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Running"));
    assert!(lines[0].contains("50"));
    assert!(lines[1].starts_with("Spinning"));
    assert!(lines[1].contains("60"));
}

#[test]
fn calendar_pipeline_places_all_august_sessions() {
    let sessions = calendar::sessions_for_month(&sample_trainings(), 2026, 8);
    assert_eq!(sessions.len(), 3);
    let out = calendar::render_month(2026, 8, &sessions).expect("render");
    assert!(out.contains("12*"));
    assert!(out.contains("20*"));
    assert!(out.contains("25*"));
    assert!(out.contains("20.08. 18:30-19:00  Pekka Korhonen - Running"));
}

#[test]
fn customer_view_roundtrips_api_page_shape() {
    let page: Vec<Customer> = serde_json::from_value(serde_json::json!([
        {
            "firstname": "Aino", "lastname": "Virtanen", "city": "Helsinki",
            "email": "aino@example.com",
            "links": [{"rel": "self", "href": "http://x/api/customers/5"}]
        },
        {
            "firstname": "Pekka", "lastname": "Korhonen", "city": "Espoo",
            "links": [{"rel": "self", "href": "http://x/api/customers/9"}]
        }
    ]))
    .expect("customers");
    let filtered = customers::filter(&page, "espoo");
    let out = customers::render(&filtered);
    assert!(out.contains("Korhonen"));
    assert!(!out.contains("Virtanen"));
    assert!(out.contains('9'));
}
