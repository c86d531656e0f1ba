use criterion::{Criterion, criterion_group, criterion_main};
use trainer_console::stats::aggregate;
use traineeapp_client::TrainingRecord;

fn bench_aggregate(c: &mut Criterion) {
    const ACTIVITIES: &[&str] = &["Running", "Spinning", "Yoga", "Gym training", "Swimming"];
    let records: Vec<TrainingRecord> = (0..10_000)
        .map(|i| TrainingRecord {
            id: Some(i),
            date: "2026-08-12T10:00:00.000+00:00".into(),
            duration: (i % 90) as i64,
            activity: ACTIVITIES[i as usize % ACTIVITIES.len()].into(),
            customer: None,
        })
        .collect();

    c.bench_function("aggregate_10k_records", |b| {
        b.iter(|| {
            let totals = aggregate(std::hint::black_box(&records));
            std::hint::black_box(totals)
        })
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
