use cloudwatch_service_metrics::{sqs, MetricOptions, Statistic};
use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    let queue = sqs::Queue::from_name("My_Queue_Name");

    c.bench_function("build", |b| {
        b.iter(|| {
            sqs::approximate_age_of_oldest_message(
                &queue,
                MetricOptions::new()
                    .statistic(Statistic::Maximum)
                    .period(Duration::from_secs(300)),
            )
        })
    });

    c.bench_function("build_and_serialize", |b| {
        b.iter(|| {
            let descriptor = sqs::approximate_age_of_oldest_message(&queue, MetricOptions::new());
            serde_json::to_writer(std::io::sink(), &descriptor)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
