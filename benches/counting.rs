use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use wfreq::{Counter, CounterConfig};

fn build_text() -> String {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog",
        "and", "runs", "don't", "stop",
    ];
    let mut text = String::with_capacity(1 << 20);
    let mut i = 0usize;
    while text.len() < 1 << 20 {
        text.push_str(words[i % words.len()]);
        text.push(if i % 13 == 0 { '.' } else { ' ' });
        i += 1;
    }
    text
}

fn bench_counting(c: &mut Criterion) {
    let text = build_text();

    let mut group = c.benchmark_group("count_text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.sampling_mode(SamplingMode::Flat);
    for workers in [1usize, 4, 8] {
        let cfg = CounterConfig::builder()
            .workers(workers)
            .show_progress(false)
            .build()
            .expect("configuration");
        group.bench_function(BenchmarkId::from_parameter(workers), |b| {
            b.iter(|| {
                let counter = Counter::new(cfg.clone());
                let artifacts = counter.count_text(&text).expect("counting");
                let _ = black_box(artifacts);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_counting);
criterion_main!(benches);
