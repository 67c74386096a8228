//! Hale KV Benchmarks
//!
//! This module contains benchmarks for the Hale Probe Table. The
//! benchmarks are implemented using the Criterion framework, which
//! provides statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode,
};
use std::time::Duration;

use hale_kv_lib::data_structures::hale_probe_table::{
    HaleProbeTable, HaleProbeTableConfig, ProbeMode,
};

fn wrapping_table(capacity: usize) -> HaleProbeTable {
    let config = HaleProbeTableConfig::new()
        .with_capacity(capacity)
        .with_probe_mode(ProbeMode::Wrapping);
    HaleProbeTable::with_config(config).expect("non-zero capacity")
}

/// Fill a table to half capacity so lookups probe realistic chains.
fn half_filled_table(capacity: usize) -> HaleProbeTable {
    let mut table = wrapping_table(capacity);
    for i in 0..capacity / 2 {
        table
            .put(format!("key_{i}"), i as i64)
            .expect("half load always fits");
    }
    table
}

/// Benchmark the Hale Probe Table
fn bench_hale_probe_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("hale_probe_table");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    // Fill performance at half load with different table sizes
    for capacity in [128, 1_024, 8_192].iter() {
        group.bench_with_input(
            BenchmarkId::new("put_half_load", capacity),
            capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut table = wrapping_table(capacity);
                    for i in 0..capacity / 2 {
                        table
                            .put(black_box(format!("key_{i}")), black_box(i as i64))
                            .unwrap();
                    }
                });
            },
        );
    }

    // Lookup performance for resident keys
    for capacity in [128, 1_024, 8_192].iter() {
        group.bench_with_input(
            BenchmarkId::new("get_hit", capacity),
            capacity,
            |b, &capacity| {
                let table = half_filled_table(capacity);
                let mut index = 0;
                b.iter(|| {
                    let key = format!("key_{}", index % (capacity / 2));
                    index += 1;
                    black_box(table.get(&key).unwrap());
                });
            },
        );
    }

    // Lookup performance for absent keys
    group.bench_function("get_miss", |b| {
        let table = half_filled_table(1_024);
        let mut index = 0;
        b.iter(|| {
            let key = format!("missing_{index}");
            index += 1;
            black_box(table.get(&key).unwrap());
        });
    });

    // Overwrite performance: same key, value churn
    group.bench_function("put_overwrite", |b| {
        let mut table = half_filled_table(1_024);
        let mut value = 0i64;
        b.iter(|| {
            value += 1;
            table
                .put(black_box("key_0".to_string()), black_box(value))
                .unwrap();
        });
    });

    // Full-table dump
    group.bench_function("display_info", |b| {
        let table = half_filled_table(1_024);
        b.iter(|| {
            black_box(table.display_info());
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_hale_probe_table
}

criterion_main!(benches);
