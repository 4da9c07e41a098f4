//! Report Building Benchmarks
//!
//! **Purpose:** Measure report assembly and CSV export as fleets grow
//!
//! **Baseline Metrics (2026-10-01, Rust 1.86):**
//! - Report for 10 machines: ~20-50µs
//! - Report for 500 machines: ~1-3ms (rayon evaluation)
//! - CSV export for 500 machines: ~0.5-1ms
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench report_building
//! ```
//!
//! **What's Being Measured:**
//! 1. `build report` - Summary, recommendations and chart series
//! 2. `render text` - Plain-text tables for a built report
//! 3. `csv export` - Filtered, newest-first CSV rendering
//!
//! **Performance Notes:**
//! - Per-machine evaluation runs on rayon worker threads
//! - Emission rows are looked up by machine id (linear scan)

use carbontrack::machine::{CompanyProfile, Fleet, MachineForm};
use carbontrack::report::csv_export::export_to_string;
use carbontrack::report::ReportBuilder;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const SOURCES: [&str; 4] = ["Electricity", "Natural Gas", "Fuel", "Coal"];

fn fleet_of(size: usize) -> Fleet {
    let mut fleet = Fleet::default();
    fleet.set_company(
        CompanyProfile {
            company_name: "Bench Works".to_string(),
            email: "bench@works.test".to_string(),
            ..Default::default()
        },
        "bench",
    );

    for i in 0..size {
        let form = MachineForm {
            machine_name: format!("Machine {}", i),
            machine_type: if i % 2 == 0 { "Heavy" } else { "Light" }.to_string(),
            energy_source: SOURCES[i % SOURCES.len()].to_string(),
            active_units: Some(1 + (i % 3) as u32),
            runtime_hours: Some(6.0 + (i % 18) as f64),
            daily_consumption: Some(50.0 + (i * 7 % 700) as f64),
            temperature: Some(40.0 + (i % 60) as f64),
            sound_level: Some(60.0 + (i % 40) as f64),
            ..Default::default()
        };
        if let Err(e) = fleet.register(&form) {
            panic!("Failed to register bench machine: {}", e);
        }
    }
    fleet
}

fn bench_build_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("build report");
    for size in [10, 100, 500] {
        let fleet = fleet_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &fleet, |b, fleet| {
            b.iter(|| ReportBuilder::new(black_box(fleet)).build())
        });
    }
    group.finish();
}

fn bench_render_text(c: &mut Criterion) {
    let fleet = fleet_of(100);
    let report = match ReportBuilder::new(&fleet).build() {
        Ok(report) => report,
        Err(e) => panic!("Failed to build bench report: {}", e),
    };

    c.bench_function("render text 100 machines", |b| {
        b.iter(|| black_box(&report).render_text())
    });
}

fn bench_csv_export(c: &mut Criterion) {
    let fleet = fleet_of(500);

    let mut group = c.benchmark_group("csv export");
    group.bench_function("all", |b| b.iter(|| export_to_string(black_box(&fleet), "")));
    group.bench_function("filtered", |b| {
        b.iter(|| export_to_string(black_box(&fleet), black_box("heavy")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_report,
    bench_render_text,
    bench_csv_export
);
criterion_main!(benches);
