//! Performance benchmarks for configuration resolution
//!
//! Resolution runs once per invocation on the CLI hot path, so these mostly
//! guard against regressions in the descriptor regex and merge passes.

use boxplan::config::{RawOptions, RawValue, ResolvedConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn full_options() -> RawOptions {
    RawOptions {
        size: Some("300x200x150/4/6".to_string()),
        units: Some("mm".to_string()),
        margin: Some(RawValue::Text("5".to_string())),
        file: Some("box.pdf".to_string()),
        ..Default::default()
    }
}

fn resolution_benchmark(c: &mut Criterion) {
    c.bench_function("resolve_defaults_only", |b| {
        b.iter(|| ResolvedConfig::new(black_box(RawOptions::default())))
    });

    c.bench_function("resolve_size_descriptor", |b| {
        b.iter(|| ResolvedConfig::new(black_box(full_options())))
    });

    c.bench_function("validate_complete_config", |b| {
        let config = ResolvedConfig::new(full_options());
        b.iter(|| black_box(&config).validate())
    });
}

criterion_group!(benches, resolution_benchmark);
criterion_main!(benches);
