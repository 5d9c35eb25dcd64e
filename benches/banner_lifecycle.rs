// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for banner lifecycle operations.
//!
//! Measures the performance of:
//! - Showing a banner (card construction + mounting)
//! - Ticking a populated manager (transitions, deadlines, sweep)
//! - A full show-to-removal cycle

use criterion::{criterion_group, criterion_main, Criterion};
use iced_banner::ui::notifications::{Manager, Request, TRANSITION};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn ready_manager() -> Manager {
    let mut manager = Manager::new();
    manager.mark_surface_ready();
    manager
}

/// Benchmark showing a single banner.
fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_lifecycle");

    group.bench_function("show", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut manager = ready_manager();
            black_box(manager.show(Request::new().title("bench"), now));
        });
    });

    group.finish();
}

/// Benchmark one tick over a stack of live banners.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_lifecycle");

    for count in [1_usize, 10, 100] {
        group.bench_function(format!("tick_{count}_cards"), |b| {
            let t0 = Instant::now();
            let mut manager = ready_manager();
            for _ in 0..count {
                manager.show(Request::new().duration_ms(60_000), t0);
            }
            // Steady state: one frame after mount, entries running, nothing due.
            let frame = t0 + Duration::from_millis(16);
            b.iter(|| {
                manager.tick(frame);
                black_box(manager.card_count());
            });
        });
    }

    group.finish();
}

/// Benchmark a complete show → dismiss → sweep cycle.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_lifecycle");

    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut manager = ready_manager();
            let id = manager
                .show(Request::new().duration_ms(100), t0)
                .expect("surface ready");
            manager.tick(t0 + Duration::from_millis(16));
            manager.tick(t0 + Duration::from_millis(100));
            manager.tick(t0 + Duration::from_millis(100) + TRANSITION);
            black_box((id, manager.card_count()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_tick, bench_full_cycle);
criterion_main!(benches);
