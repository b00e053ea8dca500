// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_zoom_pan` + `understory_viewport`.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};
use understory_gesture::{GestureEvent, GestureKind};
use understory_viewport::{ClampPolicy, TransformState};
use understory_zoom_pan::{Engine, EngineConfig, PositionableItem};

fn engine() -> Engine<impl FnMut(&TransformState)> {
    let mut engine = Engine::new(EngineConfig::default(), |t: &TransformState| {
        black_box(t);
    });
    engine.set_viewport_size(Size::new(800.0, 600.0));
    engine.set_content_size(Size::new(4000.0, 3000.0));
    engine
}

/// A pinch with `n` updates spaced one frame apart.
fn pinch_events(n: u64, spacing: u64) -> Vec<GestureEvent> {
    let focal = Point::new(400.0, 300.0);
    let mut events = Vec::with_capacity(n as usize + 2);
    events.push(GestureEvent::scale_begin(focal, 0));
    for i in 0..n {
        let ratio = 1.0 + (i % 200) as f64 * 0.01;
        events.push(GestureEvent::scale_update(ratio, focal, i * spacing));
    }
    events.push(GestureEvent::end(GestureKind::Scale, n * spacing));
    events
}

fn pan_events(n: u64, spacing: u64) -> Vec<GestureEvent> {
    let mut events = Vec::with_capacity(n as usize + 2);
    events.push(GestureEvent::pan_begin(0));
    for i in 0..n {
        let dir = if (i / 50) % 2 == 0 { -1.0 } else { 1.0 };
        events.push(GestureEvent::pan_update(Vec2::new(dir * 7.0, dir * 3.0), i * spacing));
    }
    events.push(GestureEvent::end(GestureKind::Pan, n * spacing));
    events
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_pan/gesture");

    // Spacing 1 ms exercises the throttle path; 16 ms applies every update.
    for (name, spacing) in [("throttled", 1_u64), ("every_frame", 16)] {
        for len in [64_u64, 1_024] {
            group.throughput(Throughput::Elements(len));

            let pinch = pinch_events(len, spacing);
            group.bench_with_input(
                BenchmarkId::new(format!("pinch_{name}"), len),
                &pinch,
                |b, events| {
                    b.iter_batched(
                        engine,
                        |mut engine| {
                            for event in events {
                                engine.handle_event(*event);
                            }
                            black_box(engine.state());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );

            let pan = pan_events(len, spacing);
            group.bench_with_input(
                BenchmarkId::new(format!("pan_{name}"), len),
                &pan,
                |b, events| {
                    b.iter_batched(
                        engine,
                        |mut engine| {
                            for event in events {
                                engine.handle_event(*event);
                            }
                            black_box(engine.state());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_pan/geometry");
    let policy = ClampPolicy::default();
    let content = Size::new(4000.0, 3000.0);
    let viewport = Size::new(800.0, 600.0);

    group.bench_function("clamp", |b| {
        let mut t = Vec2::new(-100.0, -100.0);
        b.iter(|| {
            t = policy.clamp(content, viewport, black_box(1.7), t + Vec2::new(-13.0, 9.0));
            black_box(t);
        });
    });

    for len in [100_u64, 10_000] {
        let items: Vec<PositionableItem> = (0..len)
            .map(|i| {
                let x = (i % 100) as f64 * 40.0;
                let y = (i / 100) as f64 * 30.0;
                PositionableItem::new(i, "item", Rect::new(x, y, x + 32.0, y + 24.0))
            })
            .collect();
        group.throughput(Throughput::Elements(len));
        group.bench_with_input(BenchmarkId::new("load_content", len), &items, |b, items| {
            let mut engine = engine();
            b.iter(|| {
                engine.load_content(items);
                black_box(engine.content_size());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gestures, bench_geometry);
criterion_main!(benches);
