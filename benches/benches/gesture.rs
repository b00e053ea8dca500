// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the `understory_gesture` adapters.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_gesture::touch::{TouchInput, TouchPhase, TouchSource};
use understory_gesture::{GestureQueue, GestureSource};

fn two_finger_samples(n: u64) -> Vec<TouchInput> {
    let mut samples = vec![
        TouchInput::new(1, TouchPhase::Down, Point::new(300.0, 300.0), 0),
        TouchInput::new(2, TouchPhase::Down, Point::new(500.0, 300.0), 0),
    ];
    for i in 0..n {
        let spread = (i % 100) as f64;
        samples.push(TouchInput::new(
            1 + i % 2,
            TouchPhase::Move,
            Point::new(300.0 - spread + (i % 2) as f64 * (200.0 + 2.0 * spread), 300.0),
            i,
        ));
    }
    samples.push(TouchInput::new(2, TouchPhase::Up, Point::new(500.0, 300.0), n));
    samples.push(TouchInput::new(1, TouchPhase::Up, Point::new(300.0, 300.0), n));
    samples
}

fn bench_touch(c: &mut Criterion) {
    let samples = two_finger_samples(1_024);
    c.bench_function("gesture/touch_pinch_1024", |b| {
        b.iter_batched(
            || (TouchSource::default(), GestureQueue::new()),
            |(mut touch, mut queue)| {
                for sample in &samples {
                    queue.extend(touch.translate(*sample));
                }
                black_box(queue.len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_touch);
criterion_main!(benches);
