// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_gesture` adapters working together.
//!
//! Each platform adapter should reduce its native vocabulary to the same
//! event stream, so equivalent physical gestures compare equal here.

use kurbo::{Point, Vec2};
use understory_gesture::pan::{PanInput, PanPhase, PanReporting, PanSource};
use understory_gesture::pinch::{PinchInput, PinchPhase, PinchSource, ScaleReporting};
use understory_gesture::throttle::ThrottleGate;
use understory_gesture::touch::{TouchInput, TouchPhase, TouchSource};
use understory_gesture::wheel::{WheelInput, WheelSource};
use understory_gesture::{GestureEvent, GestureKind, GestureQueue, GestureSource};

fn run<S: GestureSource>(
    source: &mut S,
    inputs: impl IntoIterator<Item = S::Input>,
) -> Vec<GestureEvent> {
    let mut queue = GestureQueue::new();
    for input in inputs {
        queue.extend(source.translate(input));
    }
    queue.drain().collect()
}

#[test]
fn cumulative_and_incremental_pinch_agree() {
    let focal = Point::new(50.0, 60.0);
    let cumulative = run(
        &mut PinchSource::new(ScaleReporting::Cumulative),
        [
            PinchInput::new(PinchPhase::Began, 1.0, focal, 0),
            PinchInput::new(PinchPhase::Changed, 1.5, focal, 10),
            PinchInput::new(PinchPhase::Changed, 3.0, focal, 20),
            PinchInput::new(PinchPhase::Ended, 3.0, focal, 30),
        ],
    );
    let incremental = run(
        &mut PinchSource::new(ScaleReporting::Incremental),
        [
            PinchInput::new(PinchPhase::Began, 1.0, focal, 0),
            PinchInput::new(PinchPhase::Changed, 1.5, focal, 10),
            PinchInput::new(PinchPhase::Changed, 2.0, focal, 20),
            PinchInput::new(PinchPhase::Ended, 1.0, focal, 30),
        ],
    );
    assert_eq!(cumulative, incremental);
}

#[test]
fn pan_reporting_modes_agree() {
    let cumulative = run(
        &mut PanSource::new(PanReporting::Cumulative),
        [
            PanInput::new(PanPhase::Began, Vec2::ZERO, 0),
            PanInput::new(PanPhase::Changed, Vec2::new(4.0, 2.0), 5),
            PanInput::new(PanPhase::Changed, Vec2::new(10.0, 2.0), 9),
            PanInput::new(PanPhase::Ended, Vec2::new(10.0, 2.0), 12),
        ],
    );
    let delta = run(
        &mut PanSource::new(PanReporting::Delta),
        [
            PanInput::new(PanPhase::Began, Vec2::ZERO, 0),
            PanInput::new(PanPhase::Changed, Vec2::new(4.0, 2.0), 5),
            PanInput::new(PanPhase::Changed, Vec2::new(6.0, 0.0), 9),
            PanInput::new(PanPhase::Ended, Vec2::ZERO, 12),
        ],
    );
    let inverted = run(
        &mut PanSource::new(PanReporting::InvertedDelta),
        [
            PanInput::new(PanPhase::Began, Vec2::ZERO, 0),
            PanInput::new(PanPhase::Changed, Vec2::new(-4.0, -2.0), 5),
            PanInput::new(PanPhase::Changed, Vec2::new(-6.0, 0.0), 9),
            PanInput::new(PanPhase::Ended, Vec2::ZERO, 12),
        ],
    );
    assert_eq!(cumulative, delta);
    assert_eq!(cumulative, inverted);
}

#[test]
fn touch_pinch_matches_recognized_pinch() {
    let touch = run(
        &mut TouchSource::default(),
        [
            TouchInput::new(1, TouchPhase::Down, Point::new(0.0, 0.0), 0),
            TouchInput::new(2, TouchPhase::Down, Point::new(100.0, 0.0), 0),
            TouchInput::new(2, TouchPhase::Move, Point::new(200.0, 0.0), 10),
            TouchInput::new(2, TouchPhase::Up, Point::new(200.0, 0.0), 20),
            TouchInput::new(1, TouchPhase::Up, Point::new(0.0, 0.0), 30),
        ],
    );
    assert_eq!(
        touch,
        [
            GestureEvent::pan_begin(0),
            GestureEvent::end(GestureKind::Pan, 0),
            GestureEvent::scale_begin(Point::new(50.0, 0.0), 0),
            GestureEvent::scale_update(2.0, Point::new(100.0, 0.0), 10),
            GestureEvent::end(GestureKind::Scale, 20),
            GestureEvent::pan_begin(20),
            GestureEvent::end(GestureKind::Pan, 30),
        ]
    );
}

#[test]
fn wheel_noise_is_filtered() {
    let events = run(
        &mut WheelSource::default(),
        [
            WheelInput::new(0.005, Point::ORIGIN, 0),
            WheelInput::new(-0.01, Point::ORIGIN, 1),
            WheelInput::new(1.0, Point::ORIGIN, 2),
        ],
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].time(), 2);
}

#[test]
fn throttle_never_gates_transitions() {
    let mut gate = ThrottleGate::new(16);
    let mut applied = Vec::new();
    let events = [
        GestureEvent::pan_begin(0),
        GestureEvent::pan_update(Vec2::new(1.0, 0.0), 0),
        GestureEvent::pan_update(Vec2::new(1.0, 0.0), 4),
        GestureEvent::pan_update(Vec2::new(1.0, 0.0), 17),
        GestureEvent::end(GestureKind::Pan, 18),
    ];
    for event in events {
        match event {
            GestureEvent::Begin { .. } => {
                gate.begin();
                applied.push(event.time());
            }
            GestureEvent::Update { time, .. } => {
                if gate.accept(time) {
                    applied.push(time);
                }
            }
            _ => {
                gate.end();
                applied.push(event.time());
            }
        }
    }
    assert_eq!(applied, [0, 0, 17, 18]);
}
