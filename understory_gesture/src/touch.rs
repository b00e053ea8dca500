// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch adapter: raw multi-touch pointers → pan and pinch gesture events.
//!
//! Use this where the platform hands over raw pointer samples instead of
//! recognized gestures. One pointer pans; a second pointer turns the pan into
//! a pinch whose ratio is the current finger span over the span at pinch
//! start, focused on the midpoint. Lifting one finger of a pinch hands back to
//! a pan with the remaining finger. Pointers beyond the first two are tracked
//! but do not steer the gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::touch::{TouchInput, TouchPhase, TouchSource};
//! use understory_gesture::{GestureEvent, GestureKind, GestureSource};
//!
//! let mut touch = TouchSource::default();
//! touch.translate(TouchInput::new(1, TouchPhase::Down, Point::new(100.0, 100.0), 0));
//!
//! // Second finger: the pan ends and a pinch begins at the midpoint.
//! let events = touch.translate(TouchInput::new(2, TouchPhase::Down, Point::new(300.0, 100.0), 10));
//! assert_eq!(events[0], GestureEvent::end(GestureKind::Pan, 10));
//! assert_eq!(events[1], GestureEvent::scale_begin(Point::new(200.0, 100.0), 10));
//!
//! // Spread to twice the span.
//! let events = touch.translate(TouchInput::new(2, TouchPhase::Move, Point::new(500.0, 100.0), 20));
//! assert_eq!(events[0], GestureEvent::scale_update(2.0, Point::new(300.0, 100.0), 20));
//! ```

use kurbo::{Point, Vec2};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::event::{GestureEvent, GestureKind};
use crate::source::{GestureEvents, GestureSource};

/// Finger spans below this are raised to it when a pinch starts.
pub const DEFAULT_MIN_PINCH_SPAN: f64 = 10.0;

/// Lifecycle of a single touch pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// Pointer touched down.
    Down,
    /// Pointer moved.
    Move,
    /// Pointer lifted.
    Up,
    /// The platform cancelled all touches.
    Cancel,
}

/// One raw pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput {
    /// Platform pointer id, stable for the lifetime of the touch.
    pub pointer: u64,
    /// Sample phase.
    pub phase: TouchPhase,
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

impl TouchInput {
    /// Creates a pointer sample.
    #[must_use]
    pub fn new(pointer: u64, phase: TouchPhase, position: Point, time: u64) -> Self {
        Self {
            pointer,
            phase,
            position,
            time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Idle,
    Panning { pointer: u64, last: Point },
    Pinching { start_span: f64 },
}

/// Recognizes pan and pinch from raw pointer samples.
#[derive(Clone, Debug)]
pub struct TouchSource {
    /// Active pointers in touch-down order.
    pointers: SmallVec<[(u64, Point); 4]>,
    mode: Mode,
    min_span: f64,
}

impl TouchSource {
    /// Creates a detector that raises pinch start spans to at least
    /// `min_span`.
    #[must_use]
    pub fn new(min_span: f64) -> Self {
        Self {
            pointers: SmallVec::new(),
            mode: Mode::Idle,
            min_span: min_span.max(f64::MIN_POSITIVE),
        }
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` while one pointer is panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.mode, Mode::Panning { .. })
    }

    /// Returns `true` while two pointers are pinching.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.mode, Mode::Pinching { .. })
    }

    fn pinch_pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    fn start_pan(&mut self, time: u64) -> Option<GestureEvent> {
        let (pointer, last) = *self.pointers.first()?;
        self.mode = Mode::Panning { pointer, last };
        Some(GestureEvent::pan_begin(time))
    }

    fn start_pinch(&mut self, time: u64) -> Option<GestureEvent> {
        let (a, b) = self.pinch_pair()?;
        let start_span = a.distance(b).max(self.min_span);
        self.mode = Mode::Pinching { start_span };
        Some(GestureEvent::scale_begin(a.midpoint(b), time))
    }

    fn on_down(&mut self, input: TouchInput) -> GestureEvents {
        if let Some(entry) = self.pointers.iter_mut().find(|(id, _)| *id == input.pointer) {
            entry.1 = input.position;
            // A repeated down re-seats the pointer; pan deltas resume from there.
            if let Mode::Panning { pointer, .. } = self.mode
                && pointer == input.pointer
            {
                self.mode = Mode::Panning {
                    pointer,
                    last: input.position,
                };
            }
            return GestureEvents::new();
        }
        self.pointers.push((input.pointer, input.position));
        let mut out = GestureEvents::new();
        match self.pointers.len() {
            1 => out.extend(self.start_pan(input.time)),
            2 => {
                if self.is_panning() {
                    out.push(GestureEvent::end(GestureKind::Pan, input.time));
                }
                out.extend(self.start_pinch(input.time));
            }
            n => trace!(pointers = n, "extra pointer ignored"),
        }
        out
    }

    fn on_move(&mut self, input: TouchInput) -> GestureEvents {
        let Some(index) = self.pointers.iter().position(|(id, _)| *id == input.pointer) else {
            return GestureEvents::new();
        };
        self.pointers[index].1 = input.position;
        match self.mode {
            Mode::Panning { pointer, last } if pointer == input.pointer => {
                let delta = input.position - last;
                self.mode = Mode::Panning {
                    pointer,
                    last: input.position,
                };
                if delta == Vec2::ZERO {
                    GestureEvents::new()
                } else {
                    smallvec![GestureEvent::pan_update(delta, input.time)]
                }
            }
            Mode::Pinching { start_span } if index < 2 => {
                let Some((a, b)) = self.pinch_pair() else {
                    return GestureEvents::new();
                };
                let ratio = a.distance(b) / start_span;
                smallvec![GestureEvent::scale_update(ratio, a.midpoint(b), input.time)]
            }
            _ => GestureEvents::new(),
        }
    }

    fn on_up(&mut self, input: TouchInput) -> GestureEvents {
        let Some(index) = self.pointers.iter().position(|(id, _)| *id == input.pointer) else {
            return GestureEvents::new();
        };
        self.pointers.remove(index);
        let mut out = GestureEvents::new();
        match self.mode {
            Mode::Pinching { .. } if index < 2 => {
                out.push(GestureEvent::end(GestureKind::Scale, input.time));
                self.mode = Mode::Idle;
                match self.pointers.len() {
                    0 => {}
                    1 => out.extend(self.start_pan(input.time)),
                    _ => out.extend(self.start_pinch(input.time)),
                }
            }
            Mode::Panning { pointer, .. } if pointer == input.pointer => {
                out.push(GestureEvent::end(GestureKind::Pan, input.time));
                self.mode = Mode::Idle;
            }
            _ => {}
        }
        out
    }

    fn on_cancel(&mut self, input: TouchInput) -> GestureEvents {
        let out = match self.mode {
            Mode::Idle => GestureEvents::new(),
            Mode::Panning { .. } => smallvec![GestureEvent::cancel(GestureKind::Pan, input.time)],
            Mode::Pinching { .. } => {
                smallvec![GestureEvent::cancel(GestureKind::Scale, input.time)]
            }
        };
        self.reset();
        out
    }
}

impl Default for TouchSource {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PINCH_SPAN)
    }
}

impl GestureSource for TouchSource {
    type Input = TouchInput;

    fn translate(&mut self, input: TouchInput) -> GestureEvents {
        if !input.position.is_finite() && input.phase != TouchPhase::Cancel {
            trace!(pointer = input.pointer, "dropping non-finite touch sample");
            return GestureEvents::new();
        }
        match input.phase {
            TouchPhase::Down => self.on_down(input),
            TouchPhase::Move => self.on_move(input),
            TouchPhase::Up => self.on_up(input),
            TouchPhase::Cancel => self.on_cancel(input),
        }
    }

    fn reset(&mut self) {
        self.pointers.clear();
        self.mode = Mode::Idle;
    }
}
