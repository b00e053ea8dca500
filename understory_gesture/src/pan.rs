// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan adapter: platform pan/drag recognizers → pan gesture events.
//!
//! ## Usage
//!
//! 1) Pick the [`PanReporting`] that matches what the platform puts in its
//!    pan callback.
//! 2) Feed every callback to [`PanSource`] via
//!    [`GestureSource::translate`](crate::GestureSource::translate).
//! 3) The emitted updates always carry the movement since the previous
//!    update, in viewport units, pointing the way the content should move.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_gesture::pan::{PanInput, PanPhase, PanReporting, PanSource};
//! use understory_gesture::{GestureEvent, GestureSource};
//!
//! // Recognizer reporting the total translation since the gesture began.
//! let mut pan = PanSource::new(PanReporting::Cumulative);
//!
//! pan.translate(PanInput::new(PanPhase::Began, Vec2::ZERO, 0));
//! pan.translate(PanInput::new(PanPhase::Changed, Vec2::new(10.0, 5.0), 16));
//! let events = pan.translate(PanInput::new(PanPhase::Changed, Vec2::new(15.0, 5.0), 32));
//!
//! assert_eq!(events[0], GestureEvent::pan_update(Vec2::new(5.0, 0.0), 32));
//! ```

use kurbo::Vec2;
use smallvec::smallvec;
use tracing::trace;

use crate::event::{GestureEvent, GestureKind};
use crate::source::{GestureEvents, GestureSource};

/// Lifecycle of a platform pan callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// The recognizer started.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer lifted.
    Ended,
    /// The platform aborted the gesture.
    Cancelled,
}

/// How the platform expresses the translation in [`PanPhase::Changed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanReporting {
    /// Total translation since the gesture began.
    #[default]
    Cumulative,
    /// Translation since the previous callback.
    Delta,
    /// Scroll distance since the previous callback, which points opposite to
    /// the finger movement.
    InvertedDelta,
}

/// One raw pan callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanInput {
    /// Callback phase.
    pub phase: PanPhase,
    /// Translation as reported by the platform; ignored outside `Changed`.
    pub translation: Vec2,
    /// Event time in milliseconds.
    pub time: u64,
}

impl PanInput {
    /// Creates a pan input.
    #[must_use]
    pub fn new(phase: PanPhase, translation: Vec2, time: u64) -> Self {
        Self {
            phase,
            translation,
            time,
        }
    }
}

/// Normalizes platform pan callbacks into pan deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanSource {
    reporting: PanReporting,
    active: bool,
    /// Last cumulative translation seen, for [`PanReporting::Cumulative`].
    last_total: Vec2,
}

impl PanSource {
    /// Creates an adapter for a platform with the given reporting.
    #[must_use]
    pub fn new(reporting: PanReporting) -> Self {
        Self {
            reporting,
            active: false,
            last_total: Vec2::ZERO,
        }
    }

    /// Returns `true` between begin and end/cancel.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn start(&mut self) {
        self.active = true;
        self.last_total = Vec2::ZERO;
    }
}

impl GestureSource for PanSource {
    type Input = PanInput;

    fn translate(&mut self, input: PanInput) -> GestureEvents {
        match input.phase {
            PanPhase::Began => {
                self.start();
                smallvec![GestureEvent::pan_begin(input.time)]
            }
            PanPhase::Changed => {
                if !input.translation.is_finite() {
                    trace!("dropping non-finite pan translation");
                    return GestureEvents::new();
                }
                let mut out = GestureEvents::new();
                if !self.active {
                    self.start();
                    out.push(GestureEvent::pan_begin(input.time));
                }
                let delta = match self.reporting {
                    PanReporting::Cumulative => {
                        let delta = input.translation - self.last_total;
                        self.last_total = input.translation;
                        delta
                    }
                    PanReporting::Delta => input.translation,
                    PanReporting::InvertedDelta => -input.translation,
                };
                if delta != Vec2::ZERO {
                    out.push(GestureEvent::pan_update(delta, input.time));
                }
                out
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                if !self.active {
                    return GestureEvents::new();
                }
                self.reset();
                let event = if input.phase == PanPhase::Ended {
                    GestureEvent::end(GestureKind::Pan, input.time)
                } else {
                    GestureEvent::cancel(GestureKind::Pan, input.time)
                };
                smallvec![event]
            }
        }
    }

    fn reset(&mut self) {
        self.active = false;
        self.last_total = Vec2::ZERO;
    }
}
