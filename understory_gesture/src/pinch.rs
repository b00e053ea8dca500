// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch adapter: platform pinch recognizers → scale gesture events.
//!
//! Platforms disagree on what the scale in a pinch callback means. Some
//! report the scale relative to the start of the gesture (cumulative), others
//! report the factor since the previous callback (incremental). Pick the
//! matching [`ScaleReporting`] and the adapter always emits cumulative ratios.
//!
//! Incremental factors are multiplied up for the whole gesture. Once the
//! consumer clamps the resulting scale, further spreading only grows the
//! product, and the fingers would have to undo that excess before zooming out
//! shows on screen. [`PinchSource::set_ratio_range`] bounds the product so a
//! reversal responds immediately; set it from the scale limits when the pinch
//! begins.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pinch::{PinchInput, PinchPhase, PinchSource, ScaleReporting};
//! use understory_gesture::{GestureEvent, GestureSource};
//!
//! let mut pinch = PinchSource::new(ScaleReporting::Incremental);
//! let focal = Point::new(200.0, 150.0);
//!
//! pinch.translate(PinchInput::new(PinchPhase::Began, 1.0, focal, 0));
//! pinch.translate(PinchInput::new(PinchPhase::Changed, 1.5, focal, 16));
//! let events = pinch.translate(PinchInput::new(PinchPhase::Changed, 2.0, focal, 32));
//!
//! // 1.5 * 2.0, relative to the start of the pinch.
//! assert_eq!(events[0], GestureEvent::scale_update(3.0, focal, 32));
//! ```

use kurbo::Point;
use smallvec::smallvec;
use tracing::trace;

use crate::event::{GestureEvent, GestureKind};
use crate::source::{GestureEvents, GestureSource};

/// Lifecycle of a platform pinch callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchPhase {
    /// The recognizer started.
    Began,
    /// Fingers moved.
    Changed,
    /// Fingers lifted.
    Ended,
    /// The platform aborted the gesture.
    Cancelled,
}

/// How the platform expresses the scale in [`PinchPhase::Changed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleReporting {
    /// Scale relative to the start of the gesture.
    #[default]
    Cumulative,
    /// Factor since the previous callback.
    Incremental,
}

/// One raw pinch callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchInput {
    /// Callback phase.
    pub phase: PinchPhase,
    /// Scale as reported by the platform; ignored for `Began`, `Ended` and
    /// `Cancelled`.
    pub scale: f64,
    /// Pinch midpoint in viewport coordinates.
    pub focal: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

impl PinchInput {
    /// Creates a pinch input.
    #[must_use]
    pub fn new(phase: PinchPhase, scale: f64, focal: Point, time: u64) -> Self {
        Self {
            phase,
            scale,
            focal,
            time,
        }
    }
}

/// Normalizes platform pinch callbacks into scale gesture events.
#[derive(Clone, Copy, Debug)]
pub struct PinchSource {
    reporting: ScaleReporting,
    active: bool,
    ratio: f64,
    min_ratio: f64,
    max_ratio: f64,
}

impl PinchSource {
    /// Creates an adapter for a platform with the given scale reporting.
    #[must_use]
    pub fn new(reporting: ScaleReporting) -> Self {
        Self {
            reporting,
            active: false,
            ratio: 1.0,
            min_ratio: 0.0,
            max_ratio: f64::INFINITY,
        }
    }

    /// Bounds the accumulated ratio of [`ScaleReporting::Incremental`]
    /// gestures. Unbounded by default.
    ///
    /// For a consumer at `scale` with limits `min..=max`, pass
    /// `min / scale, max / scale`. Swapped bounds are reordered; non-positive
    /// or NaN bounds are ignored.
    ///
    /// ```
    /// use kurbo::Point;
    /// use understory_gesture::GestureSource;
    /// use understory_gesture::pinch::{PinchInput, PinchPhase, PinchSource, ScaleReporting};
    ///
    /// let mut pinch = PinchSource::new(ScaleReporting::Incremental);
    /// // Current scale 1.5, limits 0.1..=3.0.
    /// pinch.set_ratio_range(0.1 / 1.5, 3.0 / 1.5);
    ///
    /// pinch.translate(PinchInput::new(PinchPhase::Began, 1.0, Point::ORIGIN, 0));
    /// pinch.translate(PinchInput::new(PinchPhase::Changed, 4.0, Point::ORIGIN, 16));
    /// assert_eq!(pinch.ratio(), 2.0);
    ///
    /// // Pinching in responds at once instead of unwinding the excess.
    /// pinch.translate(PinchInput::new(PinchPhase::Changed, 0.5, Point::ORIGIN, 32));
    /// assert_eq!(pinch.ratio(), 1.0);
    /// ```
    pub fn set_ratio_range(&mut self, min: f64, max: f64) {
        if !(min > 0.0 && max > 0.0) {
            trace!(min, max, "ignoring invalid pinch ratio range");
            return;
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_ratio = min;
        self.max_ratio = max;
    }

    /// Clears the bound set by [`PinchSource::set_ratio_range`].
    pub fn clear_ratio_range(&mut self) {
        self.min_ratio = 0.0;
        self.max_ratio = f64::INFINITY;
    }

    /// Returns `true` between begin and end/cancel.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cumulative ratio of the current gesture.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Default for PinchSource {
    fn default() -> Self {
        Self::new(ScaleReporting::default())
    }
}

impl GestureSource for PinchSource {
    type Input = PinchInput;

    fn translate(&mut self, input: PinchInput) -> GestureEvents {
        match input.phase {
            PinchPhase::Began => {
                self.active = true;
                self.ratio = 1.0;
                smallvec![GestureEvent::scale_begin(input.focal, input.time)]
            }
            PinchPhase::Changed => {
                if !(input.scale.is_finite() && input.scale > 0.0) {
                    trace!(scale = input.scale, "dropping degenerate pinch scale");
                    return GestureEvents::new();
                }
                let mut out = GestureEvents::new();
                if !self.active {
                    // Some recognizers skip the began callback.
                    self.active = true;
                    self.ratio = 1.0;
                    out.push(GestureEvent::scale_begin(input.focal, input.time));
                }
                self.ratio = match self.reporting {
                    ScaleReporting::Cumulative => input.scale,
                    ScaleReporting::Incremental => {
                        (self.ratio * input.scale).clamp(self.min_ratio, self.max_ratio)
                    }
                };
                out.push(GestureEvent::scale_update(
                    self.ratio,
                    input.focal,
                    input.time,
                ));
                out
            }
            PinchPhase::Ended | PinchPhase::Cancelled => {
                if !self.active {
                    return GestureEvents::new();
                }
                self.reset();
                let event = if input.phase == PinchPhase::Ended {
                    GestureEvent::end(GestureKind::Scale, input.time)
                } else {
                    GestureEvent::cancel(GestureKind::Scale, input.time)
                };
                smallvec![event]
            }
        }
    }

    fn reset(&mut self) {
        self.active = false;
        self.ratio = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PinchInput, PinchPhase, PinchSource, ScaleReporting};
    use crate::event::{GestureEvent, GestureKind};
    use crate::source::GestureSource;

    const FOCAL: Point = Point::new(10.0, 20.0);

    fn input(phase: PinchPhase, scale: f64, time: u64) -> PinchInput {
        PinchInput::new(phase, scale, FOCAL, time)
    }

    #[test]
    fn cumulative_scale_passes_through() {
        let mut pinch = PinchSource::new(ScaleReporting::Cumulative);
        let began = pinch.translate(input(PinchPhase::Began, 1.0, 0));
        assert_eq!(began.as_slice(), &[GestureEvent::scale_begin(FOCAL, 0)]);

        pinch.translate(input(PinchPhase::Changed, 1.2, 10));
        let ev = pinch.translate(input(PinchPhase::Changed, 1.5, 20));
        assert_eq!(ev.as_slice(), &[GestureEvent::scale_update(1.5, FOCAL, 20)]);
    }

    #[test]
    fn incremental_scale_accumulates() {
        let mut pinch = PinchSource::new(ScaleReporting::Incremental);
        pinch.translate(input(PinchPhase::Began, 1.0, 0));
        pinch.translate(input(PinchPhase::Changed, 2.0, 10));
        pinch.translate(input(PinchPhase::Changed, 0.5, 20));
        pinch.translate(input(PinchPhase::Changed, 1.25, 30));
        assert!((pinch.ratio() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn incremental_ratio_stops_at_range() {
        let mut pinch = PinchSource::new(ScaleReporting::Incremental);
        pinch.set_ratio_range(3.0, 0.5);
        pinch.translate(input(PinchPhase::Began, 1.0, 0));
        for t in 1..10 {
            pinch.translate(input(PinchPhase::Changed, 1.5, t));
        }
        assert_eq!(pinch.ratio(), 3.0);

        let ev = pinch.translate(input(PinchPhase::Changed, 0.5, 10));
        assert_eq!(ev.as_slice(), &[GestureEvent::scale_update(1.5, FOCAL, 10)]);

        pinch.clear_ratio_range();
        pinch.translate(input(PinchPhase::Changed, 4.0, 11));
        assert_eq!(pinch.ratio(), 6.0);
    }

    #[test]
    fn invalid_ratio_range_is_ignored() {
        let mut pinch = PinchSource::new(ScaleReporting::Incremental);
        pinch.set_ratio_range(0.0, f64::NAN);
        pinch.translate(input(PinchPhase::Began, 1.0, 0));
        pinch.translate(input(PinchPhase::Changed, 10.0, 1));
        assert_eq!(pinch.ratio(), 10.0);
    }

    #[test]
    fn missing_began_is_synthesized() {
        let mut pinch = PinchSource::default();
        let ev = pinch.translate(input(PinchPhase::Changed, 1.1, 5));
        assert_eq!(
            ev.as_slice(),
            &[
                GestureEvent::scale_begin(FOCAL, 5),
                GestureEvent::scale_update(1.1, FOCAL, 5),
            ]
        );
        assert!(pinch.is_active());
    }

    #[test]
    fn degenerate_scale_is_dropped() {
        let mut pinch = PinchSource::default();
        pinch.translate(input(PinchPhase::Began, 1.0, 0));
        assert!(pinch.translate(input(PinchPhase::Changed, 0.0, 1)).is_empty());
        assert!(pinch.translate(input(PinchPhase::Changed, f64::NAN, 2)).is_empty());
        assert_eq!(pinch.ratio(), 1.0);
    }

    #[test]
    fn end_and_cancel_only_when_active() {
        let mut pinch = PinchSource::default();
        assert!(pinch.translate(input(PinchPhase::Ended, 1.0, 0)).is_empty());

        pinch.translate(input(PinchPhase::Began, 1.0, 1));
        let ev = pinch.translate(input(PinchPhase::Cancelled, 1.0, 2));
        assert_eq!(ev.as_slice(), &[GestureEvent::cancel(GestureKind::Scale, 2)]);
        assert!(!pinch.is_active());

        pinch.translate(input(PinchPhase::Began, 1.0, 3));
        let ev = pinch.translate(input(PinchPhase::Ended, 1.0, 4));
        assert_eq!(ev.as_slice(), &[GestureEvent::end(GestureKind::Scale, 4)]);
    }
}
