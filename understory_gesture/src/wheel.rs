// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel adapter: mouse wheel / scroll axis → discrete zoom steps.

use kurbo::Point;
use smallvec::smallvec;

use crate::event::GestureEvent;
use crate::source::{GestureEvents, GestureSource};

/// Wheel deltas at or below this magnitude are treated as noise.
pub const DEFAULT_WHEEL_DEAD_ZONE: f64 = 0.01;

/// One raw wheel notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Vertical wheel delta as reported by the platform, in any unit.
    pub delta: f64,
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

impl WheelInput {
    /// Creates a wheel input.
    #[must_use]
    pub fn new(delta: f64, position: Point, time: u64) -> Self {
        Self {
            delta,
            position,
            time,
        }
    }
}

/// Filters wheel noise and normalizes the zoom direction.
///
/// By default a positive platform delta (wheel rolled away from the user)
/// zooms in. Set `inverted` for platforms that report the opposite sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSource {
    /// Deltas with magnitude at or below this are ignored.
    pub dead_zone: f64,
    /// Flip the sign of every delta.
    pub inverted: bool,
}

impl WheelSource {
    /// Creates a wheel adapter with the default dead zone.
    #[must_use]
    pub fn new(inverted: bool) -> Self {
        Self {
            dead_zone: DEFAULT_WHEEL_DEAD_ZONE,
            inverted,
        }
    }
}

impl Default for WheelSource {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GestureSource for WheelSource {
    type Input = WheelInput;

    fn translate(&mut self, input: WheelInput) -> GestureEvents {
        if !input.delta.is_finite() || input.delta.abs() <= self.dead_zone {
            return GestureEvents::new();
        }
        let delta = if self.inverted { -input.delta } else { input.delta };
        smallvec![GestureEvent::Wheel {
            delta,
            position: input.position,
            time: input.time,
        }]
    }

    // Wheel steps are stateless.
    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{WheelInput, WheelSource};
    use crate::event::GestureEvent;
    use crate::source::GestureSource;

    #[test]
    fn noise_is_filtered() {
        let mut wheel = WheelSource::default();
        assert!(wheel.translate(WheelInput::new(0.005, Point::ORIGIN, 0)).is_empty());
        assert!(wheel.translate(WheelInput::new(-0.01, Point::ORIGIN, 0)).is_empty());
        assert!(wheel.translate(WheelInput::new(f64::NAN, Point::ORIGIN, 0)).is_empty());
    }

    #[test]
    fn notch_passes_through() {
        let mut wheel = WheelSource::default();
        let pos = Point::new(30.0, 40.0);
        let ev = wheel.translate(WheelInput::new(120.0, pos, 5));
        assert_eq!(
            ev.as_slice(),
            &[GestureEvent::Wheel {
                delta: 120.0,
                position: pos,
                time: 5
            }]
        );
    }

    #[test]
    fn inverted_flips_sign() {
        let mut wheel = WheelSource::new(true);
        let ev = wheel.translate(WheelInput::new(1.0, Point::ORIGIN, 0));
        assert!(matches!(ev[0], GestureEvent::Wheel { delta, .. } if delta == -1.0));
    }
}
