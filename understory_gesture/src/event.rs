// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral gesture vocabulary.
//!
//! Every adapter in this crate produces [`GestureEvent`]s. Timestamps are
//! milliseconds on a caller-chosen monotonic clock; only differences between
//! them are ever used.

use kurbo::{Point, Vec2};

/// The two continuous gesture kinds that move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Pinch / scale gesture.
    Scale,
    /// Pan / drag gesture.
    Pan,
}

/// Payload of an in-progress gesture update.
///
/// Fields that a gesture kind does not produce are `None`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureUpdate {
    /// Scale relative to the scale at gesture begin (cumulative, not per
    /// event).
    pub scale_ratio: Option<f64>,
    /// Focal point in viewport coordinates.
    pub focal: Option<Point>,
    /// Translation since the previous update, in viewport units.
    pub pan_delta: Option<Vec2>,
}

/// One normalized gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A continuous gesture started.
    Begin {
        /// Which gesture.
        kind: GestureKind,
        /// Initial focal point, if the platform reports one.
        focal: Option<Point>,
        /// Event time in milliseconds.
        time: u64,
    },
    /// A continuous gesture progressed.
    Update {
        /// Which gesture.
        kind: GestureKind,
        /// What changed.
        update: GestureUpdate,
        /// Event time in milliseconds.
        time: u64,
    },
    /// A continuous gesture finished normally.
    End {
        /// Which gesture.
        kind: GestureKind,
        /// Event time in milliseconds.
        time: u64,
    },
    /// A continuous gesture was aborted by the platform.
    Cancel {
        /// Which gesture.
        kind: GestureKind,
        /// Event time in milliseconds.
        time: u64,
    },
    /// A discrete wheel step.
    Wheel {
        /// Wheel delta; positive zooms in. Only the sign is significant.
        delta: f64,
        /// Pointer position in viewport coordinates.
        position: Point,
        /// Event time in milliseconds.
        time: u64,
    },
}

impl GestureEvent {
    /// Pinch started with the given focal point.
    #[must_use]
    pub fn scale_begin(focal: Point, time: u64) -> Self {
        Self::Begin {
            kind: GestureKind::Scale,
            focal: Some(focal),
            time,
        }
    }

    /// Pinch progressed to `ratio` times the start scale, around `focal`.
    #[must_use]
    pub fn scale_update(ratio: f64, focal: Point, time: u64) -> Self {
        Self::Update {
            kind: GestureKind::Scale,
            update: GestureUpdate {
                scale_ratio: Some(ratio),
                focal: Some(focal),
                pan_delta: None,
            },
            time,
        }
    }

    /// Pan started.
    #[must_use]
    pub fn pan_begin(time: u64) -> Self {
        Self::Begin {
            kind: GestureKind::Pan,
            focal: None,
            time,
        }
    }

    /// Pan moved by `delta` since the previous update.
    #[must_use]
    pub fn pan_update(delta: Vec2, time: u64) -> Self {
        Self::Update {
            kind: GestureKind::Pan,
            update: GestureUpdate {
                pan_delta: Some(delta),
                ..GestureUpdate::default()
            },
            time,
        }
    }

    /// Gesture of `kind` ended.
    #[must_use]
    pub fn end(kind: GestureKind, time: u64) -> Self {
        Self::End { kind, time }
    }

    /// Gesture of `kind` was cancelled.
    #[must_use]
    pub fn cancel(kind: GestureKind, time: u64) -> Self {
        Self::Cancel { kind, time }
    }

    /// Event time in milliseconds.
    #[must_use]
    pub fn time(&self) -> u64 {
        match *self {
            Self::Begin { time, .. }
            | Self::Update { time, .. }
            | Self::End { time, .. }
            | Self::Cancel { time, .. }
            | Self::Wheel { time, .. } => time,
        }
    }

    /// The continuous gesture this event belongs to; `None` for wheel steps.
    #[must_use]
    pub fn kind(&self) -> Option<GestureKind> {
        match *self {
            Self::Begin { kind, .. }
            | Self::Update { kind, .. }
            | Self::End { kind, .. }
            | Self::Cancel { kind, .. } => Some(kind),
            Self::Wheel { .. } => None,
        }
    }

    /// Returns `true` for `End` and `Cancel`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. } | Self::Cancel { .. })
    }
}
