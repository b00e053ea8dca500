// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when an [`EngineConfig`](crate::EngineConfig) is invalid.
///
/// These are programmer errors caught at construction time; the engine itself
/// never fails at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_scale` is larger than `max_scale`.
    InvertedScaleLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// A scale limit is not finite and positive.
    InvalidScaleLimit(f64),
    /// Derived-content padding is negative or not finite.
    InvalidPadding(f64),
    /// A fixed content dimension is negative or not finite.
    InvalidContentSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// The wheel step is outside `(0, 1)`.
    InvalidWheelStep(f64),
    /// The overscroll tolerance is negative or not finite.
    InvalidOverscroll(f64),
    /// The publish epsilon is not finite and positive.
    InvalidEpsilon(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvertedScaleLimits { min, max } => {
                write!(f, "min scale {min} is larger than max scale {max}")
            }
            Self::InvalidScaleLimit(v) => write!(f, "scale limit {v} must be finite and positive"),
            Self::InvalidPadding(v) => {
                write!(f, "content padding {v} must be finite and non-negative")
            }
            Self::InvalidContentSize { width, height } => write!(
                f,
                "fixed content size {width}x{height} must be finite and non-negative"
            ),
            Self::InvalidWheelStep(v) => write!(f, "wheel step {v} must lie strictly between 0 and 1"),
            Self::InvalidOverscroll(v) => {
                write!(f, "overscroll tolerance {v} must be finite and non-negative")
            }
            Self::InvalidEpsilon(v) => write!(f, "scale epsilon {v} must be finite and positive"),
        }
    }
}

impl core::error::Error for ConfigError {}
