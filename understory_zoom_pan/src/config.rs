// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use tracing::warn;
use understory_viewport::{
    AnchorMode, ClampPolicy, ContentSizing, DEFAULT_CONTENT_PADDING, FitBehavior, ScaleLimits,
};

use crate::error::ConfigError;

/// Default minimum interval between applied in-progress updates: one 60 Hz
/// frame.
pub const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 16;

/// Default relative zoom per wheel step.
pub const DEFAULT_WHEEL_STEP: f64 = 0.1;

/// Scale values closer than this are considered equal when publishing the
/// observable scale and when guarding external writes.
pub const SCALE_EPSILON: f64 = 1e-3;

fn finite_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn finite_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Construction-time settings of an [`Engine`](crate::Engine).
///
/// Start from [`EngineConfig::default`] and adjust with the `with_*`
/// builders. Nothing here changes after the engine is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Minimum milliseconds between applied scale or pan updates.
    pub throttle_interval_ms: u64,
    /// How the content size is determined from the items.
    pub content_sizing: ContentSizing,
    /// Anchor and fit conventions for clamping.
    pub clamp: ClampPolicy,
    /// Relative zoom per wheel step, in `(0, 1)`.
    pub wheel_step: f64,
    /// How far a pan may transiently exceed the legal range, in viewport
    /// units. The translation snaps back into range when the pan ends.
    pub overscroll: f64,
    /// Clamp translation on every applied pinch update instead of only at the
    /// end of the pinch.
    pub clamp_during_pinch: bool,
    /// Equality tolerance for the observable scale.
    pub scale_epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: ScaleLimits::DEFAULT.min(),
            max_scale: ScaleLimits::DEFAULT.max(),
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
            content_sizing: ContentSizing::default(),
            clamp: ClampPolicy::default(),
            wheel_step: DEFAULT_WHEEL_STEP,
            overscroll: 0.0,
            clamp_during_pinch: false,
            scale_epsilon: SCALE_EPSILON,
        }
    }
}

impl EngineConfig {
    /// Sets the scale range.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the update throttle interval.
    #[must_use]
    pub fn with_throttle_interval(mut self, interval_ms: u64) -> Self {
        self.throttle_interval_ms = interval_ms;
        self
    }

    /// Derives the content size from the items with the given padding.
    #[must_use]
    pub fn with_content_padding(mut self, padding: f64) -> Self {
        self.content_sizing = ContentSizing::Derived { padding };
        self
    }

    /// Uses a fixed content size regardless of the items.
    #[must_use]
    pub fn with_fixed_content_size(mut self, size: Size) -> Self {
        self.content_sizing = ContentSizing::Fixed(size);
        self
    }

    /// Sets the anchor mode.
    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorMode) -> Self {
        self.clamp.anchor = anchor;
        self
    }

    /// Sets the fit behavior.
    #[must_use]
    pub fn with_fit(mut self, fit: FitBehavior) -> Self {
        self.clamp.fit = fit;
        self
    }

    /// Sets the relative zoom per wheel step.
    #[must_use]
    pub fn with_wheel_step(mut self, step: f64) -> Self {
        self.wheel_step = step;
        self
    }

    /// Sets the transient pan overscroll tolerance.
    #[must_use]
    pub fn with_overscroll(mut self, overscroll: f64) -> Self {
        self.overscroll = overscroll;
        self
    }

    /// Enables or disables clamping on every pinch update.
    #[must_use]
    pub fn with_clamp_during_pinch(mut self, enabled: bool) -> Self {
        self.clamp_during_pinch = enabled;
        self
    }

    /// The normalized scale range.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min_scale, self.max_scale)
    }

    /// Checks every setting, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for limit in [self.min_scale, self.max_scale] {
            if !finite_positive(limit) {
                return Err(ConfigError::InvalidScaleLimit(limit));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        match self.content_sizing {
            ContentSizing::Derived { padding } if !finite_non_negative(padding) => {
                return Err(ConfigError::InvalidPadding(padding));
            }
            ContentSizing::Fixed(size)
                if !(finite_non_negative(size.width) && finite_non_negative(size.height)) =>
            {
                return Err(ConfigError::InvalidContentSize {
                    width: size.width,
                    height: size.height,
                });
            }
            _ => {}
        }
        if !(self.wheel_step > 0.0 && self.wheel_step < 1.0) {
            return Err(ConfigError::InvalidWheelStep(self.wheel_step));
        }
        if !finite_non_negative(self.overscroll) {
            return Err(ConfigError::InvalidOverscroll(self.overscroll));
        }
        if !finite_positive(self.scale_epsilon) {
            return Err(ConfigError::InvalidEpsilon(self.scale_epsilon));
        }
        Ok(())
    }

    /// Returns a copy with every invalid setting replaced by a usable value.
    ///
    /// Swapped scale limits are reordered; other invalid values fall back to
    /// their defaults. Each repair is logged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let mut out = self;
        let limits = self.scale_limits();
        if limits.min() != self.min_scale || limits.max() != self.max_scale {
            warn!(
                min = self.min_scale,
                max = self.max_scale,
                "repairing scale limits"
            );
        }
        out.min_scale = limits.min();
        out.max_scale = limits.max();
        match self.content_sizing {
            ContentSizing::Derived { padding } if !finite_non_negative(padding) => {
                warn!(padding, "invalid content padding; using default");
                out.content_sizing = ContentSizing::Derived {
                    padding: DEFAULT_CONTENT_PADDING,
                };
            }
            ContentSizing::Fixed(size)
                if !(finite_non_negative(size.width) && finite_non_negative(size.height)) =>
            {
                warn!(
                    width = size.width,
                    height = size.height,
                    "invalid fixed content size; deriving from items"
                );
                out.content_sizing = defaults.content_sizing;
            }
            _ => {}
        }
        if !(self.wheel_step > 0.0 && self.wheel_step < 1.0) {
            warn!(step = self.wheel_step, "invalid wheel step; using default");
            out.wheel_step = defaults.wheel_step;
        }
        if !finite_non_negative(self.overscroll) {
            warn!(overscroll = self.overscroll, "invalid overscroll; disabling");
            out.overscroll = 0.0;
        }
        if !finite_positive(self.scale_epsilon) {
            warn!(epsilon = self.scale_epsilon, "invalid scale epsilon; using default");
            out.scale_epsilon = defaults.scale_epsilon;
        }
        out
    }
}
