// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::modes::{AnchorMode, FitBehavior};

/// Legal translation range, inclusive on both ends, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateRange {
    /// Smallest legal translation on each axis.
    pub min: Vec2,
    /// Largest legal translation on each axis.
    pub max: Vec2,
}

impl TranslateRange {
    /// Clamps `candidate` into the range, each axis independently.
    #[must_use]
    pub fn clamp(&self, candidate: Vec2) -> Vec2 {
        Vec2::new(
            candidate.x.min(self.max.x).max(self.min.x),
            candidate.y.min(self.max.y).max(self.min.y),
        )
    }

    /// Returns `true` if `translate` is inside the range, allowing `tolerance`
    /// of numeric slack.
    #[must_use]
    pub fn contains(&self, translate: Vec2, tolerance: f64) -> bool {
        translate.x >= self.min.x - tolerance
            && translate.x <= self.max.x + tolerance
            && translate.y >= self.min.y - tolerance
            && translate.y <= self.max.y + tolerance
    }

    /// Grows the range by `amount` on every side.
    ///
    /// Used for transient overscroll while a pan gesture is active. Negative
    /// amounts are treated as zero.
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Self {
        let amount = amount.max(0.0);
        let grow = Vec2::new(amount, amount);
        Self {
            min: self.min - grow,
            max: self.max + grow,
        }
    }
}

/// Computes and applies the legal translation range for a content surface
/// shown through a viewport.
///
/// If any content or viewport dimension is not positive the layout has not
/// settled yet: [`ClampPolicy::range`] returns `None` and
/// [`ClampPolicy::clamp`] hands the candidate back unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ClampPolicy {
    /// How content is anchored in the viewport.
    pub anchor: AnchorMode,
    /// What to do on axes where the scaled content fits.
    pub fit: FitBehavior,
}

impl ClampPolicy {
    /// Creates a policy.
    #[must_use]
    pub fn new(anchor: AnchorMode, fit: FitBehavior) -> Self {
        Self { anchor, fit }
    }

    /// Returns the legal translation range, or `None` while geometry is
    /// unready.
    #[must_use]
    pub fn range(&self, content: Size, viewport: Size, scale: f64) -> Option<TranslateRange> {
        let ready = content.width > 0.0
            && content.height > 0.0
            && viewport.width > 0.0
            && viewport.height > 0.0
            && scale.is_finite()
            && scale > 0.0;
        if !ready {
            return None;
        }
        let (min_x, max_x) = self.axis_range(content.width * scale, viewport.width);
        let (min_y, max_y) = self.axis_range(content.height * scale, viewport.height);
        Some(TranslateRange {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        })
    }

    /// Clamps `candidate` into the legal range for the given geometry.
    #[must_use]
    pub fn clamp(&self, content: Size, viewport: Size, scale: f64, candidate: Vec2) -> Vec2 {
        match self.range(content, viewport, scale) {
            Some(range) => range.clamp(candidate),
            None => candidate,
        }
    }

    fn axis_range(&self, scaled: f64, viewport: f64) -> (f64, f64) {
        let overflow = scaled - viewport;
        match self.anchor {
            AnchorMode::TopLeft => {
                if overflow > 0.0 {
                    (-overflow, 0.0)
                } else {
                    match self.fit {
                        FitBehavior::Pin => (0.0, 0.0),
                        FitBehavior::Free => (0.0, -overflow),
                    }
                }
            }
            AnchorMode::Centered => {
                let half = overflow * 0.5;
                if overflow > 0.0 {
                    (-half, half)
                } else {
                    match self.fit {
                        FitBehavior::Pin => (0.0, 0.0),
                        FitBehavior::Free => (half, -half),
                    }
                }
            }
        }
    }
}
