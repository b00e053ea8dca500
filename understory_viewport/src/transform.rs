// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::AnchorMode;

/// Inclusive range of legal scale factors.
///
/// Construction normalizes the bounds so that `min <= max`, mirroring how
/// zoom limits are normalized elsewhere in Understory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// The default range, `[0.1, 3.0]`.
    pub const DEFAULT: Self = Self { min: 0.1, max: 3.0 };

    /// Creates a scale range.
    ///
    /// Swapped bounds are reordered. Bounds that are not finite and positive
    /// fall back to the matching bound of [`ScaleLimits::DEFAULT`].
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let sane = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };
        let min = sane(min, Self::DEFAULT.min);
        let max = sane(max, Self::DEFAULT.max);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range. `NaN` maps to the minimum.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Uniform scale plus translation applied to the content surface.
///
/// Translation is expressed in viewport units relative to the anchor origin
/// (see [`AnchorMode::origin`]). The scale is only changed through
/// [`TransformState::set_scale`], which keeps it inside a [`ScaleLimits`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    scale: f64,
    translate: Vec2,
}

impl TransformState {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a state from raw parts.
    ///
    /// The scale is clamped into `limits`.
    #[must_use]
    pub fn new(scale: f64, translate: Vec2, limits: ScaleLimits) -> Self {
        Self {
            scale: limits.clamp(scale),
            translate,
        }
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Horizontal translation.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.translate.x
    }

    /// Vertical translation.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.translate.y
    }

    /// Sets the scale, clamped into `limits`. Returns `true` if it changed.
    pub fn set_scale(&mut self, scale: f64, limits: ScaleLimits) -> bool {
        let clamped = limits.clamp(scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Sets the translation. Returns `true` if it changed.
    ///
    /// Non-finite components are rejected and leave the state untouched.
    pub fn set_translate(&mut self, translate: Vec2) -> bool {
        if !translate.is_finite() || self.translate == translate {
            return false;
        }
        self.translate = translate;
        true
    }

    /// Builds the content → viewport transform.
    ///
    /// With [`AnchorMode::TopLeft`] this is `translate * scale`; with
    /// [`AnchorMode::Centered`] the content center is moved to the viewport
    /// center before translation is applied.
    #[must_use]
    pub fn to_affine(&self, anchor: AnchorMode, content: Size, viewport: Size) -> Affine {
        match anchor {
            AnchorMode::TopLeft => Affine::translate(self.translate) * Affine::scale(self.scale),
            AnchorMode::Centered => {
                let view_center = anchor.origin(viewport).to_vec2();
                let content_center = Vec2::new(content.width * 0.5, content.height * 0.5);
                Affine::translate(view_center + self.translate)
                    * Affine::scale(self.scale)
                    * Affine::translate(-content_center)
            }
        }
    }

    /// Maps a content-space point into viewport coordinates.
    #[must_use]
    pub fn content_to_view_point(
        &self,
        pt: Point,
        anchor: AnchorMode,
        content: Size,
        viewport: Size,
    ) -> Point {
        self.to_affine(anchor, content, viewport) * pt
    }

    /// Maps a viewport point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(
        &self,
        pt: Point,
        anchor: AnchorMode,
        content: Size,
        viewport: Size,
    ) -> Point {
        self.to_affine(anchor, content, viewport).inverse() * pt
    }

    /// Returns the content-space rectangle currently visible through the
    /// viewport.
    #[must_use]
    pub fn visible_content_rect(&self, anchor: AnchorMode, content: Size, viewport: Size) -> Rect {
        self.to_affine(anchor, content, viewport)
            .inverse()
            .transform_rect_bbox(viewport.to_rect())
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
