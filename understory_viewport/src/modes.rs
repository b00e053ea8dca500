// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Where the content origin sits relative to the viewport at zero translation.
///
/// The anchor is fixed when a [`crate::ClampPolicy`] is built; it decides both
/// the clamp formulas and which viewport point focal zooms are measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// Content `(0, 0)` maps to viewport `(0, 0)` at scale `1.0`.
    ///
    /// Scaling happens about the content's top-left corner.
    #[default]
    TopLeft,
    /// The content center aligns with the viewport center at zero translation.
    ///
    /// Scaling happens about the content center.
    Centered,
}

impl AnchorMode {
    /// Returns the viewport point that translation and focal points are
    /// measured from.
    #[must_use]
    pub fn origin(self, viewport: Size) -> Point {
        match self {
            Self::TopLeft => Point::ORIGIN,
            Self::Centered => Point::new(viewport.width * 0.5, viewport.height * 0.5),
        }
    }
}

/// What panning is allowed along an axis on which the scaled content already
/// fits inside the viewport.
///
/// Overflowing axes always use the same range regardless of this setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitBehavior {
    /// Content that fits is held at its anchored position.
    ///
    /// With [`AnchorMode::TopLeft`] this pins the content to the viewport's
    /// top-left corner.
    #[default]
    Pin,
    /// Content that fits may be moved anywhere that keeps it fully inside the
    /// viewport.
    Free,
}
