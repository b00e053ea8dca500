// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content items and edit-mode dragging.

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};

/// A rectangle placed on the canvas in content coordinates.
///
/// The engine only reads the geometry to size the content; `name`, `rotation`
/// and `color` are carried for the host's renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionableItem {
    /// Host-chosen identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Rotation in degrees. Ignored for content sizing.
    pub rotation: f64,
    /// Fill color in whatever notation the host uses.
    pub color: String,
}

impl PositionableItem {
    /// Creates an unrotated item covering `rect`.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            rotation: 0.0,
            color: String::new(),
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the top-left corner.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Unrotated bounds in content coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position(), Size::new(self.width, self.height))
    }
}

/// Tracks one item being dragged in edit mode.
///
/// Hosts report the total offset since the drag started rather than
/// per-event deltas, so positions never accumulate rounding drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ItemDrag {
    active: Option<(u64, Point)>,
}

impl ItemDrag {
    pub(crate) fn start(&mut self, id: u64, origin: Point) {
        self.active = Some((id, origin));
    }

    /// Position for `id` after `total` offset, if `id` is being dragged.
    pub(crate) fn position_for(&self, id: u64, total: Vec2) -> Option<Point> {
        match self.active {
            Some((active, origin)) if active == id => Some(origin + total),
            _ => None,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub(crate) fn end(&mut self) -> bool {
        self.active.take().is_some()
    }
}
