// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Padding added past the furthest item when content size is derived.
pub const DEFAULT_CONTENT_PADDING: f64 = 50.0;

/// Returns the content size needed to show every rectangle, measured from the
/// content origin: `max(x1) + padding` by `max(y1) + padding`.
///
/// Extents start at zero, so items at negative coordinates never shrink the
/// surface. An empty input yields [`Size::ZERO`], which clamping treats as
/// unready geometry.
#[must_use]
pub fn content_extent<I>(rects: I, padding: f64) -> Size
where
    I: IntoIterator<Item = Rect>,
{
    let mut any = false;
    let mut max_x = 0.0_f64;
    let mut max_y = 0.0_f64;
    for rect in rects {
        any = true;
        max_x = max_x.max(rect.max_x());
        max_y = max_y.max(rect.max_y());
    }
    if !any {
        return Size::ZERO;
    }
    Size::new(max_x + padding, max_y + padding)
}

/// How the content surface size is determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentSizing {
    /// A fixed size, independent of the items.
    Fixed(Size),
    /// The extent of all items plus `padding` (see [`content_extent`]).
    Derived {
        /// Extra space past the furthest item on each axis.
        padding: f64,
    },
}

impl ContentSizing {
    /// Resolves the content size for the given item rectangles.
    #[must_use]
    pub fn resolve<I>(&self, rects: I) -> Size
    where
        I: IntoIterator<Item = Rect>,
    {
        match *self {
            Self::Fixed(size) => size,
            Self::Derived { padding } => content_extent(rects, padding),
        }
    }
}

impl Default for ContentSizing {
    fn default() -> Self {
        Self::Derived {
            padding: DEFAULT_CONTENT_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ContentSizing, DEFAULT_CONTENT_PADDING, content_extent};

    #[test]
    fn extent_uses_furthest_edges_plus_padding() {
        let rects = [
            Rect::from_origin_size((100.0, 50.0), (80.0, 80.0)),
            Rect::from_origin_size((700.0, 20.0), (120.0, 60.0)),
            Rect::from_origin_size((10.0, 400.0), (50.0, 90.0)),
        ];
        let size = content_extent(rects, DEFAULT_CONTENT_PADDING);
        assert_eq!(size, Size::new(870.0, 540.0));
    }

    #[test]
    fn empty_extent_is_zero() {
        assert_eq!(content_extent(core::iter::empty(), 50.0), Size::ZERO);
    }

    #[test]
    fn negative_items_do_not_shrink_surface() {
        let rects = [Rect::new(-300.0, -300.0, -100.0, -100.0)];
        assert_eq!(content_extent(rects, 10.0), Size::new(10.0, 10.0));
    }

    #[test]
    fn fixed_sizing_ignores_items() {
        let sizing = ContentSizing::Fixed(Size::new(1200.0, 900.0));
        let rects = [Rect::new(0.0, 0.0, 5000.0, 5000.0)];
        assert_eq!(sizing.resolve(rects), Size::new(1200.0, 900.0));
        assert_eq!(
            ContentSizing::default().resolve(rects),
            Size::new(5050.0, 5050.0)
        );
    }
}
