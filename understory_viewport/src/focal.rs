// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Returns the translation that keeps `focal` visually stationary when the
/// scale goes from `start_scale` to `new_scale`.
///
/// `focal` is measured from the anchor origin (see
/// [`AnchorMode::origin`](crate::AnchorMode::origin)), and `start_translate`
/// is the translation in effect at `start_scale`. Per axis:
///
/// ```text
/// ratio = new_scale / start_scale
/// new_translate = focal * (1 - ratio) + start_translate * ratio
/// ```
///
/// Callers zooming over a gesture should keep passing the scale and
/// translation snapshotted at gesture start, not the latest values, so that
/// intermediate clamping can never feed back into the result.
///
/// A non-positive or non-finite `start_scale` returns `start_translate`.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use understory_viewport::focal_zoom;
///
/// let t = focal_zoom(1.0, 2.0, Point::new(400.0, 300.0), Vec2::ZERO);
/// assert_eq!(t, Vec2::new(-400.0, -300.0));
/// ```
#[must_use]
pub fn focal_zoom(start_scale: f64, new_scale: f64, focal: Point, start_translate: Vec2) -> Vec2 {
    if !(start_scale.is_finite() && start_scale > 0.0) || !new_scale.is_finite() {
        return start_translate;
    }
    let ratio = new_scale / start_scale;
    focal.to_vec2() * (1.0 - ratio) + start_translate * ratio
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::focal_zoom;

    /// Content point under `view` for a top-left anchored transform.
    fn content_under(view: Point, scale: f64, translate: Vec2) -> Point {
        ((view.to_vec2() - translate) / scale).to_point()
    }

    #[test]
    fn focal_point_stays_put() {
        let focal = Point::new(400.0, 300.0);
        let before = content_under(focal, 1.0, Vec2::ZERO);

        let t = focal_zoom(1.0, 2.0, focal, Vec2::ZERO);
        assert_eq!(t, Vec2::new(-400.0, -300.0));

        let after = content_under(focal, 2.0, t);
        assert!((after.x - before.x).abs() < 1e-6);
        assert!((after.y - before.y).abs() < 1e-6);
    }

    #[test]
    fn focal_point_stays_put_from_offset_start() {
        let focal = Point::new(123.0, 456.0);
        let start = Vec2::new(-250.0, -75.0);
        let before = content_under(focal, 1.3, start);

        let t = focal_zoom(1.3, 0.65, focal, start);
        let after = content_under(focal, 0.65, t);
        assert!((after.x - before.x).abs() < 1e-6);
        assert!((after.y - before.y).abs() < 1e-6);
    }

    #[test]
    fn unchanged_scale_keeps_translation() {
        let start = Vec2::new(-12.5, 40.0);
        assert_eq!(focal_zoom(1.5, 1.5, Point::new(80.0, 90.0), start), start);
    }

    #[test]
    fn degenerate_start_scale_is_ignored() {
        let start = Vec2::new(3.0, 4.0);
        assert_eq!(focal_zoom(0.0, 2.0, Point::new(1.0, 1.0), start), start);
        assert_eq!(focal_zoom(f64::NAN, 2.0, Point::new(1.0, 1.0), start), start);
    }
}
