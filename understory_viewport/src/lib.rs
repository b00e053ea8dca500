// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_viewport --heading-base-level=0

//! Understory Viewport: zoom/pan geometry for a bounded content surface.
//!
//! This crate holds the pure geometry behind a zoomable, pannable canvas of
//! fixed size shown through a smaller viewport:
//! - [`TransformState`]: the current uniform scale and translation.
//! - [`ScaleLimits`]: the legal scale range.
//! - [`ClampPolicy`]: the legal translation range for a given scale, content
//!   size and viewport size, with [`AnchorMode`] and [`FitBehavior`] choosing
//!   between the pinned/free and top-left/centered conventions.
//! - [`focal_zoom`]: the translation that keeps a focal point stationary
//!   across a scale change.
//! - [`content_extent`] / [`ContentSizing`]: deriving the content size from
//!   positioned item rectangles.
//!
//! It does **not** interpret input or own any rendering. Gesture adapters live
//! in `understory_gesture` and the orchestrating engine in
//! `understory_zoom_pan`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_viewport::{ClampPolicy, ScaleLimits, TransformState, focal_zoom};
//!
//! let content = Size::new(1200.0, 900.0);
//! let viewport = Size::new(800.0, 600.0);
//! let limits = ScaleLimits::default();
//! let policy = ClampPolicy::default();
//!
//! let mut state = TransformState::IDENTITY;
//!
//! // Zoom 2x about the viewport center.
//! let focal = Point::new(400.0, 300.0);
//! let start = state;
//! state.set_scale(start.scale() * 2.0, limits);
//! let t = focal_zoom(start.scale(), state.scale(), focal, start.translate());
//! state.set_translate(policy.clamp(content, viewport, state.scale(), t));
//!
//! assert_eq!(state.translate(), Vec2::new(-400.0, -300.0));
//! ```
//!
//! ## Clamping conventions
//!
//! With the default [`AnchorMode::TopLeft`] and [`FitBehavior::Pin`], content
//! that fits the viewport on an axis is pinned at translation zero, and
//! content that overflows may scroll by `-(scaled - viewport) ..= 0`, so the
//! top/left edge is never pulled inward. Unready geometry (any dimension not
//! positive) turns clamping into a no-op rather than an error.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod clamp;
mod focal;
mod modes;
mod transform;

pub use bounds::{ContentSizing, DEFAULT_CONTENT_PADDING, content_extent};
pub use clamp::{ClampPolicy, TranslateRange};
pub use focal::focal_zoom;
pub use modes::{AnchorMode, FitBehavior};
pub use transform::{ScaleLimits, TransformState};
