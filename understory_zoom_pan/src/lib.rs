// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_pan --heading-base-level=0

//! Understory Zoom/Pan: a gesture-driven viewport engine.
//!
//! [`Engine`] turns the normalized [`GestureEvent`](understory_gesture::GestureEvent)
//! stream from `understory_gesture` into a committed
//! [`TransformState`](understory_viewport::TransformState) over a bounded
//! content surface:
//!
//! - Pinch zooms around its focal point. Every update is computed from the
//!   state snapshotted at pinch begin, so focal math never compounds error.
//! - Pan moves the content, clamped after every applied update.
//! - Wheel steps zoom by a fixed factor around the pointer.
//! - External writes to the scale (as from a data binding) zoom around the
//!   viewport center, guarded against feedback loops.
//! - In-progress updates are throttled per gesture kind; begin, end and
//!   cancel transitions are never dropped, and a deferred update is still
//!   committed on end.
//!
//! Committed transforms are pushed to a [`RenderSync`] as they happen. The
//! observable scale ([`ScaleProperty`]) only changes when a gesture
//! completes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_gesture::{GestureEvent, GestureKind};
//! use understory_viewport::TransformState;
//! use understory_zoom_pan::{Engine, EngineConfig};
//!
//! let mut frames = 0;
//! let mut engine = Engine::new(EngineConfig::default(), |_: &TransformState| frames += 1);
//! engine.set_viewport_size(Size::new(800.0, 600.0));
//! engine.set_content_size(Size::new(1200.0, 900.0));
//!
//! let focal = Point::new(400.0, 300.0);
//! engine.handle_event(GestureEvent::scale_begin(focal, 0));
//! engine.handle_event(GestureEvent::scale_update(2.0, focal, 16));
//! engine.handle_event(GestureEvent::end(GestureKind::Scale, 32));
//!
//! assert_eq!(engine.scale(), 2.0);
//! assert_eq!(engine.translate(), Vec2::new(-400.0, -300.0));
//! assert_eq!(engine.scale_property().get(), 2.0);
//! drop(engine);
//! assert_eq!(frames, 2);
//! ```
//!
//! ## Logging
//!
//! The engine emits [`tracing`] events: `debug` for gesture transitions,
//! resets and external writes, `trace` for deferred or suppressed updates,
//! and `warn` when a configuration is repaired. Install any subscriber to see
//! them.
//!
//! ## Features
//!
//! - `std` (default): build dependencies against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod item;
mod render;

pub use config::{DEFAULT_THROTTLE_INTERVAL_MS, DEFAULT_WHEEL_STEP, EngineConfig, SCALE_EPSILON};
pub use engine::{Engine, GestureStage};
pub use error::ConfigError;
pub use item::PositionableItem;
pub use render::{RenderSync, ScaleProperty};
