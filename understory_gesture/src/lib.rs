// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: platform input normalized into one gesture stream.
//!
//! Every platform reports pinch, pan and wheel input in its own vocabulary.
//! This crate defines a single [`GestureEvent`] stream
//! (`Begin` / `Update` / `End` / `Cancel` for the continuous [`GestureKind`]s,
//! plus discrete `Wheel` steps) and small adapters that translate into it:
//!
//! - [`pinch`]: platform pinch recognizers, cumulative or incremental scale.
//! - [`pan`]: platform pan recognizers, cumulative, delta, or inverted scroll
//!   distance.
//! - [`wheel`]: mouse wheel / scroll axis with a noise dead zone.
//! - [`touch`]: raw multi-touch pointers, recognizing pan and pinch itself.
//!
//! All adapters implement [`GestureSource`]. Next to them sit
//! [`throttle::ThrottleGate`], which rate-limits in-progress updates without
//! ever dropping begin/end transitions, and [`GestureQueue`], the
//! single-consumer hand-off for input that arrives off the UI thread.
//!
//! Adapters only translate; they never hold transform state. The engine in
//! `understory_zoom_pan` consumes the events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::pinch::{PinchInput, PinchPhase, PinchSource, ScaleReporting};
//! use understory_gesture::{GestureEvent, GestureKind, GestureQueue, GestureSource};
//!
//! let mut pinch = PinchSource::new(ScaleReporting::Cumulative);
//! let mut queue = GestureQueue::new();
//! let focal = Point::new(400.0, 300.0);
//!
//! queue.extend(pinch.translate(PinchInput::new(PinchPhase::Began, 1.0, focal, 0)));
//! queue.extend(pinch.translate(PinchInput::new(PinchPhase::Changed, 2.0, focal, 16)));
//! queue.extend(pinch.translate(PinchInput::new(PinchPhase::Ended, 2.0, focal, 32)));
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.pop(), Some(GestureEvent::scale_begin(focal, 0)));
//! assert_eq!(queue.pop(), Some(GestureEvent::scale_update(2.0, focal, 16)));
//! assert_eq!(queue.pop(), Some(GestureEvent::end(GestureKind::Scale, 32)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Tracing against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds. One of
//!   `std` or `libm` is required by [`touch`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
mod queue;
mod source;

pub mod pan;
pub mod pinch;
pub mod throttle;
pub mod touch;
pub mod wheel;

pub use event::{GestureEvent, GestureKind, GestureUpdate};
pub use queue::GestureQueue;
pub use source::{GestureEvents, GestureSource};
