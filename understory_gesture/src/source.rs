// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::event::GestureEvent;

/// Events produced by one raw input.
///
/// Most inputs map to zero or one event; hand-overs (for example a pan
/// turning into a pinch) produce two.
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// Adapts one platform's raw input vocabulary into [`GestureEvent`]s.
///
/// Implementations only translate; they never touch transform state. The
/// translated events are fed to the engine (directly, or through a
/// [`GestureQueue`](crate::GestureQueue) when input arrives off the UI
/// thread).
pub trait GestureSource {
    /// The raw input this source understands.
    type Input;

    /// Translates one raw input into zero or more gesture events.
    fn translate(&mut self, input: Self::Input) -> GestureEvents;

    /// Drops any in-progress tracking without emitting events.
    fn reset(&mut self);
}
