// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use crate::event::GestureEvent;

/// FIFO of translated gesture events with a single consumer.
///
/// Platform callbacks that fire off the UI thread push into the queue; the UI
/// thread drains it into the engine. The queue itself is not synchronized:
/// hosts that push from another thread wrap it in their own lock or channel
/// and keep draining on the UI thread, which is the only thread allowed to
/// touch the engine.
///
/// ```
/// use kurbo::Vec2;
/// use understory_gesture::{GestureEvent, GestureQueue};
///
/// let mut queue = GestureQueue::new();
/// queue.push(GestureEvent::pan_begin(0));
/// queue.push(GestureEvent::pan_update(Vec2::new(1.0, 0.0), 8));
///
/// let drained: Vec<_> = queue.drain().collect();
/// assert_eq!(drained.len(), 2);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GestureQueue {
    events: VecDeque<GestureEvent>,
}

impl GestureQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    pub fn push(&mut self, event: GestureEvent) {
        self.events.push_back(event);
    }

    /// Removes and returns the oldest event.
    pub fn pop(&mut self) -> Option<GestureEvent> {
        self.events.pop_front()
    }

    /// Removes every queued event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = GestureEvent> + '_ {
        self.events.drain(..)
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every queued event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Extend<GestureEvent> for GestureQueue {
    fn extend<T: IntoIterator<Item = GestureEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::GestureQueue;
    use crate::event::{GestureEvent, GestureKind};

    #[test]
    fn preserves_arrival_order() {
        let mut queue = GestureQueue::new();
        queue.extend([
            GestureEvent::scale_begin(Point::ORIGIN, 0),
            GestureEvent::scale_update(1.2, Point::ORIGIN, 1),
            GestureEvent::end(GestureKind::Scale, 2),
        ]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().map(|e| e.time()), Some(0));

        let rest: alloc::vec::Vec<u64> = queue.drain().map(|e| e.time()).collect();
        assert_eq!(rest, [1, 2]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = GestureQueue::new();
        queue.push(GestureEvent::pan_begin(0));
        queue.clear();
        assert!(queue.is_empty());
    }
}
