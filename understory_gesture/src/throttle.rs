// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting for in-progress gesture updates.
//!
//! ## Usage
//!
//! 1) Call [`ThrottleGate::begin`] when a gesture starts.
//! 2) For each update, ask [`ThrottleGate::accept`] whether to apply it.
//! 3) Call [`ThrottleGate::end`] when the gesture ends or is cancelled.
//!
//! Begin and end transitions are never routed through the gate; only updates
//! are. The first update after `begin` always passes.
//!
//! ```
//! use understory_gesture::throttle::ThrottleGate;
//!
//! let mut gate = ThrottleGate::new(16);
//! gate.begin();
//! assert!(gate.accept(1000));
//! assert!(!gate.accept(1008));
//! assert!(gate.accept(1016));
//! ```

/// Drops updates that arrive faster than a fixed interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrottleGate {
    interval: u64,
    last_accepted: Option<u64>,
}

impl ThrottleGate {
    /// Creates a gate admitting at most one update per `interval_ms`.
    ///
    /// An interval of zero admits every update.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: interval_ms,
            last_accepted: None,
        }
    }

    /// The configured interval in milliseconds.
    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Starts a new gesture; the next update is accepted unconditionally.
    pub fn begin(&mut self) {
        self.last_accepted = None;
    }

    /// Decides whether an update at `now` should be applied.
    ///
    /// Accepted updates become the new reference time. A timestamp earlier
    /// than the last accepted one counts as no time elapsed.
    pub fn accept(&mut self, now: u64) -> bool {
        let pass = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        };
        if pass {
            self.last_accepted = Some(now);
        }
        pass
    }

    /// Ends the current gesture.
    pub fn end(&mut self) {
        self.last_accepted = None;
    }

    /// Time of the last accepted update in the current gesture, if any.
    #[must_use]
    pub fn last_accepted(&self) -> Option<u64> {
        self.last_accepted
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::ThrottleGate;

    #[test]
    fn first_update_always_passes() {
        let mut gate = ThrottleGate::new(1_000);
        gate.begin();
        assert!(gate.accept(5));
        assert_eq!(gate.last_accepted(), Some(5));
    }

    #[test]
    fn burst_keeps_only_spaced_updates() {
        let mut gate = ThrottleGate::new(16);
        gate.begin();
        let accepted: Vec<u64> = [0_u64, 4, 8, 12, 16, 20, 31, 32, 40, 48]
            .into_iter()
            .filter(|&t| gate.accept(t))
            .collect();
        assert_eq!(accepted, vec![0, 16, 32, 48]);
    }

    #[test]
    fn begin_resets_reference() {
        let mut gate = ThrottleGate::new(16);
        gate.begin();
        assert!(gate.accept(100));
        gate.end();
        gate.begin();
        assert!(gate.accept(101));
    }

    #[test]
    fn clock_going_backwards_is_throttled() {
        let mut gate = ThrottleGate::new(10);
        gate.begin();
        assert!(gate.accept(100));
        assert!(!gate.accept(50));
        assert!(gate.accept(110));
    }

    #[test]
    fn zero_interval_admits_everything() {
        let mut gate = ThrottleGate::new(0);
        gate.begin();
        assert!(gate.accept(1));
        assert!(gate.accept(1));
        assert!(gate.accept(1));
        assert_eq!(gate.interval(), 0);
    }
}
