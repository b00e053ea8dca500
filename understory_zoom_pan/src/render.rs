// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render synchronization and the observable scale.
//!
//! The engine pushes every committed [`TransformState`] to a [`RenderSync`]
//! immediately; the host maps it onto whatever its scene graph or GPU layer
//! uses. The externally observable scale is tracked separately by
//! [`ScaleProperty`] and only changes when a gesture completes, so bindings
//! do not churn at frame rate.

use understory_viewport::TransformState;

/// Receiver of committed transforms.
///
/// Any `FnMut(&TransformState)` closure implements this trait.
pub trait RenderSync {
    /// Called after every change to the committed transform.
    fn apply(&mut self, transform: &TransformState);

    /// Called when the observable scale changes, including when an external
    /// write was clamped and the effective value has to be written back.
    fn scale_changed(&mut self, scale: f64) {
        let _ = scale;
    }
}

impl<F: FnMut(&TransformState)> RenderSync for F {
    fn apply(&mut self, transform: &TransformState) {
        self(transform);
    }
}

/// Externally observable scale with publish-on-change semantics.
///
/// Each accepted change bumps a revision counter so observers can cheaply
/// tell whether anything happened since they last looked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleProperty {
    value: f64,
    revision: u64,
    epsilon: f64,
}

impl ScaleProperty {
    /// Creates a property holding `value`.
    #[must_use]
    pub fn new(value: f64, epsilon: f64) -> Self {
        Self {
            value,
            revision: 0,
            epsilon,
        }
    }

    /// Current published value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Number of accepted changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if `value` is within epsilon of the published value.
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        (self.value - value).abs() < self.epsilon
    }

    /// Publishes `value` if it differs by at least epsilon.
    ///
    /// Returns `true` if the value changed.
    pub fn publish(&mut self, value: f64) -> bool {
        if self.matches(value) {
            return false;
        }
        self.force(value);
        true
    }

    /// Publishes `value` unconditionally.
    pub fn force(&mut self, value: f64) {
        self.value = value;
        self.revision = self.revision.wrapping_add(1);
    }
}
