// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom/pan state machine.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace};
use understory_gesture::throttle::ThrottleGate;
use understory_gesture::{GestureEvent, GestureKind, GestureQueue};
use understory_viewport::{ScaleLimits, TransformState, TranslateRange, focal_zoom};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::item::{ItemDrag, PositionableItem};
use crate::render::{RenderSync, ScaleProperty};

/// Lifecycle of one continuous gesture kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureStage {
    /// No gesture of this kind is in progress.
    #[default]
    Idle,
    /// The gesture began; no update has been applied yet.
    Began,
    /// At least one update has been applied.
    Updating,
}

impl GestureStage {
    /// Returns `true` unless idle.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }
}

#[derive(Clone, Copy, Debug)]
struct ScaleTracking {
    stage: GestureStage,
    /// Committed state when the pinch began; every update is computed from it.
    start: TransformState,
    focal: Point,
    gate: ThrottleGate,
    /// Latest throttled update as (clamped scale, focal).
    pending: Option<(f64, Point)>,
}

impl ScaleTracking {
    fn idle(interval_ms: u64) -> Self {
        Self {
            stage: GestureStage::Idle,
            start: TransformState::IDENTITY,
            focal: Point::ORIGIN,
            gate: ThrottleGate::new(interval_ms),
            pending: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PanTracking {
    stage: GestureStage,
    gate: ThrottleGate,
    /// Deltas accumulated since the last applied update.
    pending: Vec2,
}

impl PanTracking {
    fn idle(interval_ms: u64) -> Self {
        Self {
            stage: GestureStage::Idle,
            gate: ThrottleGate::new(interval_ms),
            pending: Vec2::ZERO,
        }
    }
}

/// Gesture-driven viewport transform for one canvas.
///
/// The engine owns the committed [`TransformState`], the content and viewport
/// sizes, and the per-gesture tracking. Feed it [`GestureEvent`]s from a
/// single thread; every committed change is pushed to the [`RenderSync`]
/// immediately.
///
/// Translation is clamped into the legal range whenever a gesture completes
/// and after every pan update. During a pinch it is left unclamped unless
/// [`EngineConfig::clamp_during_pinch`] is set, because clamping mid-pinch
/// fights the focal-point math.
#[derive(Debug)]
pub struct Engine<R> {
    config: EngineConfig,
    limits: ScaleLimits,
    state: TransformState,
    content: Size,
    viewport: Size,
    render: R,
    scale_property: ScaleProperty,
    scale: ScaleTracking,
    pan: PanTracking,
    edit_mode: bool,
    item_drag: ItemDrag,
}

impl<R: RenderSync> Engine<R> {
    /// Creates an engine at identity with empty content and viewport.
    ///
    /// Invalid configuration values are repaired (see
    /// [`EngineConfig::normalized`]); use [`Engine::try_new`] to reject them
    /// instead.
    pub fn new(config: EngineConfig, render: R) -> Self {
        let config = config.normalized();
        let interval = config.throttle_interval_ms;
        Self {
            limits: config.scale_limits(),
            state: TransformState::IDENTITY,
            content: Size::ZERO,
            viewport: Size::ZERO,
            render,
            scale_property: ScaleProperty::new(1.0, config.scale_epsilon),
            scale: ScaleTracking::idle(interval),
            pan: PanTracking::idle(interval),
            edit_mode: false,
            item_drag: ItemDrag::default(),
            config,
        }
    }

    /// Creates an engine, failing on any invalid configuration value.
    pub fn try_new(config: EngineConfig, render: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, render))
    }

    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Committed transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Committed scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// Committed translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate()
    }

    /// Content size in content units.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Viewport size in viewport units.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// The externally observable scale.
    #[must_use]
    pub fn scale_property(&self) -> &ScaleProperty {
        &self.scale_property
    }

    /// Stage of the pinch gesture.
    #[must_use]
    pub fn scale_stage(&self) -> GestureStage {
        self.scale.stage
    }

    /// Stage of the pan gesture.
    #[must_use]
    pub fn pan_stage(&self) -> GestureStage {
        self.pan.stage
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.scale.stage.is_active()
    }

    /// Shared access to the render sink.
    #[must_use]
    pub fn render(&self) -> &R {
        &self.render
    }

    /// Mutable access to the render sink.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Legal translation range for the committed scale, if geometry is ready.
    #[must_use]
    pub fn translate_range(&self) -> Option<TranslateRange> {
        self.config
            .clamp
            .range(self.content, self.viewport, self.state.scale())
    }

    /// Content → viewport transform for rendering.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.state
            .to_affine(self.config.clamp.anchor, self.content, self.viewport)
    }

    /// Maps a viewport point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.state
            .view_to_content_point(pt, self.config.clamp.anchor, self.content, self.viewport)
    }

    /// Maps a content point into viewport coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.state
            .content_to_view_point(pt, self.config.clamp.anchor, self.content, self.viewport)
    }

    /// Content-space rectangle currently visible.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.state
            .visible_content_rect(self.config.clamp.anchor, self.content, self.viewport)
    }

    // --- geometry ---

    /// Recomputes the content size from `items`.
    ///
    /// The transform is not reset. When no gesture is in progress the
    /// translation is reclamped against the new size; otherwise the gesture's
    /// completion clamps it.
    pub fn load_content(&mut self, items: &[PositionableItem]) {
        self.content = self
            .config
            .content_sizing
            .resolve(items.iter().map(PositionableItem::rect));
        debug!(
            items = items.len(),
            width = self.content.width,
            height = self.content.height,
            "content loaded"
        );
        self.reclamp_if_idle();
    }

    /// Overrides the content size directly.
    ///
    /// Like [`Engine::set_viewport_size`], this reclamps when no gesture is in
    /// progress.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content == size {
            return;
        }
        self.content = size;
        self.reclamp_if_idle();
    }

    /// Updates the viewport size after a layout change.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        self.viewport = size;
        debug!(width = size.width, height = size.height, "viewport resized");
        self.reclamp_if_idle();
    }

    fn reclamp_if_idle(&mut self) {
        if self.scale.stage.is_active() || self.pan.stage.is_active() {
            return;
        }
        if self.commit_clamped() {
            self.sync();
        }
    }

    // --- events ---

    /// Applies one normalized gesture event.
    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Begin {
                kind: GestureKind::Scale,
                focal,
                ..
            } => {
                let focal = focal.unwrap_or_else(|| self.viewport_center());
                self.on_scale_begin(focal);
            }
            GestureEvent::Begin {
                kind: GestureKind::Pan,
                ..
            } => self.on_pan_begin(),
            GestureEvent::Update {
                kind: GestureKind::Scale,
                update,
                time,
            } => {
                if let Some(ratio) = update.scale_ratio {
                    let focal = update.focal.unwrap_or(self.scale.focal);
                    self.on_scale_update(ratio, focal, time);
                }
            }
            GestureEvent::Update {
                kind: GestureKind::Pan,
                update,
                time,
            } => {
                if let Some(delta) = update.pan_delta {
                    self.on_pan_update(delta, time);
                }
            }
            GestureEvent::End {
                kind: GestureKind::Scale,
                ..
            } => self.on_scale_end(),
            GestureEvent::Cancel {
                kind: GestureKind::Scale,
                ..
            } => self.on_scale_cancel(),
            GestureEvent::End {
                kind: GestureKind::Pan,
                ..
            } => self.on_pan_end(),
            GestureEvent::Cancel {
                kind: GestureKind::Pan,
                ..
            } => self.on_pan_cancel(),
            GestureEvent::Wheel {
                delta, position, ..
            } => self.on_wheel(delta, position),
        }
    }

    /// Applies every queued event in arrival order.
    pub fn drain_queue(&mut self, queue: &mut GestureQueue) {
        for event in queue.drain() {
            self.handle_event(event);
        }
    }

    // --- pinch ---

    /// Starts a pinch around `focal`, snapshotting the committed state.
    pub fn on_scale_begin(&mut self, focal: Point) {
        if self.scale.stage.is_active() {
            debug!("scale gesture restarted without end");
        }
        let mut gate = ThrottleGate::new(self.config.throttle_interval_ms);
        gate.begin();
        self.scale = ScaleTracking {
            stage: GestureStage::Began,
            start: self.state,
            focal,
            gate,
            pending: None,
        };
        // Pan deltas recorded before the pinch are stale relative to its
        // snapshot.
        self.pan.pending = Vec2::ZERO;
        debug!(
            scale = self.state.scale(),
            x = focal.x,
            y = focal.y,
            "scale gesture began"
        );
    }

    /// Moves the pinch to `ratio` times the start scale around `focal`.
    ///
    /// An update without a preceding begin starts the gesture implicitly.
    pub fn on_scale_update(&mut self, ratio: f64, focal: Point, time: u64) {
        if !(ratio.is_finite() && ratio > 0.0) {
            trace!(ratio, "dropping degenerate scale ratio");
            return;
        }
        let focal = if focal.is_finite() {
            focal
        } else {
            self.scale.focal
        };
        if !self.scale.stage.is_active() {
            self.on_scale_begin(focal);
        }
        let new_scale = self.limits.clamp(self.scale.start.scale() * ratio);
        self.scale.focal = focal;
        if self.scale.gate.accept(time) {
            self.scale.pending = None;
            self.scale.stage = GestureStage::Updating;
            if self.apply_pinch(new_scale, focal) {
                self.sync();
            }
        } else {
            trace!(time, "scale update deferred");
            self.scale.pending = Some((new_scale, focal));
        }
    }

    /// Ends the pinch: applies any deferred update, clamps, renders and
    /// publishes the scale.
    pub fn on_scale_end(&mut self) {
        if !self.scale.stage.is_active() {
            return;
        }
        if let Some((scale, focal)) = self.scale.pending.take() {
            self.apply_pinch(scale, focal);
        }
        self.finish_scale();
    }

    /// Aborts the pinch. A deferred update is discarded; whatever was already
    /// applied is clamped and committed.
    pub fn on_scale_cancel(&mut self) {
        if !self.scale.stage.is_active() {
            return;
        }
        if self.scale.pending.take().is_some() {
            trace!("discarding deferred scale update on cancel");
        }
        self.finish_scale();
    }

    fn apply_pinch(&mut self, new_scale: f64, focal: Point) -> bool {
        let start = self.scale.start;
        let mut translate = focal_zoom(
            start.scale(),
            new_scale,
            self.anchor_relative(focal),
            start.translate(),
        );
        if self.config.clamp_during_pinch {
            translate = self
                .config
                .clamp
                .clamp(self.content, self.viewport, new_scale, translate);
        }
        let scaled = self.state.set_scale(new_scale, self.limits);
        let moved = self.state.set_translate(translate);
        scaled || moved
    }

    fn finish_scale(&mut self) {
        self.scale.gate.end();
        self.scale.stage = GestureStage::Idle;
        self.commit_clamped();
        self.sync();
        self.publish_scale();
        // Pan deltas are relative to the transform the pinch just replaced.
        self.pan.pending = Vec2::ZERO;
        self.pan.gate.begin();
        debug!(
            scale = self.state.scale(),
            x = self.state.translate_x(),
            y = self.state.translate_y(),
            "scale gesture finished"
        );
    }

    // --- pan ---

    /// Starts a pan.
    pub fn on_pan_begin(&mut self) {
        self.pan.stage = GestureStage::Began;
        self.pan.pending = Vec2::ZERO;
        self.pan.gate.begin();
        debug!("pan gesture began");
    }

    /// Moves the pan by `delta` viewport units.
    ///
    /// Ignored while a pinch is in progress. Throttled deltas are accumulated
    /// and applied with the next accepted update.
    pub fn on_pan_update(&mut self, delta: Vec2, time: u64) {
        if !delta.is_finite() {
            trace!("dropping non-finite pan delta");
            return;
        }
        if self.scale.stage.is_active() {
            trace!("pan update suppressed during pinch");
            return;
        }
        if !self.pan.stage.is_active() {
            self.on_pan_begin();
        }
        self.pan.pending += delta;
        if !self.pan.gate.accept(time) {
            trace!(time, "pan update deferred");
            return;
        }
        self.pan.stage = GestureStage::Updating;
        self.commit_pan(self.config.overscroll);
    }

    /// Ends the pan, flushing deferred movement and clamping strictly.
    pub fn on_pan_end(&mut self) {
        if !self.pan.stage.is_active() {
            return;
        }
        self.finish_pan();
        debug!(
            x = self.state.translate_x(),
            y = self.state.translate_y(),
            "pan gesture ended"
        );
    }

    /// Aborts the pan. Deferred movement is discarded; any overscroll snaps
    /// back.
    pub fn on_pan_cancel(&mut self) {
        if !self.pan.stage.is_active() {
            return;
        }
        self.pan.pending = Vec2::ZERO;
        self.finish_pan();
        debug!("pan gesture cancelled");
    }

    fn finish_pan(&mut self) {
        if !self.scale.stage.is_active() {
            self.commit_pan(0.0);
        }
        self.pan.pending = Vec2::ZERO;
        self.pan.gate.end();
        self.pan.stage = GestureStage::Idle;
    }

    fn commit_pan(&mut self, tolerance: f64) {
        let candidate = self.state.translate() + self.pan.pending;
        self.pan.pending = Vec2::ZERO;
        let translate = match self.translate_range() {
            Some(range) => range.inflate(tolerance).clamp(candidate),
            None => candidate,
        };
        if self.state.set_translate(translate) {
            self.sync();
        }
    }

    // --- discrete zoom ---

    /// Zooms one wheel step around `position`.
    ///
    /// Positive deltas zoom in, negative zoom out. Ignored while a pinch is in
    /// progress.
    pub fn on_wheel(&mut self, delta: f64, position: Point) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        if self.scale.stage.is_active() {
            trace!("wheel suppressed during pinch");
            return;
        }
        let factor = if delta > 0.0 {
            1.0 + self.config.wheel_step
        } else {
            1.0 - self.config.wheel_step
        };
        let target = self.state.scale() * factor;
        if !self.zoom_about(target, position) {
            trace!(scale = self.state.scale(), "wheel step at scale limit");
        }
    }

    /// Writes the scale from outside, as a binding would.
    ///
    /// Zooms around the viewport center. A value already matching the
    /// observable scale is a no-op, which breaks feedback loops. Writes during
    /// a pinch are ignored. When the value is clamped, the effective scale is
    /// written back through [`RenderSync::scale_changed`].
    pub fn set_scale_externally(&mut self, scale: f64) {
        if !scale.is_finite() {
            trace!(scale, "ignoring non-finite external scale");
            return;
        }
        if self.scale_property.matches(scale) {
            return;
        }
        if self.scale.stage.is_active() {
            debug!(scale, "ignoring external scale write during pinch");
            return;
        }
        let revision = self.scale_property.revision();
        let center = self.viewport_center();
        self.zoom_about(scale, center);
        if self.scale_property.revision() == revision && !self.scale_property.matches(scale) {
            let effective = self.scale_property.get();
            self.render.scale_changed(effective);
        }
        debug!(
            requested = scale,
            effective = self.scale_property.get(),
            "external scale applied"
        );
    }

    /// Returns to identity, cancelling any gesture in progress.
    pub fn reset(&mut self) {
        let interval = self.config.throttle_interval_ms;
        self.scale = ScaleTracking::idle(interval);
        self.pan = PanTracking::idle(interval);
        self.item_drag.end();
        self.state = TransformState::IDENTITY;
        self.sync();
        self.scale_property.force(1.0);
        self.render.scale_changed(1.0);
        debug!("transform reset");
    }

    fn zoom_about(&mut self, target: f64, focal: Point) -> bool {
        let old = self.state;
        let new_scale = self.limits.clamp(target);
        if (new_scale - old.scale()).abs() < f64::EPSILON {
            return false;
        }
        let translate = focal_zoom(
            old.scale(),
            new_scale,
            self.anchor_relative(focal),
            old.translate(),
        );
        self.state.set_scale(new_scale, self.limits);
        self.state.set_translate(translate);
        self.commit_clamped();
        self.sync();
        self.publish_scale();
        true
    }

    // --- edit mode ---

    /// Returns `true` if items can be dragged.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Enables or disables item dragging. Disabling ends any active drag.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled {
            self.item_drag.end();
        }
    }

    /// Starts dragging `item`. Refused outside edit mode and during a pinch.
    pub fn begin_item_drag(&mut self, item: &PositionableItem) -> bool {
        if !self.edit_mode || self.scale.stage.is_active() {
            return false;
        }
        self.item_drag.start(item.id, item.position());
        true
    }

    /// Places the dragged item at its start position plus `total_offset`.
    ///
    /// Ignored during a pinch or for an item that is not being dragged.
    pub fn update_item_drag(&mut self, item: &mut PositionableItem, total_offset: Vec2) -> bool {
        if self.scale.stage.is_active() {
            trace!("item drag suppressed during pinch");
            return false;
        }
        match self.item_drag.position_for(item.id, total_offset) {
            Some(position) => {
                item.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Finishes the drag and resizes the content to the moved items.
    pub fn end_item_drag(&mut self, items: &[PositionableItem]) {
        if !self.item_drag.is_active() {
            return;
        }
        self.item_drag.end();
        self.load_content(items);
    }

    // --- helpers ---

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    fn anchor_relative(&self, pt: Point) -> Point {
        (pt - self.config.clamp.anchor.origin(self.viewport)).to_point()
    }

    fn commit_clamped(&mut self) -> bool {
        match self.translate_range() {
            Some(range) => self.state.set_translate(range.clamp(self.state.translate())),
            None => {
                trace!("geometry not ready; clamp skipped");
                false
            }
        }
    }

    fn publish_scale(&mut self) {
        let scale = self.state.scale();
        if self.scale_property.publish(scale) {
            self.render.scale_changed(scale);
        }
    }

    fn sync(&mut self) {
        self.render.apply(&self.state);
    }
}
