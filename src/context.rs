//! The UI context.
//!
//! Everything that survives from one frame to the next lives here: input
//! snapshots, the interaction registry, the layout stack and the region
//! table, plus the renderer widgets draw through. The caller owns the
//! context and passes it by `&mut` to every widget call; there is no global
//! state.
//!
//! # Frame protocol
//!
//! ```text
//! feed input → begin_frame(dt) → declare panels / regions / widgets → end_frame()
//! ```

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::{
    LayoutStack, RegionConfig, RegionMetrics, RegionTable, RegionWidthMode,
};
use crate::renderer::Renderer;
use crate::state::{InputState, Interaction, IdTracker, WidgetId};
use crate::types::{Rect, Vec2};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Context-wide settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextConfig {
    /// Size of the drawable area; auto-width regions use its width
    pub viewport: Vec2,
    /// Caret blink rate - 2 = 500ms on/off cycle (0 = always visible)
    pub caret_blink_fps: u8,
    /// How regions compute row width
    pub region_width_mode: RegionWidthMode,
    /// Warn when two widgets share an id within a frame
    pub detect_id_conflicts: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(800.0, 600.0),
            caret_blink_fps: 2,
            region_width_mode: RegionWidthMode::Legacy,
            detect_id_conflicts: cfg!(debug_assertions),
        }
    }
}

/// Caret blink phase at `time` seconds: visible during even intervals of
/// `1 / fps` seconds.
pub fn caret_visible(time: f32, fps: u8) -> bool {
    if fps == 0 {
        return true;
    }
    (time * fps as f32).floor() as i64 % 2 == 0
}

// =============================================================================
// CONTEXT
// =============================================================================

pub struct Context<R: Renderer> {
    renderer: R,
    config: ContextConfig,
    input: InputState,
    interaction: Interaction,
    layout: LayoutStack,
    regions: RegionTable,
    ids: IdTracker,
    time: f32,
    delta_time: f32,
    frame: u64,
}

impl<R: Renderer> Context<R> {
    /// Create a context for a `width` × `height` viewport.
    pub fn new(renderer: R, width: f32, height: f32) -> Self {
        Self::with_config(
            renderer,
            ContextConfig {
                viewport: Vec2::new(width, height),
                ..Default::default()
            },
        )
    }

    pub fn with_config(renderer: R, config: ContextConfig) -> Self {
        Self {
            renderer,
            input: InputState::new(),
            interaction: Interaction::new(),
            layout: LayoutStack::new(),
            regions: RegionTable::new(),
            ids: IdTracker::new(config.detect_id_conflicts),
            time: 0.0,
            delta_time: 0.0,
            frame: 0,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport = Vec2::new(width, height);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub(crate) fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }

    pub fn layout(&self) -> &LayoutStack {
        &self.layout
    }

    /// Seconds accumulated over all `begin_frame` calls.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Number of aliasing widget declarations seen so far (0 when detection is off).
    pub fn id_conflicts(&self) -> usize {
        self.ids.conflicts()
    }

    /// Drop keyboard focus.
    pub fn clear_focus(&mut self) {
        self.interaction.blur();
    }

    // -------------------------------------------------------------------------
    // Input feed
    // -------------------------------------------------------------------------

    pub fn set_pointer_position(&mut self, x: f32, y: f32) {
        self.input.set_pointer_position(x, y);
    }

    pub fn set_button(&mut self, index: usize, pressed: bool) {
        self.input.set_button(index, pressed);
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.input.set_scroll(offset);
    }

    pub fn push_char(&mut self, codepoint: u32) {
        self.input.push_char(codepoint);
    }

    pub fn notify_key(&mut self, code: i32, pressed: bool) {
        self.input.notify_key(code, pressed);
    }

    // -------------------------------------------------------------------------
    // Frame lifecycle
    // -------------------------------------------------------------------------

    /// Start a frame: advance the clock, reset scroll, and drop the hot
    /// widget unless a button is held (so a drag keeps its target).
    pub fn begin_frame(&mut self, delta_time: f32) {
        self.frame += 1;
        self.delta_time = delta_time;
        self.time += delta_time;
        self.input.begin_frame();
        if !self.input.any_down() {
            self.interaction.clear_hot();
        }
        self.ids.reset_frame();
        trace!(frame = self.frame, time = self.time, "begin frame");
    }

    /// Finish a frame: commit buttons as "previous" and drain typed input.
    pub fn end_frame(&mut self) {
        if !self.layout.is_empty() {
            debug!(depth = self.layout.depth(), "frame ended with layout offsets still pushed");
        }
        let open = self.regions.open_count();
        if open > 0 {
            debug!(open, "frame ended with regions still open");
        }
        self.input.end_frame();
        trace!(frame = self.frame, "end frame");
    }

    // -------------------------------------------------------------------------
    // Pointer queries
    // -------------------------------------------------------------------------

    pub fn pointer_position(&self) -> Vec2 {
        self.input.pointer()
    }

    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.input.pointer())
    }

    /// Click edge on `button` inside `rect` this frame.
    pub fn is_clicked(&self, rect: Rect, button: usize) -> bool {
        self.is_hovered(rect) && self.input.pressed_edge(button)
    }

    // -------------------------------------------------------------------------
    // Layout stack
    // -------------------------------------------------------------------------

    pub fn layout_push(&mut self, offset: Vec2) {
        self.layout.push(offset);
    }

    pub fn layout_pop(&mut self) {
        self.layout.pop();
    }

    pub fn layout_resolve(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        self.layout.resolve(x, y, w, h)
    }

    // -------------------------------------------------------------------------
    // Named regions
    // -------------------------------------------------------------------------

    /// Open a column region. `bounds` is relative to the current layout
    /// context; inside the region, `layout_resolve` is relative to its
    /// padded origin.
    pub fn region_begin(&mut self, name: &str, bounds: Rect, config: Option<RegionConfig>) {
        let resolved = bounds.translate(self.layout.top());
        let Some(opened) = self.regions.begin(name, resolved, bounds.pos, config) else {
            return;
        };
        if !self.layout.push(opened.origin) {
            // Keep stack and table balanced: a region we cannot position is not opened.
            self.regions.end(name);
            return;
        }
        if let Some(clip) = opened.clip {
            self.renderer.push_clip(clip);
        }
    }

    /// Absolute rectangle for the next row of `widget_height` in `name`.
    pub fn region_next(&mut self, name: &str, widget_height: f32) -> Rect {
        self.regions.next(
            name,
            widget_height,
            self.config.viewport.x,
            self.config.region_width_mode,
        )
    }

    pub fn region_end(&mut self, name: &str) {
        if let Some(clipped) = self.regions.end(name) {
            self.layout.pop();
            if clipped {
                self.renderer.pop_clip();
            }
        }
    }

    pub fn region_metrics(&self, name: &str) -> Option<RegionMetrics> {
        self.regions.metrics(name)
    }

    // -------------------------------------------------------------------------
    // Widget plumbing
    // -------------------------------------------------------------------------

    /// Resolve a widget's id from its label, recording it for conflict detection.
    pub(crate) fn declare(&mut self, label: &str) -> WidgetId {
        let id = WidgetId::from_label(label);
        self.ids.record(id, label);
        id
    }

    /// Caret blink phase at the current context time.
    pub fn caret_visible(&self) -> bool {
        caret_visible(self.time, self.config.caret_blink_fps)
    }
}

// =============================================================================
// TESTS
// =============================================================================
