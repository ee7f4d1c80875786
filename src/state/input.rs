//! Input Module - Per-frame pointer and keyboard snapshot
//!
//! Raw input is fed in by the platform layer (or by [`super::events`] for
//! terminals) before `begin_frame`, read by widgets while the frame is being
//! declared, and partially reset at `end_frame`.
//!
//! # Double buffering
//!
//! Button state is kept twice: `buttons` for the frame being declared and
//! `prev_buttons` as it stood at the previous `end_frame`. A click edge is
//! `buttons & !prev_buttons`, which is why the copy happens at end of frame
//! and never at the start.

use tracing::trace;

use crate::types::Vec2;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Capacity of the per-frame character queue.
pub const CHAR_QUEUE_CAPACITY: usize = 32;

/// Editing key codes understood by [`InputState::notify_key`].
///
/// The numbering follows GLFW, which is what most desktop platform layers
/// hand out.
pub mod keys {
    pub const BACKSPACE: i32 = 259;
    pub const DELETE: i32 = 261;
    pub const RIGHT: i32 = 262;
    pub const LEFT: i32 = 263;
}

// =============================================================================
// FLAGS
// =============================================================================

bitflags::bitflags! {
    /// Pointer button set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const NONE = 0;
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

impl MouseButtons {
    /// Flag for a button index (0 = primary, 1 = secondary, 2 = middle).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::PRIMARY),
            1 => Some(Self::SECONDARY),
            2 => Some(Self::MIDDLE),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Momentary editing keys pressed during the current frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EditKeys: u8 {
        const NONE = 0;
        const BACKSPACE = 1 << 0;
        const DELETE = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl EditKeys {
    /// Map a raw key code to its edit flag. Non-edit keys map to `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            keys::BACKSPACE => Some(Self::BACKSPACE),
            keys::DELETE => Some(Self::DELETE),
            keys::LEFT => Some(Self::LEFT),
            keys::RIGHT => Some(Self::RIGHT),
            _ => None,
        }
    }
}

// =============================================================================
// INPUT STATE
// =============================================================================

/// Pointer and keyboard snapshot for the current and previous frame.
#[derive(Debug, Clone)]
pub struct InputState {
    pointer: Vec2,
    buttons: MouseButtons,
    prev_buttons: MouseButtons,
    scroll: f32,
    chars: [u8; CHAR_QUEUE_CAPACITY],
    char_count: usize,
    edit_keys: EditKeys,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            buttons: MouseButtons::NONE,
            prev_buttons: MouseButtons::NONE,
            scroll: 0.0,
            chars: [0; CHAR_QUEUE_CAPACITY],
            char_count: 0,
            edit_keys: EditKeys::NONE,
        }
    }

    // -------------------------------------------------------------------------
    // Feed
    // -------------------------------------------------------------------------

    pub fn set_pointer_position(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Set a button's held state. Indices outside `0..3` are ignored.
    pub fn set_button(&mut self, index: usize, pressed: bool) {
        if let Some(flag) = MouseButtons::from_index(index) {
            self.buttons.set(flag, pressed);
        }
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll = offset;
    }

    /// Queue a typed character.
    ///
    /// Only printable ASCII (32..128) is accepted; anything past the queue
    /// capacity is dropped.
    pub fn push_char(&mut self, codepoint: u32) {
        if !(32..128).contains(&codepoint) {
            return;
        }
        if self.char_count >= CHAR_QUEUE_CAPACITY {
            trace!(codepoint, "character queue full, dropping input");
            return;
        }
        self.chars[self.char_count] = codepoint as u8;
        self.char_count += 1;
    }

    /// Record a key transition. Only presses of editing keys are kept.
    pub fn notify_key(&mut self, code: i32, pressed: bool) {
        if !pressed {
            return;
        }
        if let Some(flag) = EditKeys::from_code(code) {
            self.edit_keys |= flag;
        }
    }

    // -------------------------------------------------------------------------
    // Frame lifecycle
    // -------------------------------------------------------------------------

    /// Start-of-frame reset: scroll is frame-scoped.
    pub(crate) fn begin_frame(&mut self) {
        self.scroll = 0.0;
    }

    /// End-of-frame commit: buttons become "previous", queues are drained.
    pub(crate) fn end_frame(&mut self) {
        self.prev_buttons = self.buttons;
        self.char_count = 0;
        self.edit_keys = EditKeys::NONE;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    pub fn prev_buttons(&self) -> MouseButtons {
        self.prev_buttons
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn edit_keys(&self) -> EditKeys {
        self.edit_keys
    }

    /// Is the button at `index` held this frame.
    pub fn is_down(&self, index: usize) -> bool {
        MouseButtons::from_index(index).is_some_and(|flag| self.buttons.contains(flag))
    }

    /// Is any button held this frame.
    pub fn any_down(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Did the button at `index` go from up to down since the last `end_frame`.
    pub fn pressed_edge(&self, index: usize) -> bool {
        MouseButtons::from_index(index).is_some_and(|flag| {
            self.buttons.contains(flag) && !self.prev_buttons.contains(flag)
        })
    }

    /// Characters typed this frame, in arrival order.
    pub fn chars(&self) -> &str {
        // Only printable ASCII is ever queued.
        std::str::from_utf8(&self.chars[..self.char_count]).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================
