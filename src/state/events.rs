//! Terminal event bridge.
//!
//! Turns crossterm events into context input feed calls. Terminal cells are
//! mapped to the pixel at their center using the same [`TerminalConfig`] the
//! [`TerminalRenderer`](crate::renderer::TerminalRenderer) rasterizes with,
//! so hit-testing and drawing agree.
//!
//! # Example
//!
//! ```ignore
//! use spark_imgui::state::events::{apply_event, poll_event, EventOutcome};
//! use std::time::Duration;
//!
//! while let Some(event) = poll_event(Duration::from_millis(16))? {
//!     if apply_event(&mut ctx, &event, &config) == EventOutcome::Button {
//!         break; // run a frame so the press edge is seen
//!     }
//! }
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{
    poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use tracing::trace;

use super::input::keys;
use crate::context::Context;
use crate::renderer::{Renderer, TerminalConfig};
use crate::types::Vec2;

/// What applying an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Pointer, scroll or keyboard input was fed
    Input,
    /// A button went down or up; run a frame before feeding more events,
    /// otherwise a press and release in the same batch cancel out
    Button,
    /// The terminal was resized to (cols, rows)
    Resized(u16, u16),
    /// Nothing the context consumes
    Ignored,
}

/// Pixel position of a terminal cell's center.
pub fn cell_to_pixel(col: u16, row: u16, config: &TerminalConfig) -> Vec2 {
    Vec2::new(
        (col as f32 + 0.5) * config.cell_width,
        (row as f32 + 0.5) * config.cell_height,
    )
}

fn button_index(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

fn edit_key_code(code: KeyCode) -> Option<i32> {
    match code {
        KeyCode::Backspace => Some(keys::BACKSPACE),
        KeyCode::Delete => Some(keys::DELETE),
        KeyCode::Left => Some(keys::LEFT),
        KeyCode::Right => Some(keys::RIGHT),
        _ => None,
    }
}

/// Feed a mouse event into the context.
pub fn apply_mouse_event<R: Renderer>(
    ctx: &mut Context<R>,
    event: &MouseEvent,
    config: &TerminalConfig,
) -> EventOutcome {
    let pos = cell_to_pixel(event.column, event.row, config);
    match event.kind {
        MouseEventKind::Down(button) => {
            ctx.set_pointer_position(pos.x, pos.y);
            ctx.set_button(button_index(button), true);
            EventOutcome::Button
        }
        MouseEventKind::Up(button) => {
            ctx.set_pointer_position(pos.x, pos.y);
            ctx.set_button(button_index(button), false);
            EventOutcome::Button
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            ctx.set_pointer_position(pos.x, pos.y);
            EventOutcome::Input
        }
        MouseEventKind::ScrollUp => {
            ctx.set_scroll(1.0);
            EventOutcome::Input
        }
        MouseEventKind::ScrollDown => {
            ctx.set_scroll(-1.0);
            EventOutcome::Input
        }
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => EventOutcome::Ignored,
    }
}

/// Feed a key event into the context.
///
/// Printable characters without Ctrl/Alt go to the character queue; the
/// editing keys are forwarded as key codes. Everything else is left to the
/// application.
pub fn apply_key_event<R: Renderer>(ctx: &mut Context<R>, event: &KeyEvent) -> EventOutcome {
    let pressed = matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat);

    if let Some(code) = edit_key_code(event.code) {
        ctx.notify_key(code, pressed);
        return EventOutcome::Input;
    }

    match event.code {
        KeyCode::Char(c)
            if pressed && !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ctx.push_char(c as u32);
            EventOutcome::Input
        }
        _ => EventOutcome::Ignored,
    }
}

/// Feed any terminal event into the context.
pub fn apply_event<R: Renderer>(
    ctx: &mut Context<R>,
    event: &Event,
    config: &TerminalConfig,
) -> EventOutcome {
    let outcome = match event {
        Event::Mouse(mouse) => apply_mouse_event(ctx, mouse, config),
        Event::Key(key) => apply_key_event(ctx, key),
        Event::Resize(cols, rows) => {
            ctx.set_viewport(*cols as f32 * config.cell_width, *rows as f32 * config.cell_height);
            EventOutcome::Resized(*cols, *rows)
        }
        _ => EventOutcome::Ignored,
    };
    trace!(?outcome, "terminal event applied");
    outcome
}

/// Poll for an event with timeout.
/// Returns None if no event arrived in time.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> io::Result<Event> {
    read()
}

// =============================================================================
// TESTS
// =============================================================================
