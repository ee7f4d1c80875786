//! Text Field Primitive - Single-line text entry.
//!
//! Editing is append/backspace only: the caret always sits at the end of the
//! text. A click inside the field focuses it; focus stays until another
//! focusable widget is clicked (or [`Context::clear_focus`] is called).
//!
//! # Capacity
//!
//! `capacity` is the maximum number of characters the field holds. Typed
//! characters beyond it are dropped.
//!
//! # Shared input
//!
//! Every focused field reads the same per-frame character queue and edit
//! keys. In the frame a click moves focus, a field declared before the
//! clicked one still holds focus when it runs, so both consume that frame's
//! input. From the next frame on only the newly focused field does.

use tracing::trace;

use super::label::BASELINE_OFFSET;
use crate::context::Context;
use crate::renderer::Renderer;
use crate::state::EditKeys;
use crate::types::{Color, Rect, Vec2};

/// Horizontal inset of the text area on each side.
const TEXT_INSET: f32 = 5.0;
const CARET_WIDTH: f32 = 2.0;
const CARET_INSET: f32 = 4.0;

const BACKGROUND: Color = Color::rgb(0.15, 0.15, 0.15);
const FOCUSED_BORDER: Color = Color::rgb(0.3, 0.3, 0.8);

/// Horizontal shift that keeps the tail of over-long text visible.
fn tail_scroll(text_width: f32, visible_width: f32) -> f32 {
    if text_width > visible_width {
        visible_width - text_width
    } else {
        0.0
    }
}

/// Apply this frame's typed input to `buffer`. Returns true on any change.
fn apply_edits(buffer: &mut String, capacity: usize, edit_keys: EditKeys, typed: &str) -> bool {
    let mut changed = false;
    if edit_keys.contains(EditKeys::BACKSPACE) && buffer.pop().is_some() {
        changed = true;
    }
    let mut len = buffer.chars().count();
    for ch in typed.chars() {
        if len >= capacity {
            trace!(capacity, "text field full, dropping input");
            break;
        }
        buffer.push(ch);
        len += 1;
        changed = true;
    }
    changed
}

/// Draw a text field editing `buffer`. Returns true when the content changed.
pub fn text_field<R: Renderer>(
    ctx: &mut Context<R>,
    id: &str,
    bounds: Rect,
    buffer: &mut String,
    capacity: usize,
) -> bool {
    let widget = ctx.declare(id);

    let hovered = ctx.is_hovered(bounds);
    if hovered {
        ctx.interaction_mut().set_hot(widget);
    }
    if ctx.is_clicked(bounds, 0) && !ctx.interaction().is_focused(widget) {
        ctx.interaction_mut().focus(widget);
    }

    let focused = ctx.interaction().is_focused(widget);
    let changed = focused
        && apply_edits(buffer, capacity, ctx.input().edit_keys(), ctx.input().chars());

    let border = if focused { FOCUSED_BORDER } else { Color::BLACK };
    let background = if focused {
        BACKGROUND.tint(0.05, 0.05, 0.15)
    } else if hovered {
        BACKGROUND.brighten(0.05)
    } else {
        BACKGROUND
    };
    let show_caret = focused && ctx.caret_visible();

    let renderer = ctx.renderer_mut();
    renderer.draw_rect(bounds.expand(1.0), border);
    renderer.draw_rect(bounds, background);

    let visible = Rect::new(
        bounds.x() + TEXT_INSET,
        bounds.y(),
        bounds.width() - TEXT_INSET * 2.0,
        bounds.height(),
    );
    let text_width = renderer.measure_text(buffer);
    let text_x = visible.x() + tail_scroll(text_width, visible.width());

    renderer.push_clip(visible);
    renderer.draw_text(
        buffer,
        Vec2::new(text_x, bounds.y() + bounds.height() / 2.0 + BASELINE_OFFSET),
        Color::WHITE,
    );
    if show_caret {
        renderer.draw_rect(
            Rect::new(
                text_x + text_width,
                bounds.y() + CARET_INSET,
                CARET_WIDTH,
                bounds.height() - CARET_INSET * 2.0,
            ),
            Color::WHITE,
        );
    }
    renderer.pop_clip();

    changed
}
