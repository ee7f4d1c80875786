//! Checkbox Primitive - Boolean toggle with a side label.

use tracing::trace;

use super::label::label;
use crate::context::Context;
use crate::renderer::Renderer;
use crate::types::{Color, Rect, Vec2};

const BOX_MIN: f32 = 16.0;
const BOX_MAX: f32 = 24.0;
const LABEL_GAP: f32 = 5.0;

const BACKGROUND: Color = Color::rgb(0.2, 0.2, 0.2);
const CHECK: Color = Color::rgb(0.3, 0.7, 0.3);

/// Square box at the left edge of `bounds`, vertically centred.
fn box_rect(bounds: Rect) -> Rect {
    let side = (bounds.height() * 0.8).clamp(BOX_MIN, BOX_MAX);
    Rect {
        pos: Vec2::new(bounds.x(), bounds.y() + (bounds.height() - side) / 2.0),
        size: Vec2::new(side, side),
    }
}

/// Draw a checkbox and flip `checked` on click. Returns true when toggled.
pub fn checkbox<R: Renderer>(
    ctx: &mut Context<R>,
    text: &str,
    bounds: Rect,
    checked: &mut bool,
) -> bool {
    let id = ctx.declare(text);

    let hovered = ctx.is_hovered(bounds);
    let clicked = ctx.is_clicked(bounds, 0);
    if hovered {
        ctx.interaction_mut().set_hot(id);
    }
    if clicked {
        *checked = !*checked;
        trace!(label = text, checked = *checked, "checkbox toggled");
    }

    let check_box = box_rect(bounds);
    let side = check_box.width();
    let background = if hovered { BACKGROUND.brighten(0.1) } else { BACKGROUND };

    let renderer = ctx.renderer_mut();
    renderer.draw_rect(check_box.expand(1.0), Color::BLACK);
    renderer.draw_rect(check_box, background);
    if *checked {
        renderer.draw_rect(check_box.expand(-side * 0.2), CHECK);
    }

    let label_bounds = Rect::new(
        bounds.x() + side + LABEL_GAP,
        bounds.y(),
        bounds.width() - side - LABEL_GAP,
        bounds.height(),
    );
    label(ctx, text, label_bounds, Color::WHITE);

    clicked
}
