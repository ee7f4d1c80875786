//! Slider Primitive - Horizontal drag control over a float range.
//!
//! Grabbing the slider makes it the active widget, so the drag continues
//! when the pointer leaves the track and no other slider can steal it until
//! the primary button is released.

use tracing::trace;

use crate::context::Context;
use crate::renderer::Renderer;
use crate::types::{Color, Rect};

const TRACK: Color = Color::rgb(0.3, 0.3, 0.3);
const THUMB: Color = Color::rgb(0.5, 0.5, 0.8);
const THUMB_WIDTH: f32 = 10.0;

/// Fraction of the track at pointer `x`, clamped to `0..=1`.
fn track_fraction(bounds: Rect, x: f32) -> f32 {
    if bounds.width() <= 0.0 {
        return 0.0;
    }
    ((x - bounds.x()) / bounds.width()).clamp(0.0, 1.0)
}

/// Draw a slider for `value` in `min..=max`. Returns true when the value
/// was written this frame.
pub fn slider<R: Renderer>(
    ctx: &mut Context<R>,
    id: &str,
    bounds: Rect,
    value: &mut f32,
    min: f32,
    max: f32,
) -> bool {
    let widget = ctx.declare(id);
    let mut changed = false;

    if ctx.is_hovered(bounds) {
        ctx.interaction_mut().set_hot(widget);
    }

    let grabbing = ctx.interaction().is_active(widget)
        || (ctx.interaction().is_hot(widget) && ctx.is_clicked(bounds, 0));
    if grabbing && ctx.interaction_mut().try_activate(widget) {
        let t = track_fraction(bounds, ctx.pointer_position().x);
        let new_value = min + t * (max - min);
        if new_value != *value {
            *value = new_value;
            changed = true;
        }
    }

    if !ctx.input().is_down(0) && ctx.interaction().active().is_some() {
        trace!(id, "primary button up, releasing active widget");
        ctx.interaction_mut().release_active();
    }

    let normalized = if max != min {
        (*value - min) / (max - min)
    } else {
        0.0
    };
    let thumb = Rect::new(
        bounds.x() + normalized * bounds.width() - THUMB_WIDTH / 2.0,
        bounds.y(),
        THUMB_WIDTH,
        bounds.height(),
    );

    let renderer = ctx.renderer_mut();
    renderer.draw_rect(bounds, TRACK);
    renderer.draw_rect(thumb, THUMB);

    changed
}
