//! Label Primitive - Centred, non-interactive text.

use crate::context::Context;
use crate::renderer::Renderer;
use crate::types::{Color, Rect, Vec2};

/// Distance from the vertical centre down to the text baseline.
pub(crate) const BASELINE_OFFSET: f32 = 4.0;

/// Baseline origin that centres `text_width` horizontally in `bounds`.
fn centred_origin(bounds: Rect, text_width: f32) -> Vec2 {
    Vec2::new(
        bounds.x() + (bounds.width() - text_width) / 2.0,
        bounds.y() + bounds.height() / 2.0 + BASELINE_OFFSET,
    )
}

/// Draw `text` centred horizontally in `bounds`.
pub fn label<R: Renderer>(ctx: &mut Context<R>, text: &str, bounds: Rect, color: Color) {
    let renderer = ctx.renderer_mut();
    let origin = centred_origin(bounds, renderer.measure_text(text));
    renderer.draw_text(text, origin, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    #[test]
    fn test_label_is_centred_on_baseline() {
        let mut ctx = Context::new(DrawList::new(), 800.0, 600.0);
        // "abcd" is 32px wide with the default glyph advance
        label(&mut ctx, "abcd", Rect::new(10.0, 20.0, 100.0, 30.0), Color::WHITE);

        let texts: Vec<_> = ctx.renderer().texts().collect();
        assert_eq!(texts, vec![("abcd", Vec2::new(44.0, 39.0))]);
    }

    #[test]
    fn test_label_wider_than_bounds_overhangs_left() {
        let origin = centred_origin(Rect::new(0.0, 0.0, 10.0, 10.0), 30.0);
        assert_eq!(origin.x, -10.0);
    }
}
