//! Button Primitive - Clickable box with a centred label.

use tracing::trace;

use super::label::label;
use crate::context::Context;
use crate::renderer::Renderer;
use crate::types::{Color, Rect, Vec2};

/// Space around the label when a button sizes itself.
const AUTO_PADDING: f32 = 10.0;

const BACKGROUND: Color = Color::rgb(0.2, 0.2, 0.2);
const HOVER_BRIGHTEN: f32 = 0.1;

/// Draw a button and report whether it was clicked this frame.
///
/// Zero-sized `bounds` are replaced by a size fitted to the label, keeping
/// the position. The label doubles as the widget id.
pub fn button<R: Renderer>(ctx: &mut Context<R>, text: &str, bounds: Rect) -> bool {
    let id = ctx.declare(text);

    let mut bounds = bounds;
    if bounds.is_zero_sized() {
        let renderer = ctx.renderer();
        bounds.size = Vec2::new(
            renderer.measure_text(text) + AUTO_PADDING * 2.0,
            renderer.font_size() + AUTO_PADDING * 2.0,
        );
    }

    let hovered = ctx.is_hovered(bounds);
    let clicked = ctx.is_clicked(bounds, 0);
    if hovered {
        ctx.interaction_mut().set_hot(id);
    }
    if clicked {
        trace!(label = text, "button clicked");
    }

    let background = if hovered {
        BACKGROUND.brighten(HOVER_BRIGHTEN)
    } else {
        BACKGROUND
    };
    let renderer = ctx.renderer_mut();
    renderer.draw_rect(bounds.expand(1.0), Color::BLACK);
    renderer.draw_rect(bounds, background);
    label(ctx, text, bounds, Color::WHITE);

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::state::WidgetId;

    fn setup() -> Context<DrawList> {
        Context::new(DrawList::new(), 800.0, 600.0)
    }

    fn frame(ctx: &mut Context<DrawList>, bounds: Rect) -> bool {
        ctx.renderer_mut().clear();
        ctx.begin_frame(0.016);
        let clicked = button(ctx, "OK", bounds);
        ctx.end_frame();
        clicked
    }

    #[test]
    fn test_button_click_edge_fires_once() {
        let mut ctx = setup();
        let bounds = Rect::new(0.0, 0.0, 50.0, 20.0);
        ctx.set_pointer_position(10.0, 10.0);

        assert!(!frame(&mut ctx, bounds));
        ctx.set_button(0, true);
        assert!(frame(&mut ctx, bounds));
        assert!(!frame(&mut ctx, bounds));
        ctx.set_button(0, false);
        assert!(!frame(&mut ctx, bounds));
    }

    #[test]
    fn test_button_press_outside_does_not_click() {
        let mut ctx = setup();
        ctx.set_pointer_position(100.0, 100.0);
        ctx.set_button(0, true);
        assert!(!frame(&mut ctx, Rect::new(0.0, 0.0, 50.0, 20.0)));
    }

    #[test]
    fn test_button_hover_sets_hot_and_brightens() {
        let mut ctx = setup();
        ctx.set_pointer_position(10.0, 10.0);
        ctx.begin_frame(0.016);
        button(&mut ctx, "OK", Rect::new(0.0, 0.0, 50.0, 20.0));

        assert!(ctx.interaction().is_hot(WidgetId::from_label("OK")));
        let colors: Vec<Color> = ctx.renderer().rects().map(|(_, c)| *c).collect();
        assert_eq!(colors, vec![Color::BLACK, BACKGROUND.brighten(HOVER_BRIGHTEN)]);
    }

    #[test]
    fn test_overlapping_buttons_last_declared_is_hot() {
        let mut ctx = setup();
        let bounds = Rect::new(0.0, 0.0, 50.0, 20.0);
        ctx.set_pointer_position(10.0, 10.0);
        ctx.begin_frame(0.016);
        button(&mut ctx, "first", bounds);
        button(&mut ctx, "second", bounds);
        ctx.end_frame();

        assert_eq!(ctx.interaction().hot(), Some(WidgetId::from_label("second")));
    }

    #[test]
    fn test_button_auto_size() {
        let mut ctx = setup();
        ctx.begin_frame(0.016);
        button(&mut ctx, "Go", Rect::new(5.0, 5.0, 0.0, 0.0));

        // 2 glyphs × 8px + 20, font 16 + 20
        let (rect, _) = ctx.renderer().rects().nth(1).unwrap();
        assert_eq!(*rect, Rect::new(5.0, 5.0, 36.0, 36.0));
    }

    #[test]
    fn test_button_draws_border_background_label() {
        let mut ctx = setup();
        ctx.begin_frame(0.016);
        button(&mut ctx, "OK", Rect::new(10.0, 10.0, 40.0, 20.0));

        let rects: Vec<Rect> = ctx.renderer().rects().map(|(r, _)| *r).collect();
        assert_eq!(rects[0], Rect::new(9.0, 9.0, 42.0, 22.0));
        assert_eq!(rects[1], Rect::new(10.0, 10.0, 40.0, 20.0));
        let texts: Vec<_> = ctx.renderer().texts().collect();
        assert_eq!(texts, vec![("OK", Vec2::new(22.0, 24.0))]);
    }
}
