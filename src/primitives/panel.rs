//! Panel Primitive - Background fill that opens a layout context.
//!
//! `panel_begin` / `panel_end` must pair up; widgets declared in between
//! resolve their rectangles relative to the panel's top-left corner.

use tracing::trace;

use crate::context::Context;
use crate::renderer::Renderer;
use crate::types::{Color, Rect};

/// Fill `bounds` (relative to the current layout context) with `color` and
/// make its position the origin for subsequent `layout_resolve` calls.
pub fn panel_begin<R: Renderer>(ctx: &mut Context<R>, id: &str, bounds: Rect, color: Color) {
    let resolved = ctx.layout_resolve(bounds.x(), bounds.y(), bounds.width(), bounds.height());
    trace!(id, x = resolved.x(), y = resolved.y(), "panel begin");
    ctx.renderer_mut().draw_rect(resolved, color);
    ctx.layout_push(bounds.pos);
}

/// Close the innermost panel.
pub fn panel_end<R: Renderer>(ctx: &mut Context<R>) {
    ctx.layout_pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::button;
    use crate::renderer::DrawList;
    use crate::types::Vec2;

    fn setup() -> Context<DrawList> {
        Context::new(DrawList::new(), 800.0, 600.0)
    }

    #[test]
    fn test_panel_offsets_children() {
        let mut ctx = setup();
        let bg = Color::rgb(0.1, 0.1, 0.1);

        ctx.begin_frame(0.016);
        panel_begin(&mut ctx, "main", Rect::new(10.0, 10.0, 200.0, 200.0), bg);
        let child = ctx.layout_resolve(5.0, 5.0, 50.0, 20.0);
        button(&mut ctx, "child", child);
        panel_end(&mut ctx);
        ctx.end_frame();

        assert_eq!(child.pos, Vec2::new(15.0, 15.0));
        let (first, color) = ctx.renderer().rects().next().unwrap();
        assert_eq!((*first, *color), (Rect::new(10.0, 10.0, 200.0, 200.0), bg));
        assert!(ctx.layout().is_empty());
    }

    #[test]
    fn test_nested_panels_compose() {
        let mut ctx = setup();
        panel_begin(&mut ctx, "outer", Rect::new(100.0, 100.0, 300.0, 300.0), Color::BLACK);
        panel_begin(&mut ctx, "inner", Rect::new(10.0, 10.0, 50.0, 50.0), Color::WHITE);

        let (inner, _) = ctx.renderer().rects().nth(1).unwrap();
        assert_eq!(*inner, Rect::new(110.0, 110.0, 50.0, 50.0));
        assert_eq!(ctx.layout_resolve(1.0, 1.0, 0.0, 0.0).pos, Vec2::new(111.0, 111.0));

        panel_end(&mut ctx);
        assert_eq!(ctx.layout_resolve(1.0, 1.0, 0.0, 0.0).pos, Vec2::new(101.0, 101.0));
        panel_end(&mut ctx);
        assert!(ctx.layout().is_empty());
    }
}
