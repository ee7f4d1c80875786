//! Property tests for the frame, interaction, layout and region invariants.

use proptest::prelude::*;
use spark_imgui::state::Interaction;
use spark_imgui::*;

fn context() -> Context<DrawList> {
    Context::new(DrawList::new(), 800.0, 600.0)
}

/// Integer-valued coordinates keep float comparisons exact.
fn coord() -> impl Strategy<Value = f32> {
    (-500i16..500).prop_map(f32::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_click_edge_requires_inside_press_and_prior_release(
        presses in prop::collection::vec(any::<bool>(), 1..20),
        px in coord(),
        py in coord(),
    ) {
        let mut ctx = context();
        let area = Rect::new(-100.0, -100.0, 200.0, 200.0);
        ctx.set_pointer_position(px, py);

        let mut previous = false;
        for pressed in presses {
            ctx.set_button(0, pressed);
            ctx.begin_frame(0.016);
            let expected = area.contains(Vec2::new(px, py)) && pressed && !previous;
            prop_assert_eq!(ctx.is_clicked(area, 0), expected);
            ctx.end_frame();
            previous = pressed;
        }
    }

    #[test]
    fn prop_active_is_exclusive(
        ops in prop::collection::vec((0u8..4, any::<bool>()), 1..50),
    ) {
        let ids: Vec<WidgetId> = (0..4).map(|i| WidgetId::from_label(&format!("w{i}"))).collect();
        let mut interaction = Interaction::new();

        for (who, claim) in ops {
            let id = ids[who as usize];
            if claim {
                let holder = interaction.active();
                let granted = interaction.try_activate(id);
                prop_assert_eq!(granted, holder.is_none() || holder == Some(id));
                if !granted {
                    prop_assert_eq!(interaction.active(), holder);
                }
            } else {
                interaction.release_active();
                prop_assert_eq!(interaction.active(), None);
            }
        }
    }

    #[test]
    fn prop_layout_pushes_compose_and_pops_restore(
        a in (coord(), coord()),
        b in (coord(), coord()),
        x in coord(),
        y in coord(),
    ) {
        let mut ctx = context();
        let before = ctx.layout_resolve(x, y, 10.0, 10.0);

        ctx.layout_push(Vec2::new(a.0, a.1));
        let after_a = ctx.layout_resolve(x, y, 10.0, 10.0);
        ctx.layout_push(Vec2::new(b.0, b.1));
        let resolved = ctx.layout_resolve(x, y, 10.0, 10.0);

        prop_assert_eq!(resolved.pos, Vec2::new(x + (a.0 + b.0), y + (a.1 + b.1)));
        prop_assert_eq!(resolved.size, Vec2::new(10.0, 10.0));

        ctx.layout_pop();
        prop_assert_eq!(ctx.layout_resolve(x, y, 10.0, 10.0), after_a);
        ctx.layout_pop();
        prop_assert_eq!(ctx.layout_resolve(x, y, 10.0, 10.0), before);
    }

    #[test]
    fn prop_region_rows_accumulate(
        heights in prop::collection::vec((1u8..60).prop_map(f32::from), 1..12),
        spacing in (0u8..10).prop_map(f32::from),
        origin in (coord(), coord()),
    ) {
        let mut ctx = context();
        let bounds = Rect::new(origin.0, origin.1, 300.0, 600.0);
        let config = RegionConfig { spacing, ..Default::default() };

        ctx.region_begin("col", bounds, Some(config));
        let mut expected_y = origin.1;
        for &h in &heights {
            let row = ctx.region_next("col", h);
            prop_assert_eq!(row.pos, Vec2::new(origin.0, expected_y));
            prop_assert_eq!(row.height(), h);
            expected_y += h + spacing;
        }
        ctx.region_end("col");

        let metrics = ctx.region_metrics("col").unwrap();
        let total: f32 = heights.iter().sum::<f32>() + spacing * (heights.len() - 1) as f32;
        prop_assert_eq!(metrics.widget_count, heights.len());
        prop_assert_eq!(metrics.total_height, total);
        prop_assert!(ctx.layout().is_empty());
    }

    #[test]
    fn prop_text_field_never_exceeds_capacity(
        initial in "[a-z]{0,12}",
        typed in "[a-z0-9 ]{0,24}",
        capacity in 0usize..16,
    ) {
        let mut ctx = context();
        let field = Rect::new(0.0, 0.0, 200.0, 30.0);
        let mut buffer: String = initial.chars().take(capacity).collect();
        let start_len = buffer.len();

        // Focus the field
        ctx.set_pointer_position(10.0, 10.0);
        ctx.set_button(0, true);
        ctx.begin_frame(0.016);
        text_field(&mut ctx, "f", field, &mut buffer, capacity);
        ctx.end_frame();
        ctx.set_button(0, false);

        for ch in typed.chars() {
            ctx.push_char(ch as u32);
        }
        ctx.begin_frame(0.016);
        let changed = text_field(&mut ctx, "f", field, &mut buffer, capacity);
        ctx.end_frame();

        let expected_len = (start_len + typed.len()).min(capacity);
        prop_assert_eq!(buffer.len(), expected_len);
        prop_assert_eq!(changed, expected_len > start_len);
        prop_assert!(buffer.starts_with(&initial.chars().take(capacity).collect::<String>()));
    }

    #[test]
    fn prop_idle_frame_preserves_active_and_focus(
        held in any::<bool>(),
        frames in 1usize..5,
    ) {
        let mut ctx = context();
        let track = Rect::new(0.0, 0.0, 100.0, 20.0);
        let field = Rect::new(0.0, 40.0, 100.0, 20.0);
        let mut value = 0.0;
        let mut text = String::new();

        // Focus the field, then grab the slider
        ctx.set_pointer_position(10.0, 50.0);
        ctx.set_button(0, true);
        ctx.begin_frame(0.016);
        text_field(&mut ctx, "field", field, &mut text, 8);
        ctx.end_frame();
        ctx.set_button(0, false);
        ctx.begin_frame(0.016);
        ctx.end_frame();

        ctx.set_pointer_position(10.0, 10.0);
        ctx.set_button(0, true);
        ctx.begin_frame(0.016);
        slider(&mut ctx, "slider", track, &mut value, 0.0, 1.0);
        ctx.end_frame();

        let active = ctx.interaction().active();
        let focused = ctx.interaction().focused();
        prop_assert!(active.is_some());
        prop_assert!(focused.is_some());

        ctx.set_button(0, held);
        for _ in 0..frames {
            ctx.begin_frame(0.016);
            ctx.end_frame();
        }

        prop_assert_eq!(ctx.interaction().active(), active);
        prop_assert_eq!(ctx.interaction().focused(), focused);
        if held {
            prop_assert!(ctx.interaction().hot().is_some());
        } else {
            prop_assert_eq!(ctx.interaction().hot(), None);
        }
    }
}
