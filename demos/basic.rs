//! Basic Example - Panel, region and every widget in a terminal
//!
//! A panel holding a padded column region with a button, a slider, a
//! checkbox, a text field and a status label. Mouse and keyboard input come
//! from crossterm; each terminal cell is 8×16 "pixels".
//!
//! Run with: cargo run --example basic
//! Logs: RUST_LOG=spark_imgui=debug cargo run --example basic 2> basic.log
//! Quit with Esc or Ctrl+C.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spark_imgui::state::events::{apply_event, poll_event, EventOutcome};
use spark_imgui::{
    button, checkbox, label, panel_begin, panel_end, slider, text_field, Color, Context,
    ContextConfig, Rect, RegionConfig, RegionWidthMode, TerminalConfig, TerminalRenderer,
};

const FRAME: Duration = Duration::from_millis(16);
const BACKGROUND: Color = Color::rgb(0.1, 0.1, 0.1);

struct Demo {
    clicks: u32,
    slider_value: f32,
    feature_enabled: bool,
    text: String,
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Feed pending terminal events. Returns false when the user asked to quit.
fn pump(ctx: &mut Context<TerminalRenderer>, config: &TerminalConfig) -> io::Result<bool> {
    let mut timeout = FRAME;
    while let Some(event) = poll_event(timeout)? {
        if is_quit(&event) {
            return Ok(false);
        }
        match apply_event(ctx, &event, config) {
            EventOutcome::Button => break,
            EventOutcome::Resized(cols, rows) => ctx.renderer_mut().resize(cols, rows),
            EventOutcome::Input | EventOutcome::Ignored => {}
        }
        timeout = Duration::ZERO;
    }
    Ok(true)
}

fn frame(ctx: &mut Context<TerminalRenderer>, demo: &mut Demo, dt: f32) {
    ctx.renderer_mut().clear(BACKGROUND);
    ctx.begin_frame(dt);

    panel_begin(ctx, "main_panel", Rect::new(16.0, 16.0, 400.0, 288.0), Color::rgb(0.35, 0.35, 0.35));

    let column = RegionConfig {
        spacing: 16.0,
        expand_width: true,
        ..RegionConfig::default().with_padding(16.0)
    };
    ctx.region_begin("controls", Rect::new(0.0, 0.0, 400.0, 288.0), Some(column));

    let row = ctx.region_next("controls", 32.0);
    if button(ctx, "Click Me!", Rect::new(row.x(), row.y(), 160.0, row.height())) {
        demo.clicks += 1;
        info!(clicks = demo.clicks, "button clicked");
    }

    let row = ctx.region_next("controls", 16.0);
    if slider(ctx, "slider1", row, &mut demo.slider_value, 0.0, 1.0) {
        info!(value = demo.slider_value, "slider moved");
    }

    let row = ctx.region_next("controls", 16.0);
    if checkbox(ctx, "Enable feature", row, &mut demo.feature_enabled) {
        info!(enabled = demo.feature_enabled, "checkbox toggled");
    }

    let row = ctx.region_next("controls", 32.0);
    text_field(ctx, "text_input", row, &mut demo.text, 40);

    let row = ctx.region_next("controls", 32.0);
    let status = format!(
        "clicks {}  value {:.2}  feature {}",
        demo.clicks,
        demo.slider_value,
        if demo.feature_enabled { "on" } else { "off" }
    );
    label(ctx, &status, row, Color::WHITE);

    ctx.region_end("controls");
    panel_end(ctx);
    ctx.end_frame();
}

fn run(out: &mut Stdout) -> io::Result<()> {
    let config = TerminalConfig::default();
    let (cols, rows) = size()?;
    let mut renderer = TerminalRenderer::new(cols, rows, config);
    renderer.enter_fullscreen(out)?;

    let viewport = renderer.viewport();
    let mut ctx = Context::with_config(
        renderer,
        ContextConfig {
            viewport,
            region_width_mode: RegionWidthMode::ExpandToBounds,
            ..Default::default()
        },
    );
    let mut demo = Demo {
        clicks: 0,
        slider_value: 0.5,
        feature_enabled: false,
        text: String::from("Hello UI!"),
    };

    let result = event_loop(&mut ctx, &mut demo, &config, out);
    ctx.renderer_mut().exit_fullscreen(out)?;
    result
}

fn event_loop(
    ctx: &mut Context<TerminalRenderer>,
    demo: &mut Demo,
    config: &TerminalConfig,
    out: &mut Stdout,
) -> io::Result<()> {
    let mut last = Instant::now();
    while pump(ctx, config)? {
        let now = Instant::now();
        frame(ctx, demo, (now - last).as_secs_f32());
        last = now;
        ctx.renderer_mut().flush(out)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout();
    enable_raw_mode()?;
    let result = run(&mut out);
    disable_raw_mode()?;
    out.flush()?;
    result
}
