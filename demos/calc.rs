//! Calculator Example - Button grid in a panel
//!
//! A display text field above a 4×5 button grid. Buttons append to the
//! display, `C` clears it, `<` deletes the last character and `=`
//! evaluates the expression left to right. The display is a regular text
//! field, so it can also be clicked and typed into.
//!
//! Run with: cargo run --example calc
//! Quit with Esc or Ctrl+C.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use spark_imgui::state::events::{apply_event, poll_event, EventOutcome};
use spark_imgui::{
    button, label, panel_begin, panel_end, text_field, Color, Context, Rect, TerminalConfig,
    TerminalRenderer,
};

const FRAME: Duration = Duration::from_millis(16);
const DISPLAY_CAPACITY: usize = 24;

const KEYPAD: [[&str; 5]; 4] = [
    ["7", "8", "9", "/", "C"],
    ["4", "5", "6", "*", "<"],
    ["1", "2", "3", "-", "("],
    ["0", ".", "=", "+", ")"],
];

const BUTTON_WIDTH: f32 = 32.0;
const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluate `+ - * /` with precedence and parentheses.
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&mut self) -> Option<u8> {
        while self.input.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
        self.input.get(self.pos).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == b'+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = if op == b'*' { value * rhs } else { value / rhs };
        }
        Some(value)
    }

    fn factor(&mut self) -> Option<f64> {
        match self.peek()? {
            b'-' => {
                self.pos += 1;
                self.factor().map(|v| -v)
            }
            b'(' => {
                self.pos += 1;
                let value = self.expr()?;
                (self.peek()? == b')').then(|| {
                    self.pos += 1;
                    value
                })
            }
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        while matches!(self.input.get(self.pos), Some(b'0'..=b'9' | b'.')) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.input[start..self.pos]).ok()?.parse().ok()
    }
}

fn evaluate(expr: &str) -> Option<f64> {
    let mut parser = Parser::new(expr);
    let value = parser.expr()?;
    (parser.peek().is_none() && value.is_finite()).then_some(value)
}

fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// =============================================================================
// UI
// =============================================================================

fn press(screen: &mut String, key: &str) {
    match key {
        "C" => screen.clear(),
        "<" => {
            screen.pop();
        }
        "=" => {
            let result = evaluate(screen);
            debug!(expr = screen.as_str(), ?result, "evaluate");
            *screen = result.map(format_result).unwrap_or_else(|| String::from("error"));
        }
        _ if screen.len() < DISPLAY_CAPACITY => screen.push_str(key),
        _ => {}
    }
}

fn frame(ctx: &mut Context<TerminalRenderer>, screen: &mut String, dt: f32) {
    ctx.renderer_mut().clear(Color::rgb(0.1, 0.1, 0.1));
    ctx.begin_frame(dt);

    panel_begin(ctx, "calc_panel", Rect::new(16.0, 16.0, 216.0, 272.0), Color::rgb(0.2, 0.2, 0.2));

    let title = ctx.layout_resolve(8.0, 0.0, 200.0, 32.0);
    label(ctx, "Calculator", title, Color::WHITE);

    let screen_rect = ctx.layout_resolve(8.0, 48.0, 200.0, 32.0);
    text_field(ctx, "calc_display", screen_rect, screen, DISPLAY_CAPACITY);

    for (row, keys) in KEYPAD.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let rect = ctx.layout_resolve(
                8.0 + col as f32 * (BUTTON_WIDTH + BUTTON_GAP),
                96.0 + row as f32 * (BUTTON_HEIGHT + BUTTON_GAP),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            );
            if button(ctx, key, rect) {
                info!(key, "keypad");
                press(screen, key);
            }
        }
    }

    panel_end(ctx);
    ctx.end_frame();
}

// =============================================================================
// Terminal loop
// =============================================================================

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

fn event_loop(
    ctx: &mut Context<TerminalRenderer>,
    screen: &mut String,
    config: &TerminalConfig,
    out: &mut Stdout,
) -> io::Result<()> {
    let mut last = Instant::now();
    while pump(ctx, config)? {
        let now = Instant::now();
        frame(ctx, screen, (now - last).as_secs_f32());
        last = now;
        ctx.renderer_mut().flush(out)?;
    }
    Ok(())
}

fn run(out: &mut Stdout) -> io::Result<()> {
    let config = TerminalConfig::default();
    let (cols, rows) = size()?;
    let mut renderer = TerminalRenderer::new(cols, rows, config);
    renderer.enter_fullscreen(out)?;

    let viewport = renderer.viewport();
    let mut ctx = Context::new(renderer, viewport.x, viewport.y);
    let mut screen = String::from("0");

    let result = event_loop(&mut ctx, &mut screen, &config, out);
    ctx.renderer_mut().exit_fullscreen(out)?;
    result
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
