//! Terminal renderer.
//!
//! Rasterizes the pixel-space draw calls into a grid of terminal cells and
//! writes them with crossterm. Each cell stands for `cell_width` ×
//! `cell_height` pixels; a rectangle covers every cell whose center it
//! contains, text lands one glyph per cell.
//!
//! # Flushing
//!
//! Like a diff renderer, [`TerminalRenderer::flush`] compares the frame to
//! the previously flushed one and only emits changed cells, wrapped in a
//! synchronized update.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Renderer;
use crate::types::{Color, Rect, Vec2};

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalConfig {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// A single rasterized cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermCell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

pub struct TerminalRenderer {
    config: TerminalConfig,
    cols: u16,
    rows: u16,
    cells: Vec<TermCell>,
    previous: Option<Vec<TermCell>>,
    /// Innermost last; `None` is an empty clip that blocks every cell
    clips: Vec<Option<Rect>>,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16, config: TerminalConfig) -> Self {
        Self {
            config,
            cols,
            rows,
            cells: vec![TermCell::default(); cols as usize * rows as usize],
            previous: None,
            clips: Vec::new(),
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Grid size in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Grid size in pixels.
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.config.cell_width,
            self.rows as f32 * self.config.cell_height,
        )
    }

    /// Map a terminal cell to the pixel at its center.
    pub fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.config.cell_width,
            (row as f32 + 0.5) * self.config.cell_height,
        )
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![TermCell::default(); cols as usize * rows as usize];
        self.invalidate();
    }

    /// Reset every cell to a blank of `bg` and drop any clip scopes.
    pub fn clear(&mut self, bg: Color) {
        self.cells.fill(TermCell {
            bg,
            ..TermCell::default()
        });
        self.clips.clear();
    }

    /// Forget the last flushed frame; the next flush redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&TermCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn get_mut(&mut self, col: u16, row: u16) -> Option<&mut TermCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    /// Clip test on cell centers. Half-open, so a center on the right or
    /// bottom edge belongs to the neighbouring area.
    fn clip_allows(&self, p: Vec2) -> bool {
        match self.clips.last() {
            None => true,
            Some(None) => false,
            Some(Some(clip)) => {
                p.x >= clip.x() && p.x < clip.right() && p.y >= clip.y() && p.y < clip.bottom()
            }
        }
    }

    /// Cell index range whose centers fall in `[lo, hi)` along one axis.
    fn span(lo: f32, hi: f32, cell: f32, limit: u16) -> std::ops::Range<u16> {
        let start = (lo / cell - 0.5).ceil().clamp(0.0, limit as f32);
        let end = (hi / cell - 0.5).ceil().clamp(0.0, limit as f32);
        (start as u16)..(end as u16)
    }

    /// Write the changed cells to `out`. Returns true if anything was written.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        let mut changed = 0usize;
        queue!(out, BeginSynchronizedUpdate)?;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row as usize * self.cols as usize + col as usize;
                let cell = self.cells[idx];
                let unchanged = self
                    .previous
                    .as_ref()
                    .and_then(|prev| prev.get(idx))
                    .is_some_and(|prev| *prev == cell);
                if unchanged {
                    continue;
                }
                changed += 1;
                queue!(
                    out,
                    MoveTo(col, row),
                    SetForegroundColor(term_color(cell.fg)),
                    SetBackgroundColor(term_color(cell.bg)),
                    Print(cell.ch)
                )?;
            }
        }

        queue!(out, ResetColor, EndSynchronizedUpdate)?;
        out.flush()?;

        trace!(changed, "terminal frame flushed");
        self.previous = Some(self.cells.clone());
        Ok(changed > 0)
    }

    /// Switch to the alternate screen with the cursor hidden and mouse capture on.
    pub fn enter_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture, Clear(ClearType::All))?;
        self.invalidate();
        Ok(())
    }

    pub fn exit_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        execute!(out, ResetColor, DisableMouseCapture, Show, LeaveAlternateScreen)
    }
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb { r, g, b }
}

impl Renderer for TerminalRenderer {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let cw = self.config.cell_width;
        let ch = self.config.cell_height;
        for row in Self::span(rect.y(), rect.bottom(), ch, self.rows) {
            for col in Self::span(rect.x(), rect.right(), cw, self.cols) {
                if !self.clip_allows(self.cell_center(col, row)) {
                    continue;
                }
                if let Some(cell) = self.get_mut(col, row) {
                    cell.bg = Color::blend(color, cell.bg);
                    if color.is_opaque() {
                        cell.ch = ' ';
                    }
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        let cw = self.config.cell_width;
        let ch = self.config.cell_height;
        // Widgets place the baseline 4px below the vertical center
        let row = ((position.y - 4.0) / ch).floor();
        if row < 0.0 || row >= self.rows as f32 {
            return;
        }
        let row = row as u16;
        let mut x = position.x;
        for glyph in text.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()) {
            let col = (x / cw).round();
            x += cw;
            if col < 0.0 || col >= self.cols as f32 {
                continue;
            }
            let col = col as u16;
            if !self.clip_allows(self.cell_center(col, row)) {
                continue;
            }
            if let Some(cell) = self.get_mut(col, row) {
                cell.ch = glyph;
                cell.fg = color;
            }
        }
    }

    fn measure_text(&self, text: &str) -> f32 {
        let glyphs = text.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).count();
        glyphs as f32 * self.config.cell_width
    }

    fn font_size(&self) -> f32 {
        self.config.cell_height
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = match self.clips.last() {
            Some(Some(outer)) => outer.intersect(&rect),
            Some(None) => None,
            None => Some(rect),
        };
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }
}

// =============================================================================
// Tests
// =============================================================================
