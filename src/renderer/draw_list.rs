//! Recording renderer.
//!
//! Stores every draw call as a [`DrawCommand`] so a frame can be inspected
//! after the fact. Text metrics are monospaced: every printable ASCII glyph
//! advances by the same amount, everything else has zero width.

use super::Renderer;
use crate::types::{Color, Rect, Vec2};

/// Glyph advance used by [`DrawList::new`].
pub const DEFAULT_GLYPH_ADVANCE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Text { text: String, position: Vec2, color: Color },
    PushClip(Rect),
    PopClip,
}

#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    glyph_advance: f32,
    font_size: f32,
    clip_depth: usize,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_metrics(DEFAULT_GLYPH_ADVANCE, 16.0)
    }

    pub fn with_metrics(glyph_advance: f32, font_size: f32) -> Self {
        Self {
            commands: Vec::new(),
            glyph_advance,
            font_size,
            clip_depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Open clip scopes (pushes minus pops).
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// All recorded rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// All recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            color,
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        let glyphs = text.bytes().filter(|b| (32..128).contains(b)).count();
        glyphs as f32 * self.glyph_advance
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_skips_non_printable() {
        let list = DrawList::new();
        assert_eq!(list.measure_text("abc"), 24.0);
        assert_eq!(list.measure_text("a\tb"), 16.0);
        assert_eq!(list.measure_text(""), 0.0);
    }

    #[test]
    fn test_empty_text_not_recorded() {
        let mut list = DrawList::new();
        list.draw_text("", Vec2::ZERO, Color::WHITE);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_take_drains() {
        let mut list = DrawList::new();
        list.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_clip(Rect::ZERO);
        assert_eq!(list.clip_depth(), 1);
        list.pop_clip();

        let cmds = list.take();
        assert_eq!(cmds.len(), 3);
        assert!(list.commands().is_empty());
        assert_eq!(list.clip_depth(), 0);
    }
}
