//! Renderer backends.
//!
//! The core never talks to a graphics API. Widgets emit rectangles and text
//! through the [`Renderer`] trait and ask it for text metrics; everything
//! else (batching, GPU upload, glyph atlases) belongs to the implementation.
//!
//! Two implementations ship with the crate:
//! - [`DrawList`] records commands, for tests and headless runs
//! - [`TerminalRenderer`] rasterizes into terminal cells via crossterm

mod draw_list;
mod terminal;

pub use draw_list::{DrawCommand, DrawList, DEFAULT_GLYPH_ADVANCE};
pub use terminal::{TermCell, TerminalConfig, TerminalRenderer};

use crate::types::{Color, Rect, Vec2};

/// Drawing and text measurement capability consumed by widgets.
pub trait Renderer {
    /// Fill a rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its baseline at `position.y`.
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Horizontal advance of `text`.
    fn measure_text(&self, text: &str) -> f32;

    /// Nominal font size, used for auto-sized widgets.
    fn font_size(&self) -> f32 {
        16.0
    }

    /// Restrict subsequent drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, _rect: Rect) {}

    fn pop_clip(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        (**self).draw_rect(rect, color)
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        (**self).draw_text(text, position, color)
    }

    fn measure_text(&self, text: &str) -> f32 {
        (**self).measure_text(text)
    }

    fn font_size(&self) -> f32 {
        (**self).font_size()
    }

    fn push_clip(&mut self, rect: Rect) {
        (**self).push_clip(rect)
    }

    fn pop_clip(&mut self) {
        (**self).pop_clip()
    }
}
