//! # spark-imgui
//!
//! Immediate-mode GUI core for Rust.
//!
//! The UI is re-declared every frame by plain function calls; the only state
//! that survives between frames lives in a caller-owned [`Context`]: input
//! snapshots, the hot/active/focused widget registry, a layout offset stack
//! and a table of named column regions.
//!
//! ## Architecture
//!
//! ```text
//! feed input → begin_frame(dt) → panels / regions / widgets → end_frame()
//!                                          │
//!                                          ▼
//!                             Renderer (rects, text, clips)
//! ```
//!
//! Widgets never touch a graphics API. They draw through the [`Renderer`]
//! trait, which the host implements; [`DrawList`] records commands and
//! [`TerminalRenderer`] rasterizes into a crossterm-driven terminal.
//!
//! ## Modules
//!
//! - [`types`] - Geometry and color (`Vec2`, `Rect`, `Color`)
//! - [`state`] - Input snapshot, interaction registry, widget ids, terminal events
//! - [`layout`] - Layout offset stack and named regions
//! - [`renderer`] - Renderer trait and backends
//! - [`primitives`] - Button, label, slider, checkbox, text field, panel
//!
//! ## Example
//!
//! ```ignore
//! use spark_imgui::{button, Context, DrawList};
//!
//! let mut ctx = Context::new(DrawList::new(), 800.0, 600.0);
//! ctx.set_pointer_position(30.0, 20.0);
//! ctx.set_button(0, true);
//!
//! ctx.begin_frame(1.0 / 60.0);
//! let rect = ctx.layout_resolve(10.0, 10.0, 80.0, 24.0);
//! if button(&mut ctx, "Save", rect) {
//!     println!("saved");
//! }
//! ctx.end_frame();
//! ```

pub mod context;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use context::{caret_visible, Context, ContextConfig};

pub use layout::{RegionConfig, RegionMetrics, RegionWidthMode};

pub use renderer::{DrawCommand, DrawList, Renderer, TerminalConfig, TerminalRenderer};

pub use primitives::{button, checkbox, label, panel_begin, panel_end, slider, text_field};

pub use state::{keys, EditKeys, MouseButtons, WidgetId};
