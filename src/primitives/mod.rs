//! Widget Primitives - Immediate-mode building blocks.
//!
//! - [`button`] - Clickable box with a centred label
//! - [`label`] - Centred text
//! - [`slider`] - Horizontal drag control over a float range
//! - [`checkbox`] - Boolean toggle with a side label
//! - [`text_field`] - Single-line append/backspace text entry
//! - [`panel_begin`] / [`panel_end`] - Background fill plus a layout offset
//!
//! # Coordinates
//!
//! Leaf widgets take an already-resolved, absolute rectangle: the output of
//! [`Context::layout_resolve`](crate::Context::layout_resolve) or
//! [`Context::region_next`](crate::Context::region_next). Containers (panels
//! and regions) take bounds relative to the enclosing layout context and
//! resolve them themselves.
//!
//! # Identity
//!
//! Every interactive widget hashes its label (or id string) into a
//! [`WidgetId`](crate::state::WidgetId). Two widgets declared with the same
//! string in one frame share hot/active/focus state.
//!
//! ```ignore
//! ctx.begin_frame(dt);
//! if button(&mut ctx, "Save", ctx.layout_resolve(10.0, 10.0, 80.0, 24.0)) {
//!     save();
//! }
//! slider(&mut ctx, "volume", rect, &mut volume, 0.0, 1.0);
//! ctx.end_frame();
//! ```

mod button;
mod checkbox;
mod label;
mod panel;
mod slider;
mod text_field;

pub use button::button;
pub use checkbox::checkbox;
pub use label::label;
pub use panel::{panel_begin, panel_end};
pub use slider::slider;
pub use text_field::text_field;
