//! State Module - Per-frame input and retained interaction state
//!
//! - **Input** - pointer, buttons with previous-frame snapshot, typed characters
//! - **Interaction** - hot / active / focused widget registry
//! - **Id** - label hashing and per-frame conflict detection
//! - **Events** - crossterm event bridge for terminal hosts

pub mod events;
mod id;
mod input;
mod interaction;

pub use id::{IdTracker, WidgetId};
pub use input::{keys, EditKeys, InputState, MouseButtons, CHAR_QUEUE_CAPACITY};
pub use interaction::Interaction;
