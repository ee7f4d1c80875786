//! Layout Module - offset stack and named column regions
//!
//! Layout is positional, not constraint-based. A stack of composed offsets
//! turns relative coordinates into absolute ones, and named regions hand out
//! consecutive rows down a column.
//!
//! ```text
//! layout_push((100, 100))      top = (100, 100)
//!   layout_push((10, 10))      top = (110, 110)
//!     layout_resolve(5, 5, …)  → (115, 115, …)
//!   layout_pop()               top = (100, 100)
//! layout_pop()                 top = (0, 0)
//! ```

mod region;
mod stack;

pub use region::{
    RegionConfig, RegionMetrics, RegionOpened, RegionTable, RegionWidthMode,
    REGION_TABLE_CAPACITY,
};
pub use stack::{LayoutStack, LAYOUT_STACK_CAPACITY};
