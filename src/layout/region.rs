//! Named layout regions - persistent vertical column cursors.
//!
//! A region is addressed by name rather than by object: `begin` locates (or
//! allocates) the slot for a name in a fixed table, `next` hands out the next
//! row rectangle and advances the cursor, and `end` deactivates the slot.
//! Slots keep their accumulated metrics after `end`, so a region reopened
//! under the same name next frame lands in the same slot and last frame's
//! size is still readable through [`RegionTable::metrics`].
//!
//! # Failure mode
//!
//! Nothing here errors. A full table refuses new names, and `next`/`end` on a
//! name that is not open yield [`Rect::ZERO`] / do nothing.

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Rect, Vec2};

/// Number of region slots.
pub const REGION_TABLE_CAPACITY: usize = 32;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Per-region configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegionConfig {
    /// Vertical gap between consecutive rows (default: 4)
    pub spacing: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    /// Stretch rows to the region bounds (see [`RegionWidthMode`])
    pub expand_width: bool,
    /// Row width source when positive; 0 means "auto" (viewport width)
    pub fixed_height: f32,
    /// Clip drawing to the region bounds until `end`
    pub clip_overflow: bool,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            padding_right: 0.0,
            expand_width: false,
            fixed_height: 0.0,
            clip_overflow: false,
        }
    }
}

impl RegionConfig {
    /// Same padding on all four sides.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding_top = padding;
        self.padding_bottom = padding;
        self.padding_left = padding;
        self.padding_right = padding;
        self
    }

    fn horizontal_padding(&self) -> f32 {
        self.padding_left + self.padding_right
    }
}

/// How `next` derives the row width.
///
/// `Legacy` keeps the historical behavior: `expand_width` is stored but has
/// no effect, and a positive `fixed_height` doubles as the row width.
/// `ExpandToBounds` makes `expand_width` stretch rows to the region bounds
/// minus horizontal padding, regardless of `fixed_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegionWidthMode {
    #[default]
    Legacy,
    ExpandToBounds,
}

/// Accumulated content metrics of a region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionMetrics {
    pub max_width: f32,
    pub total_height: f32,
    pub widget_count: usize,
}

// =============================================================================
// SLOTS
// =============================================================================

#[derive(Debug, Clone, Default)]
struct RegionSlot {
    name: Option<String>,
    active: bool,
    bounds: Rect,
    cursor: Vec2,
    metrics: RegionMetrics,
    config: RegionConfig,
}

impl RegionSlot {
    fn holds(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Result of a successful `begin`: what the caller must push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionOpened {
    /// Padded origin relative to the bounds' coordinate space origin
    pub origin: Vec2,
    /// Clip rectangle to establish, when `clip_overflow` is set
    pub clip: Option<Rect>,
}

/// Fixed-capacity, name-addressed pool of region states.
#[derive(Debug, Clone)]
pub struct RegionTable {
    slots: [RegionSlot; REGION_TABLE_CAPACITY],
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn home_slot(name: &str) -> usize {
    let hash = name
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
    hash as usize % REGION_TABLE_CAPACITY
}

fn probe(name: &str) -> impl Iterator<Item = usize> {
    let home = home_slot(name);
    (0..REGION_TABLE_CAPACITY).map(move |i| (home + i) % REGION_TABLE_CAPACITY)
}

impl RegionTable {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| RegionSlot::default()),
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        probe(name).find(|&idx| self.slots[idx].holds(name))
    }

    fn find_active(&self, name: &str) -> Option<usize> {
        self.find(name).filter(|&idx| self.slots[idx].active)
    }

    /// Slot for a new `begin`: the name's own slot if it has one, otherwise
    /// the first inactive slot along the probe sequence.
    fn allocate(&self, name: &str) -> Option<usize> {
        self.find(name)
            .or_else(|| probe(name).find(|&idx| !self.slots[idx].active))
    }

    /// Open a region.
    ///
    /// `bounds` is absolute; `relative_pos` is the same position expressed in
    /// the caller's layout space, used to build the offset the caller pushes.
    /// Returns `None` if the table is full or the region is already open.
    pub fn begin(
        &mut self,
        name: &str,
        bounds: Rect,
        relative_pos: Vec2,
        config: Option<RegionConfig>,
    ) -> Option<RegionOpened> {
        let Some(idx) = self.allocate(name) else {
            warn!(
                name,
                capacity = REGION_TABLE_CAPACITY,
                "region table full, region ignored"
            );
            return None;
        };

        let slot = &mut self.slots[idx];
        if slot.active {
            warn!(name, "region already open, nested begin ignored");
            return None;
        }

        let config = config.unwrap_or_default();
        let padding = Vec2::new(config.padding_left, config.padding_top);

        slot.name = Some(name.to_owned());
        slot.active = true;
        slot.bounds = bounds;
        slot.cursor = bounds.pos + padding;
        slot.metrics = RegionMetrics::default();
        slot.config = config;

        Some(RegionOpened {
            origin: relative_pos + padding,
            clip: config.clip_overflow.then_some(bounds),
        })
    }

    /// Hand out the next row of `widget_height` and advance the cursor.
    pub fn next(
        &mut self,
        name: &str,
        widget_height: f32,
        viewport_width: f32,
        mode: RegionWidthMode,
    ) -> Rect {
        let Some(idx) = self.find_active(name) else {
            debug!(name, "next on a region that is not open");
            return Rect::ZERO;
        };
        let slot = &mut self.slots[idx];
        let config = slot.config;

        let width = match mode {
            RegionWidthMode::ExpandToBounds if config.expand_width => {
                slot.bounds.width() - config.horizontal_padding()
            }
            _ if config.fixed_height > 0.0 => config.fixed_height - config.horizontal_padding(),
            _ => viewport_width - config.horizontal_padding(),
        };

        let rect = Rect {
            pos: slot.cursor,
            size: Vec2::new(width, widget_height),
        };

        let metrics = &mut slot.metrics;
        metrics.max_width = metrics.max_width.max(width);
        if metrics.widget_count > 0 {
            metrics.total_height += config.spacing;
        }
        metrics.total_height += widget_height;
        metrics.widget_count += 1;

        slot.cursor.y += widget_height + config.spacing;
        rect
    }

    /// Close a region. Returns whether a clip scope must be released, or
    /// `None` if the region was not open (nothing to pop).
    pub fn end(&mut self, name: &str) -> Option<bool> {
        let Some(idx) = self.find_active(name) else {
            debug!(name, "end on a region that is not open");
            return None;
        };
        let slot = &mut self.slots[idx];
        slot.active = false;
        Some(slot.config.clip_overflow)
    }

    /// Metrics accumulated by the slot holding `name`, open or closed.
    pub fn metrics(&self, name: &str) -> Option<RegionMetrics> {
        self.find(name).map(|idx| self.slots[idx].metrics)
    }

    /// Number of currently open regions.
    pub fn open_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    fn open(table: &mut RegionTable, name: &str, bounds: Rect) -> Option<RegionOpened> {
        table.begin(name, bounds, bounds.pos, None)
    }

    #[test]
    fn test_cursor_accumulation_default_spacing() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(10.0, 30.0, 200.0, 300.0);
        open(&mut table, "col", bounds).unwrap();

        let ys: Vec<f32> = (0..3)
            .map(|_| table.next("col", 20.0, VIEWPORT, RegionWidthMode::Legacy).y())
            .collect();
        assert_eq!(ys, vec![30.0, 54.0, 78.0]);

        let m = table.metrics("col").unwrap();
        assert_eq!(m.total_height, 68.0);
        assert_eq!(m.widget_count, 3);
        assert_eq!(m.max_width, VIEWPORT);
    }

    #[test]
    fn test_padding_offsets_cursor_and_width() {
        let mut table = RegionTable::new();
        let config = RegionConfig::default().with_padding(8.0);
        let opened = table
            .begin("p", Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::ZERO, Some(config))
            .unwrap();
        assert_eq!(opened.origin, Vec2::new(8.0, 8.0));
        assert_eq!(opened.clip, None);

        let row = table.next("p", 10.0, VIEWPORT, RegionWidthMode::Legacy);
        assert_eq!(row, Rect::new(8.0, 8.0, VIEWPORT - 16.0, 10.0));
    }

    #[test]
    fn test_next_on_unknown_or_closed_region() {
        let mut table = RegionTable::new();
        assert_eq!(table.next("nope", 10.0, VIEWPORT, RegionWidthMode::Legacy), Rect::ZERO);

        open(&mut table, "col", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(table.end("col"), Some(false));
        assert_eq!(table.next("col", 10.0, VIEWPORT, RegionWidthMode::Legacy), Rect::ZERO);
        assert_eq!(table.end("col"), None);
    }

    #[test]
    fn test_metrics_survive_end_and_reset_on_begin() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        open(&mut table, "col", bounds);
        table.next("col", 20.0, VIEWPORT, RegionWidthMode::Legacy);
        table.end("col");

        assert_eq!(table.metrics("col").unwrap().total_height, 20.0);

        open(&mut table, "col", bounds);
        assert_eq!(table.metrics("col").unwrap(), RegionMetrics::default());
    }

    #[test]
    fn test_same_name_reuses_slot_across_frames() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        open(&mut table, "a", bounds);
        let first = table.find("a");
        table.end("a");

        open(&mut table, "b", bounds);
        open(&mut table, "a", bounds);
        assert_eq!(table.find("a"), first);
        assert_eq!(table.open_count(), 2);
    }

    #[test]
    fn test_nested_begin_of_open_region_is_refused() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(open(&mut table, "a", bounds).is_some());
        assert!(open(&mut table, "a", bounds).is_none());
        assert_eq!(table.open_count(), 1);
    }

    #[test]
    fn test_table_saturation_refuses_new_names() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        for i in 0..REGION_TABLE_CAPACITY {
            assert!(open(&mut table, &format!("r{i}"), bounds).is_some());
        }
        assert!(open(&mut table, "overflow", bounds).is_none());
        assert_eq!(table.next("overflow", 5.0, VIEWPORT, RegionWidthMode::Legacy), Rect::ZERO);

        // Freeing one slot makes room again
        table.end("r0");
        assert!(open(&mut table, "overflow", bounds).is_some());
    }

    #[test]
    fn test_fixed_height_doubles_as_width_in_legacy_mode() {
        let mut table = RegionTable::new();
        let config = RegionConfig {
            fixed_height: 120.0,
            padding_left: 10.0,
            padding_right: 10.0,
            ..Default::default()
        };
        table.begin("f", Rect::new(0.0, 0.0, 300.0, 50.0), Vec2::ZERO, Some(config));
        let row = table.next("f", 10.0, VIEWPORT, RegionWidthMode::Legacy);
        assert_eq!(row.width(), 100.0);
    }

    #[test]
    fn test_expand_width_is_inert_in_legacy_mode() {
        let mut table = RegionTable::new();
        let config = RegionConfig {
            expand_width: true,
            ..Default::default()
        };
        table.begin("e", Rect::new(0.0, 0.0, 300.0, 50.0), Vec2::ZERO, Some(config));
        let row = table.next("e", 10.0, VIEWPORT, RegionWidthMode::Legacy);
        assert_eq!(row.width(), VIEWPORT);
    }

    #[test]
    fn test_expand_width_fills_bounds_when_enabled() {
        let mut table = RegionTable::new();
        let config = RegionConfig {
            expand_width: true,
            fixed_height: 120.0,
            padding_left: 5.0,
            padding_right: 15.0,
            ..Default::default()
        };
        table.begin("e", Rect::new(0.0, 0.0, 300.0, 50.0), Vec2::ZERO, Some(config));
        let row = table.next("e", 10.0, VIEWPORT, RegionWidthMode::ExpandToBounds);
        assert_eq!(row.width(), 280.0);
    }

    #[test]
    fn test_clip_overflow_reports_clip() {
        let mut table = RegionTable::new();
        let bounds = Rect::new(5.0, 5.0, 50.0, 50.0);
        let config = RegionConfig {
            clip_overflow: true,
            ..Default::default()
        };
        let opened = table.begin("c", bounds, bounds.pos, Some(config)).unwrap();
        assert_eq!(opened.clip, Some(bounds));
        assert_eq!(table.end("c"), Some(true));
    }
}
