//! Widget identity.
//!
//! Widgets have no persistent objects, so the interaction registry keys its
//! hot/active/focused slots by a hash of the label (or explicit id string)
//! the widget is declared with. Two strings with the same hash are the same
//! widget as far as interaction state is concerned: ids must be unique
//! within a frame.

use std::collections::HashMap;

use tracing::warn;

/// Stable numeric widget identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u32);

impl WidgetId {
    /// Hash a label into an id (djb2: seed 5381, multiplier 33).
    pub fn from_label(label: &str) -> Self {
        let hash = label
            .bytes()
            .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(b as u32));
        Self(hash)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

// =============================================================================
// CONFLICT DETECTION
// =============================================================================

/// Per-frame record of declared ids, used to flag aliasing widgets.
///
/// Disabled trackers do nothing; the context enables one by default in
/// debug builds.
#[derive(Debug, Default)]
pub struct IdTracker {
    enabled: bool,
    seen: HashMap<WidgetId, String>,
    conflicts: usize,
}

impl IdTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: HashMap::new(),
            conflicts: 0,
        }
    }

    /// Record a declaration. Returns true when it aliases an earlier widget
    /// of the same frame (same label twice, or a hash collision).
    pub fn record(&mut self, id: WidgetId, label: &str) -> bool {
        if !self.enabled {
            return false;
        }
        match self.seen.get(&id) {
            Some(previous) if previous == label => {
                warn!(label, id = id.raw(), "widget id declared twice in one frame");
                self.conflicts += 1;
                true
            }
            Some(previous) => {
                warn!(
                    label,
                    previous = previous.as_str(),
                    id = id.raw(),
                    "widget id hash collision"
                );
                self.conflicts += 1;
                true
            }
            None => {
                self.seen.insert(id, label.to_owned());
                false
            }
        }
    }

    /// Forget this frame's declarations. The conflict count is cumulative.
    pub fn reset_frame(&mut self) {
        self.seen.clear();
    }

    pub fn conflicts(&self) -> usize {
        self.conflicts
    }
}
