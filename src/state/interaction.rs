//! Interaction registry - hot, active and focused widget slots
//!
//! One global owner per slot:
//! - `hot`: the widget under the pointer. Last declaration wins; cleared at
//!   frame start whenever no button is held.
//! - `active`: the widget being manipulated (a slider drag). Exclusive; only
//!   claimable while empty, released when the primary button goes up.
//! - `focused`: the widget receiving keyboard input. Replaced by the next
//!   focusable widget that is clicked; clicking empty space keeps it.

use tracing::trace;

use super::id::WidgetId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    focused: Option<WidgetId>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Hot
    // -------------------------------------------------------------------------

    pub fn hot(&self) -> Option<WidgetId> {
        self.hot
    }

    pub fn is_hot(&self, id: WidgetId) -> bool {
        self.hot == Some(id)
    }

    pub fn set_hot(&mut self, id: WidgetId) {
        self.hot = Some(id);
    }

    pub fn clear_hot(&mut self) {
        self.hot = None;
    }

    // -------------------------------------------------------------------------
    // Active
    // -------------------------------------------------------------------------

    pub fn active(&self) -> Option<WidgetId> {
        self.active
    }

    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    /// Claim the active slot. Succeeds if it is empty or already held by `id`.
    pub fn try_activate(&mut self, id: WidgetId) -> bool {
        match self.active {
            None => {
                trace!(id = id.raw(), "widget activated");
                self.active = Some(id);
                true
            }
            Some(current) => current == id,
        }
    }

    pub fn release_active(&mut self) {
        if let Some(id) = self.active.take() {
            trace!(id = id.raw(), "widget released");
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focused == Some(id)
    }

    pub fn focus(&mut self, id: WidgetId) {
        if self.focused != Some(id) {
            trace!(id = id.raw(), "focus moved");
            self.focused = Some(id);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (WidgetId, WidgetId) {
        (WidgetId::from_label("a"), WidgetId::from_label("b"))
    }

    #[test]
    fn test_active_is_exclusive() {
        let (a, b) = ids();
        let mut reg = Interaction::new();

        assert!(reg.try_activate(a));
        assert!(!reg.try_activate(b));
        assert!(reg.is_active(a));

        // re-claiming by the owner is fine
        assert!(reg.try_activate(a));

        reg.release_active();
        assert!(reg.try_activate(b));
        assert!(reg.is_active(b));
    }

    #[test]
    fn test_hot_last_writer_wins() {
        let (a, b) = ids();
        let mut reg = Interaction::new();
        reg.set_hot(a);
        reg.set_hot(b);
        assert!(reg.is_hot(b));
        assert!(!reg.is_hot(a));

        reg.clear_hot();
        assert_eq!(reg.hot(), None);
    }

    #[test]
    fn test_focus_persists_until_replaced() {
        let (a, b) = ids();
        let mut reg = Interaction::new();
        reg.focus(a);
        reg.clear_hot();
        reg.release_active();
        assert!(reg.is_focused(a));

        reg.focus(b);
        assert!(reg.is_focused(b));

        reg.blur();
        assert_eq!(reg.focused(), None);
    }
}
