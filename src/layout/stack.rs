//! Layout stack - nested positioning offsets.
//!
//! Every push composes with the current top, so the top entry is always the
//! absolute origin of the innermost positioning context. Overflow and
//! underflow are silent no-ops.

use tracing::{debug, warn};

use crate::types::{Rect, Vec2};

/// Maximum nesting depth.
pub const LAYOUT_STACK_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct LayoutStack {
    offsets: [Vec2; LAYOUT_STACK_CAPACITY],
    len: usize,
}

impl Default for LayoutStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStack {
    pub fn new() -> Self {
        Self {
            offsets: [Vec2::ZERO; LAYOUT_STACK_CAPACITY],
            len: 0,
        }
    }

    /// Current composed offset (zero when empty).
    #[inline]
    pub fn top(&self) -> Vec2 {
        if self.len == 0 {
            Vec2::ZERO
        } else {
            self.offsets[self.len - 1]
        }
    }

    pub fn depth(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Enter a nested context whose origin is `offset` relative to the current one.
    ///
    /// Returns false (and changes nothing) when the stack is full.
    pub fn push(&mut self, offset: Vec2) -> bool {
        if self.len >= LAYOUT_STACK_CAPACITY {
            warn!(
                capacity = LAYOUT_STACK_CAPACITY,
                "layout stack full, push ignored"
            );
            return false;
        }
        self.offsets[self.len] = self.top() + offset;
        self.len += 1;
        true
    }

    /// Leave the innermost context. Returns false when the stack was empty.
    pub fn pop(&mut self) -> bool {
        if self.len == 0 {
            debug!("layout pop on empty stack ignored");
            return false;
        }
        self.len -= 1;
        true
    }

    /// Translate a context-relative rectangle to absolute coordinates.
    pub fn resolve(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).translate(self.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_is_identity() {
        let stack = LayoutStack::new();
        assert_eq!(stack.resolve(1.0, 2.0, 3.0, 4.0), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_nested_push_composes() {
        let mut stack = LayoutStack::new();
        stack.push(Vec2::new(10.0, 20.0));
        stack.push(Vec2::new(5.0, 5.0));

        assert_eq!(stack.resolve(1.0, 1.0, 8.0, 9.0), Rect::new(16.0, 26.0, 8.0, 9.0));

        stack.pop();
        assert_eq!(stack.top(), Vec2::new(10.0, 20.0));
        stack.pop();
        assert_eq!(stack.top(), Vec2::ZERO);
    }

    #[test]
    fn test_overflow_is_noop() {
        let mut stack = LayoutStack::new();
        for _ in 0..LAYOUT_STACK_CAPACITY {
            assert!(stack.push(Vec2::new(1.0, 0.0)));
        }
        assert!(!stack.push(Vec2::new(100.0, 100.0)));
        assert_eq!(stack.depth(), LAYOUT_STACK_CAPACITY);
        assert_eq!(stack.top(), Vec2::new(LAYOUT_STACK_CAPACITY as f32, 0.0));
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut stack = LayoutStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 0);
    }
}
