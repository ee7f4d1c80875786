//! Core types for spark-imgui.
//!
//! Geometry and color primitives shared by every layer: the input state,
//! the layout stack, the widgets and the renderer backends. Coordinates are
//! floating point "pixels" with the origin at the top-left corner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Vec2
// =============================================================================

/// A 2-D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// The degenerate rectangle handed out when a layout request cannot be served.
    pub const ZERO: Self = Self {
        pos: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Create a new rect from position and size components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True when both dimensions are zero (used for button auto-sizing).
    #[inline]
    pub fn is_zero_sized(&self) -> bool {
        self.size.x == 0.0 && self.size.y == 0.0
    }

    /// Check if a point is inside this rect.
    ///
    /// All four edges are inclusive, so a pointer resting exactly on a
    /// widget border still counts as hovering it.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x && p.x <= self.right() && p.y >= self.pos.y && p.y <= self.bottom()
    }

    /// Grow (or shrink, for negative `n`) the rect by `n` on every side.
    pub fn expand(&self, n: f32) -> Rect {
        Rect::new(
            self.pos.x - n,
            self.pos.y - n,
            self.size.x + n * 2.0,
            self.size.y + n * 2.0,
        )
    }

    /// Move the rect by `offset`, keeping its size.
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.pos.x.max(other.pos.x);
        let y1 = self.pos.y.max(other.pos.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with floating point channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new RGBA color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Add `amount` to the red, green and blue channels (alpha untouched).
    #[inline]
    pub fn brighten(self, amount: f32) -> Self {
        self.tint(amount, amount, amount)
    }

    /// Add a per-channel offset to the color (alpha untouched).
    #[inline]
    pub fn tint(self, dr: f32, dg: f32, db: f32) -> Self {
        Self {
            r: self.r + dr,
            g: self.g + dg,
            b: self.b + db,
            a: self.a,
        }
    }

    /// Check if color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Check if color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Alpha blend src over dst (Porter-Duff "over" operation).
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }

        let sa = src.a.clamp(0.0, 1.0);
        let da = dst.a.clamp(0.0, 1.0);
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let mix = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
        Self {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: out_a,
        }
    }

    /// Quantize to 8-bit RGB channels, clamping out-of-range values.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

// =============================================================================
// Tests
// =============================================================================
