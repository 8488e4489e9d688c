#![forbid(unsafe_code)]

//! Pixel geometry primitives shared across the workspace.
//!
//! All units are signed pixels (`i32`). Widths a solver writes back can be
//! negative (a margin larger than the computed share is surfaced as
//! computed, not clamped), so the shared value types are signed throughout
//! rather than mixing signed and unsigned at the solver boundary.

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A zero-by-zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Whether the size has no usable extent in either dimension.
    ///
    /// A container measuring under one pixel in both dimensions is not
    /// displayed (`display: none` or detached); layout skips it entirely.
    #[inline]
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.width < 1 && self.height < 1
    }
}

/// Per-side pixel thicknesses: margins, borders, or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Top thickness.
    pub top: i32,
    /// Right thickness.
    pub right: i32,
    /// Bottom thickness.
    pub bottom: i32,
    /// Left thickness.
    pub left: i32,
}

impl Edges {
    /// Zero thickness on every side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create edges from explicit per-side values (top, right, bottom, left).
    #[inline]
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform thickness on all four sides.
    #[inline]
    #[must_use]
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left/right thickness only.
    #[inline]
    #[must_use]
    pub const fn horizontal_only(value: i32) -> Self {
        Self::new(0, value, 0, value)
    }

    /// Combined left + right thickness.
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top + bottom thickness.
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_requires_both_dimensions() {
        assert!(Size::ZERO.is_collapsed());
        assert!(Size::new(0, -3).is_collapsed());
        assert!(!Size::new(0, 200).is_collapsed());
        assert!(!Size::new(500, 0).is_collapsed());
    }

    #[test]
    fn edges_sums() {
        let e = Edges::new(1, 2, 3, 4);
        assert_eq!(e.horizontal(), 6);
        assert_eq!(e.vertical(), 4);
        assert_eq!(Edges::all(5).horizontal(), 10);
        assert_eq!(Edges::horizontal_only(7).vertical(), 0);
        assert_eq!(Edges::horizontal_only(7).horizontal(), 14);
    }

    #[test]
    fn edges_sums_saturate() {
        let e = Edges::new(0, i32::MAX, 0, i32::MAX);
        assert_eq!(e.horizontal(), i32::MAX);
    }

    #[test]
    fn size_serde_round_trip() {
        let s = Size::new(640, 480);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Size>(&json).unwrap(), s);
    }
}
