//! Integer pixel geometry shared by the resolvers and the apply protocol.
//!
//! Window managers hand out whole-pixel rectangles, so everything here is i32.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

/// The usable rectangle of one monitor within the active workspace.
pub type WorkArea = Rect;

/// A window's outer frame, decorations included.
pub type FrameRect = Rect;

impl Rect {
    /// Construct a rectangle from origin and extents.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Extent along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Shrink and shift this rectangle until it lies inside `bounds`.
    ///
    /// The size is clamped first so the origin clamp always has room; an empty
    /// `bounds` collapses the result onto its origin.
    pub fn clamp_into(&self, bounds: &Self) -> Self {
        let width = self.width.clamp(0, bounds.width.max(0));
        let height = self.height.clamp(0, bounds.height.max(0));
        let x = self.x.clamp(bounds.x, bounds.right().saturating_sub(width).max(bounds.x));
        let y = self
            .y
            .clamp(bounds.y, bounds.bottom().saturating_sub(height).max(bounds.y));
        Self::new(x, y, width, height)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// One of the two screen axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// x / width.
    Horizontal,
    /// y / height.
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.extent(Axis::Horizontal), 30);
        assert_eq!(r.extent(Axis::Vertical), 40);
    }

    #[test]
    fn clamp_into_shifts_and_shrinks() {
        let bounds = Rect::new(100, 0, 1000, 500);
        // Fits after shifting left.
        let r = Rect::new(900, 100, 400, 200).clamp_into(&bounds);
        assert_eq!(r, Rect::new(700, 100, 400, 200));
        // Too wide: shrinks to the bounds.
        let r = Rect::new(0, -50, 2000, 100).clamp_into(&bounds);
        assert_eq!(r, Rect::new(100, 0, 1000, 100));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1,2 3x4)");
    }
}
