//! Pixel-space and grid-space coordinate types.
//!
//! Pixel positions use the viewport's top-left corner as origin with y
//! growing downward. Grid coordinates are signed so that clicks outside the
//! board still map to a (out-of-bounds) cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPos {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl PixelPos {
    /// Create a new pixel position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin of the viewport.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Offset this position by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether both components are within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Integer `(col, row)` cell address on the offset hex grid.
///
/// Odd columns sit half a tile lower than even columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Whether this column is shifted down by the half-tile offset.
    #[must_use]
    pub const fn is_odd_column(self) -> bool {
        self.col.rem_euclid(2) == 1
    }

    /// Max of the absolute column and row differences.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc.max(dr)
    }

    /// Check whether the coordinate addresses a cell of a `rows × cols` grid.
    #[must_use]
    pub fn in_bounds(self, rows: u32, cols: u32) -> bool {
        self.col >= 0 && self.row >= 0 && (self.col as u32) < cols && (self.row as u32) < rows
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Top-left corner.
    pub min: PixelPos,
    /// Bottom-right corner.
    pub max: PixelPos,
}

impl BoundingBox {
    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pos: PixelPos) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let a = GridCoord::new(3, 4);
        assert_eq!(a.chebyshev_distance(a), 0);
        assert_eq!(a.chebyshev_distance(GridCoord::new(4, 5)), 1);
        assert_eq!(a.chebyshev_distance(GridCoord::new(2, 4)), 1);
        assert_eq!(a.chebyshev_distance(GridCoord::new(3, 7)), 3);
        assert_eq!(a.chebyshev_distance(GridCoord::new(-1, 4)), 4);
    }

    #[test]
    fn test_in_bounds() {
        assert!(GridCoord::new(0, 0).in_bounds(12, 15));
        assert!(GridCoord::new(14, 11).in_bounds(12, 15));
        assert!(!GridCoord::new(15, 0).in_bounds(12, 15));
        assert!(!GridCoord::new(0, 12).in_bounds(12, 15));
        assert!(!GridCoord::new(-1, 3).in_bounds(12, 15));
    }

    #[test]
    fn test_odd_column_handles_negatives() {
        assert!(!GridCoord::new(0, 0).is_odd_column());
        assert!(GridCoord::new(1, 0).is_odd_column());
        assert!(GridCoord::new(-1, 0).is_odd_column());
        assert!(!GridCoord::new(-2, 0).is_odd_column());
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox {
            min: PixelPos::new(10.0, 20.0),
            max: PixelPos::new(110.0, 70.0),
        };
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 50.0);
        assert!(bbox.contains(PixelPos::new(10.0, 20.0)));
        assert!(bbox.contains(PixelPos::new(60.0, 45.0)));
        assert!(!bbox.contains(PixelPos::new(9.9, 45.0)));
        assert!(!bbox.contains(PixelPos::new(60.0, 70.1)));
    }

    #[test]
    fn test_pixel_offset() {
        let p = PixelPos::new(3.0, 0.0).offset(-3.0, 4.0);
        assert_eq!(p, PixelPos::new(0.0, 4.0));
    }
}
