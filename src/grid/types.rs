//! Core types for the placement grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell address on the grid (top-left corner of a rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

impl GridPosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A span of cells, independent of where it sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub w: u32,
    pub h: u32,
}

impl GridSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Both spans are at least one cell
    pub fn is_valid(&self) -> bool {
        self.w >= 1 && self.h >= 1
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// An axis-aligned rectangle in grid units
///
/// `x`/`y` address the top-left cell (0-indexed), `w`/`h` are spans in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from a position and a size
    pub fn from_parts(position: GridPosition, size: GridSize) -> Self {
        Self::new(position.x, position.y, size.w, size.h)
    }

    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn position(&self) -> GridPosition {
        GridPosition::new(self.x, self.y)
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.w, self.h)
    }

    /// The same size moved to another top-left cell
    pub fn at(&self, position: GridPosition) -> GridRect {
        GridRect::from_parts(position, self.size())
    }

    /// The same top-left cell with another size
    pub fn resized(&self, size: GridSize) -> GridRect {
        GridRect::from_parts(self.position(), size)
    }

    /// Number of cells covered
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Check whether a cell lies inside this rectangle
    pub fn contains_cell(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Iterate every covered cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (self.y..self.bottom())
            .flat_map(move |y| (self.x..self.right()).map(move |x| GridPosition::new(x, y)))
    }

    /// Intersection of two rectangles, if they share any area
    pub fn intersection(&self, other: &GridRect) -> Option<GridRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > x && bottom > y).then(|| GridRect::new(x, y, right - x, bottom - y))
    }
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}, w: {}, h: {}}}", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = GridRect::new(2, 3, 4, 5);
        assert_eq!(rect.right(), 6);
        assert_eq!(rect.bottom(), 8);
        assert_eq!(rect.area(), 20);
    }

    #[test]
    fn test_edges_saturate() {
        let rect = GridRect::new(u32::MAX, 0, 4, 1);
        assert_eq!(rect.right(), u32::MAX);
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = GridRect::new(1, 1, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                GridPosition::new(1, 1),
                GridPosition::new(2, 1),
                GridPosition::new(1, 2),
                GridPosition::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_intersection() {
        let a = GridRect::new(0, 0, 6, 6);
        let b = GridRect::new(3, 3, 6, 6);
        assert_eq!(a.intersection(&b), Some(GridRect::new(3, 3, 3, 3)));

        // Touching edges share no area
        let c = GridRect::new(6, 0, 6, 6);
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_at_and_resized() {
        let rect = GridRect::new(0, 0, 4, 2);
        assert_eq!(rect.at(GridPosition::new(5, 6)), GridRect::new(5, 6, 4, 2));
        assert_eq!(rect.resized(GridSize::new(1, 1)), GridRect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(GridRect::new(1, 2, 3, 4).to_string(), "{x: 1, y: 2, w: 3, h: 4}");
        assert_eq!(GridPosition::new(6, 0).to_string(), "(6, 0)");
        assert_eq!(GridSize::new(6, 6).to_string(), "6x6");
    }
}
