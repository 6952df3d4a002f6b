//! Adjacency and occupancy queries over the grid.
//!
//! Pixel/grid conversion itself lives on [`GridLayout`]; this module answers
//! placement questions in grid space.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::geometry::{GridCoord, PixelPos};
use crate::layout::GridLayout;

/// Check whether `cell` is within one step of the cell containing `reference`.
///
/// The reference pixel is mapped to grid space first, then compared with
/// Chebyshev distance. A cell counts as adjacent to itself.
#[must_use]
pub fn is_adjacent(layout: &GridLayout, reference: PixelPos, cell: GridCoord) -> bool {
    layout.pixel_to_cell(reference).chebyshev_distance(cell) <= 1
}

/// Set of cells currently holding a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    cells: HashSet<GridCoord>,
}

impl Occupancy {
    /// Create an empty occupancy set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell as occupied. Returns `false` if it already was.
    pub fn occupy(&mut self, cell: GridCoord) -> bool {
        self.cells.insert(cell)
    }

    /// Mark a cell as free. Returns `false` if it was not occupied.
    pub fn vacate(&mut self, cell: GridCoord) -> bool {
        self.cells.remove(&cell)
    }

    /// Move an occupant from one cell to another.
    pub fn relocate(&mut self, from: GridCoord, to: GridCoord) {
        self.vacate(from);
        self.occupy(to);
    }

    /// Whether no unit stands on `cell`.
    #[must_use]
    pub fn is_empty(&self, cell: GridCoord) -> bool {
        !self.cells.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_adjacent_neighbours() {
        let layout = GridLayout::new(&GridConfig::default());
        let spawn = layout.cell_to_pixel(GridCoord::new(4, 4));

        assert!(is_adjacent(&layout, spawn, GridCoord::new(4, 4)));
        assert!(is_adjacent(&layout, spawn, GridCoord::new(5, 5)));
        assert!(is_adjacent(&layout, spawn, GridCoord::new(3, 3)));
        assert!(is_adjacent(&layout, spawn, GridCoord::new(4, 5)));
        assert!(!is_adjacent(&layout, spawn, GridCoord::new(6, 4)));
        assert!(!is_adjacent(&layout, spawn, GridCoord::new(4, 2)));
    }

    #[test]
    fn test_adjacency_uses_grid_units() {
        // Spawn pixels are hundreds of pixels from the origin; comparing them
        // directly against grid indices would never be adjacent.
        let layout = GridLayout::new(&GridConfig::default());
        let spawn = layout.cell_to_pixel(GridCoord::new(0, 0));
        assert!(spawn.x > 100.0);
        assert!(is_adjacent(&layout, spawn, GridCoord::new(1, 0)));
    }

    #[test]
    fn test_occupancy() {
        let mut occupancy = Occupancy::new();
        let a = GridCoord::new(1, 1);
        let b = GridCoord::new(2, 1);

        assert!(occupancy.is_empty(a));
        assert!(occupancy.occupy(a));
        assert!(!occupancy.occupy(a));
        assert!(!occupancy.is_empty(a));

        occupancy.relocate(a, b);
        assert!(occupancy.is_empty(a));
        assert!(!occupancy.is_empty(b));
        assert_eq!(occupancy, {
            let mut only_b = Occupancy::new();
            only_b.occupy(b);
            only_b
        });

        assert!(occupancy.vacate(b));
        assert!(!occupancy.vacate(b));
    }
}
