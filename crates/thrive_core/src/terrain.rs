//! Terrain kinds and the generated terrain grid.

use serde::{Deserialize, Serialize};

use crate::geometry::{GridCoord, PixelPos};

/// Terrain painted on a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Grass, first variant.
    Grass1,
    /// Grass, second variant.
    Grass2,
    /// Grass, third variant.
    Grass3,
    /// Desert, first variant.
    Desert1,
    /// Desert, second variant.
    Desert2,
    /// Desert, third variant.
    Desert3,
    /// Open water. Units never spawn here.
    Water,
}

impl TerrainKind {
    /// Every terrain kind, in asset order.
    pub const ALL: [Self; 7] = [
        Self::Grass1,
        Self::Grass2,
        Self::Grass3,
        Self::Desert1,
        Self::Desert2,
        Self::Desert3,
        Self::Water,
    ];

    /// Name of the tile image (without extension).
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Grass1 => "GrassTile1",
            Self::Grass2 => "GrassTile2",
            Self::Grass3 => "GrassTile3",
            Self::Desert1 => "DesertTile1",
            Self::Desert2 => "DesertTile2",
            Self::Desert3 => "DesertTile3",
            Self::Water => "WaterTile",
        }
    }

    /// Single-character glyph for text previews.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Grass1 | Self::Grass2 | Self::Grass3 => '"',
            Self::Desert1 | Self::Desert2 | Self::Desert3 => '.',
            Self::Water => '~',
        }
    }

    /// Whether the terrain is water.
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::Water)
    }
}

/// One generated tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainCell {
    /// Terrain painted on this tile.
    pub terrain_kind: TerrainKind,
    /// Top-left pixel position of the tile.
    pub pixel_position: PixelPos,
    /// Grid address of the tile.
    pub coord: GridCoord,
}

/// Fixed-size `rows × cols` grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainGrid {
    rows: u32,
    cols: u32,
    cells: Vec<TerrainCell>,
}

impl TerrainGrid {
    /// Build a grid from row-major cells.
    ///
    /// Returns `None` if `cells.len() != rows * cols`.
    #[must_use]
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<TerrainCell>) -> Option<Self> {
        if cells.len() != (rows as usize) * (cols as usize) {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a grid coordinate.
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<&TerrainCell> {
        if !coord.in_bounds(self.rows, self.cols) {
            return None;
        }
        let idx = coord.row as usize * self.cols as usize + coord.col as usize;
        self.cells.get(idx)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &TerrainCell> {
        self.cells.iter()
    }

    /// Iterate the grid one row at a time.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[TerrainCell]> {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Pixel positions of every non-water cell, in row-major order.
    #[must_use]
    pub fn spawn_candidates(&self) -> Vec<PixelPos> {
        self.cells
            .iter()
            .filter(|cell| !cell.terrain_kind.is_water())
            .map(|cell| cell.pixel_position)
            .collect()
    }

    /// Count cells of a given terrain kind.
    #[must_use]
    pub fn count(&self, kind: TerrainKind) -> usize {
        self.cells.iter().filter(|c| c.terrain_kind == kind).count()
    }
}
