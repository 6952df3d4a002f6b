//! Offset hex-grid layout and terrain generation.
//!
//! The board is centered in the viewport. Columns are spaced by
//! `spacing_width_factor * tile + gap_x`, rows by `sqrt(3) * tile + gap_y`,
//! and odd columns are pushed down by half a tile height to form the
//! brick-style hex pattern.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GridConfig, Viewport};
use crate::error::{GameError, Result};
use crate::geometry::{BoundingBox, GridCoord, PixelPos};
use crate::terrain::{TerrainCell, TerrainGrid, TerrainKind};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Precomputed pixel geometry of a grid config.
///
/// This is the coordinate mapper: it converts in both directions between
/// grid coordinates and top-left tile pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    origin: PixelPos,
    horizontal_spacing: f64,
    vertical_spacing: f64,
    column_offset: f64,
    extent: PixelPos,
}

impl GridLayout {
    /// Derive the layout from a config.
    ///
    /// The config is not validated here; see [`GridConfig::validate`].
    #[must_use]
    pub fn new(config: &GridConfig) -> Self {
        let tile = config.tile_size;
        let tile_height = SQRT_3 * tile;
        let vertical_spacing = tile_height + config.gap_y;

        let extent = PixelPos::new(
            f64::from(config.cols) * (config.extent_width_factor * tile + config.gap_x),
            f64::from(config.rows) * vertical_spacing,
        );
        let origin = PixelPos::new(
            (config.viewport.width - extent.x) / 2.0,
            (config.viewport.height - extent.y) / 2.0,
        );

        Self {
            rows: config.rows,
            cols: config.cols,
            origin,
            horizontal_spacing: config.spacing_width_factor * tile + config.gap_x,
            vertical_spacing,
            column_offset: tile_height / 2.0,
            extent,
        }
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

    /// Top-left corner of the centered board, `(start_x, start_y)`.
    #[must_use]
    pub const fn origin(&self) -> PixelPos {
        self.origin
    }

    /// Distance between adjacent column origins.
    #[must_use]
    pub const fn horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    /// Distance between adjacent rows in the same column.
    #[must_use]
    pub const fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Extra downward shift applied to odd columns.
    #[must_use]
    pub const fn column_offset(&self) -> f64 {
        self.column_offset
    }

    /// The centered extent used to place the board in the viewport.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: self.origin,
            max: self.origin.offset(self.extent.x, self.extent.y),
        }
    }

    /// Whether a coordinate addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.in_bounds(self.rows, self.cols)
    }

    /// Top-left pixel position of a cell. Defined for any coordinate.
    #[must_use]
    pub fn cell_to_pixel(&self, coord: GridCoord) -> PixelPos {
        let parity = if coord.is_odd_column() { 1.0 } else { 0.0 };
        PixelPos::new(
            self.origin.x + f64::from(coord.col) * self.horizontal_spacing,
            self.origin.y
                + f64::from(coord.row) * self.vertical_spacing
                + parity * self.column_offset,
        )
    }

    /// Map a pixel to the cell whose position it is nearest to.
    ///
    /// The column is rounded first, then the row is rounded after removing
    /// that column's parity offset. Pixels near a boundary may land on either
    /// neighbour. Pixels off the board yield out-of-bounds coordinates.
    #[must_use]
    pub fn pixel_to_cell(&self, pixel: PixelPos) -> GridCoord {
        let col = ((pixel.x - self.origin.x) / self.horizontal_spacing).round() as i32;
        let parity = if col.rem_euclid(2) == 1 { 1.0 } else { 0.0 };
        let row = ((pixel.y - self.origin.y - parity * self.column_offset) / self.vertical_spacing)
            .round() as i32;
        GridCoord::new(col, row)
    }

    /// Every cell coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| GridCoord::new(col, row)))
    }
}

/// Generate the terrain grid and its spawn candidates.
///
/// Each cell draws its terrain independently from the configured weights.
/// The returned positions are the non-water cells in row-major order.
///
/// # Errors
///
/// Returns [`GameError::InvalidConfig`] if the config fails validation.
pub fn generate_terrain<R: Rng + ?Sized>(
    config: &GridConfig,
    rng: &mut R,
) -> Result<(TerrainGrid, Vec<PixelPos>)> {
    config.validate()?;

    let layout = GridLayout::new(config);
    let kinds: Vec<TerrainKind> = config.terrain_weights.iter().map(|w| w.kind).collect();
    let dist = WeightedIndex::new(config.terrain_weights.iter().map(|w| w.weight))
        .map_err(|e| GameError::InvalidConfig(format!("terrain weights: {e}")))?;

    let cells: Vec<TerrainCell> = layout
        .coords()
        .map(|coord| TerrainCell {
            terrain_kind: kinds[dist.sample(rng)],
            pixel_position: layout.cell_to_pixel(coord),
            coord,
        })
        .collect();

    let grid = TerrainGrid::from_cells(config.rows, config.cols, cells).ok_or_else(|| {
        GameError::InvalidConfig(format!(
            "cell count does not match {}x{}",
            config.rows, config.cols
        ))
    })?;
    let spawn_candidates = grid.spawn_candidates();

    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        spawn_candidates = spawn_candidates.len(),
        "Generated terrain"
    );

    Ok((grid, spawn_candidates))
}

/// Top-left positions of the square background tiles covering a viewport.
#[must_use]
pub fn background_tiles(viewport: Viewport, tile_size: f64) -> Vec<PixelPos> {
    if tile_size.is_nan() || tile_size <= 0.0 {
        return Vec::new();
    }
    let across = (viewport.width / tile_size).ceil().max(0.0) as u32;
    let down = (viewport.height / tile_size).ceil().max(0.0) as u32;

    (0..down)
        .flat_map(|row| {
            (0..across).map(move |col| {
                PixelPos::new(f64::from(col) * tile_size, f64::from(row) * tile_size)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainWeight;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-6;

    fn small_config() -> GridConfig {
        GridConfig {
            rows: 2,
            cols: 2,
            tile_size: 15.0,
            gap_x: 7.3,
            gap_y: 4.57,
            ..GridConfig::default()
        }
    }

    #[test]
    fn test_two_by_two_positions_match_formula() {
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (grid, _) = generate_terrain(&config, &mut rng).unwrap();

        let start_x = (700.0 - 2.0 * (15.0 * 1.42 + 7.3)) / 2.0;
        let start_y = (500.0 - 2.0 * (15.0 * 3f64.sqrt() + 4.57)) / 2.0;
        let h = 15.0 * 1.19 + 7.3;
        let v = 15.0 * 3f64.sqrt() + 4.57;
        let half = 15.0 * 3f64.sqrt() / 2.0;

        let expected = [
            PixelPos::new(start_x, start_y),
            PixelPos::new(start_x + h, start_y + half),
            PixelPos::new(start_x, start_y + v),
            PixelPos::new(start_x + h, start_y + v + half),
        ];

        let actual: Vec<_> = grid.cells().map(|c| c.pixel_position).collect();
        assert_eq!(actual.len(), 4);
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(a.approx_eq(*e, EPS), "expected {e:?}, got {a:?}");
        }
        assert!((start_x - 321.4).abs() < EPS);
    }

    #[test]
    fn test_cell_count_and_unique_positions() {
        let config = GridConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let (grid, _) = generate_terrain(&config, &mut rng).unwrap();

        assert_eq!(grid.len(), 12 * 15);
        let positions: Vec<_> = grid.cells().map(|c| c.pixel_position).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(!a.approx_eq(*b, EPS), "duplicate position {a:?}");
            }
        }
    }

    #[test]
    fn test_positions_inside_bounding_box() {
        let config = GridConfig::default();
        let layout = GridLayout::new(&config);
        let bbox = layout.bounding_box();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (grid, _) = generate_terrain(&config, &mut rng).unwrap();

        for cell in grid.cells() {
            assert!(bbox.contains(cell.pixel_position), "{cell:?} outside {bbox:?}");
        }
    }

    #[test]
    fn test_odd_columns_shift_down() {
        let layout = GridLayout::new(&GridConfig::default());
        let even = layout.cell_to_pixel(GridCoord::new(2, 3));
        let odd = layout.cell_to_pixel(GridCoord::new(3, 3));
        assert!((odd.y - even.y - layout.column_offset()).abs() < EPS);
        assert!((odd.x - even.x - layout.horizontal_spacing()).abs() < EPS);
    }

    #[test]
    fn test_pixel_to_cell_round_trip() {
        let layout = GridLayout::new(&GridConfig::default());
        for coord in layout.coords() {
            assert_eq!(layout.pixel_to_cell(layout.cell_to_pixel(coord)), coord);
        }
    }

    #[test]
    fn test_pixel_to_cell_tolerates_small_offsets() {
        let layout = GridLayout::new(&GridConfig::default());
        let coord = GridCoord::new(5, 4);
        let pos = layout.cell_to_pixel(coord);
        let nudged = pos.offset(
            layout.horizontal_spacing() * 0.4,
            layout.vertical_spacing() * 0.4,
        );
        assert_eq!(layout.pixel_to_cell(nudged), coord);
    }

    #[test]
    fn test_pixel_to_cell_out_of_range() {
        let layout = GridLayout::new(&GridConfig::default());
        let far_left = layout.pixel_to_cell(PixelPos::new(0.0, 0.0));
        assert!(!layout.contains(far_left));
        assert!(far_left.col < 0);

        let far_right = layout.pixel_to_cell(PixelPos::new(10_000.0, 10_000.0));
        assert!(!layout.contains(far_right));
    }

    #[test]
    fn test_water_only_weights_give_no_candidates() {
        let config = small_config().with_weights(vec![TerrainWeight::new(TerrainKind::Water, 1.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let (grid, candidates) = generate_terrain(&config, &mut rng).unwrap();
        assert_eq!(grid.count(TerrainKind::Water), 4);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_candidates_are_non_water_in_row_major_order() {
        let config = GridConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let (grid, candidates) = generate_terrain(&config, &mut rng).unwrap();
        let expected: Vec<_> = grid
            .cells()
            .filter(|c| c.terrain_kind != TerrainKind::Water)
            .map(|c| c.pixel_position)
            .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_equal_weights_are_roughly_uniform() {
        let config = GridConfig::default().with_size(40, 25);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let (grid, _) = generate_terrain(&config, &mut rng).unwrap();

        let n = grid.len() as f64;
        assert_eq!(grid.len(), 1000);
        let p = 1.0 / 7.0;
        let sigma = (n * p * (1.0 - p)).sqrt();
        for kind in TerrainKind::ALL {
            let count = grid.count(kind) as f64;
            assert!(
                (count - n * p).abs() <= 5.0 * sigma,
                "{kind:?} appeared {count} times, expected {} ± {}",
                n * p,
                5.0 * sigma
            );
        }
    }

    #[test]
    fn test_zero_weight_kind_never_appears() {
        let config = GridConfig::default().with_weight(TerrainKind::Desert1, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let (grid, _) = generate_terrain(&config, &mut rng).unwrap();
        assert_eq!(grid.count(TerrainKind::Desert1), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GridConfig::default().with_size(0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            generate_terrain(&config, &mut rng),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let config = GridConfig::default();
        let (a, _) = generate_terrain(&config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let (b, _) = generate_terrain(&config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_background_tiles_cover_viewport() {
        let tiles = background_tiles(Viewport::default(), 15.0);
        // ceil(700 / 15) = 47, ceil(500 / 15) = 34
        assert_eq!(tiles.len(), 47 * 34);
        assert_eq!(tiles[0], PixelPos::ZERO);
        assert_eq!(tiles[1], PixelPos::new(15.0, 0.0));
        assert_eq!(tiles[47], PixelPos::new(0.0, 15.0));
        assert!(tiles.iter().all(|t| t.x < 700.0 && t.y < 500.0));
        assert!(background_tiles(Viewport::default(), 0.0).is_empty());
    }
}
