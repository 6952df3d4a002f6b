//! Proptest strategies for board configs and coordinates.

use proptest::prelude::*;
use thrive_core::config::{GridConfig, TerrainWeight, Viewport};
use thrive_core::geometry::GridCoord;
use thrive_core::terrain::TerrainKind;

/// Any terrain kind.
pub fn terrain_kind() -> impl Strategy<Value = TerrainKind> {
    prop::sample::select(TerrainKind::ALL.to_vec())
}

/// Weights for all seven kinds, at least one of them positive.
pub fn terrain_weights() -> impl Strategy<Value = Vec<TerrainWeight>> {
    prop::collection::vec(0.0f64..5.0, TerrainKind::ALL.len()).prop_map(|weights| {
        let mut out: Vec<TerrainWeight> = TerrainKind::ALL
            .iter()
            .zip(weights)
            .map(|(&kind, weight)| TerrainWeight::new(kind, weight))
            .collect();
        out[0].weight += 0.1;
        out
    })
}

/// A valid grid config with modest dimensions.
pub fn grid_config() -> impl Strategy<Value = GridConfig> {
    (
        1u32..20,
        1u32..20,
        4.0f64..40.0,
        0.0f64..12.0,
        0.0f64..12.0,
        200.0f64..1600.0,
        200.0f64..1200.0,
        terrain_weights(),
    )
        .prop_map(
            |(rows, cols, tile_size, gap_x, gap_y, width, height, terrain_weights)| GridConfig {
                rows,
                cols,
                tile_size,
                gap_x,
                gap_y,
                viewport: Viewport { width, height },
                terrain_weights,
                ..GridConfig::default()
            },
        )
}

/// A config paired with an in-bounds coordinate of it.
pub fn config_and_coord() -> impl Strategy<Value = (GridConfig, GridCoord)> {
    grid_config().prop_flat_map(|config| {
        let rows = config.rows as i32;
        let cols = config.cols as i32;
        (Just(config), 0..cols, 0..rows)
            .prop_map(|(config, col, row)| (config, GridCoord::new(col, row)))
    })
}
