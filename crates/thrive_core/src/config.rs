//! Board and session configuration.
//!
//! Configs are plain data deserialized from RON. Every field has a default,
//! so a config file only needs to name the values it changes.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::terrain::TerrainKind;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
        }
    }
}

/// Selection weight for one terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainWeight {
    /// Terrain kind this weight applies to.
    pub kind: TerrainKind,
    /// Relative weight; need not sum to one.
    pub weight: f64,
}

impl TerrainWeight {
    /// Create a new terrain weight.
    #[must_use]
    pub const fn new(kind: TerrainKind, weight: f64) -> Self {
        Self { kind, weight }
    }
}

/// Layout and terrain parameters for one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Tile size in pixels.
    pub tile_size: f64,
    /// Extra horizontal gap between columns.
    pub gap_x: f64,
    /// Extra vertical gap between rows.
    pub gap_y: f64,
    /// Window the board is centered in.
    pub viewport: Viewport,
    /// Tile-width multiplier used when centering the board.
    pub extent_width_factor: f64,
    /// Tile-width multiplier used for column spacing.
    pub spacing_width_factor: f64,
    /// Per-kind selection weights.
    pub terrain_weights: Vec<TerrainWeight>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 15,
            tile_size: 15.0,
            gap_x: 7.3,
            gap_y: 4.57,
            viewport: Viewport::default(),
            extent_width_factor: 1.42,
            spacing_width_factor: 1.19,
            terrain_weights: TerrainKind::ALL
                .iter()
                .map(|&kind| TerrainWeight::new(kind, 0.5))
                .collect(),
        }
    }
}

impl GridConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub const fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the viewport the board is centered in.
    #[must_use]
    pub const fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Replace the terrain weights.
    #[must_use]
    pub fn with_weights(mut self, weights: Vec<TerrainWeight>) -> Self {
        self.terrain_weights = weights;
        self
    }

    /// Set the weight of a single terrain kind, adding it if absent.
    #[must_use]
    pub fn with_weight(mut self, kind: TerrainKind, weight: f64) -> Self {
        match self.terrain_weights.iter_mut().find(|w| w.kind == kind) {
            Some(existing) => existing.weight = weight,
            None => self.terrain_weights.push(TerrainWeight::new(kind, weight)),
        }
        self
    }

    /// Check that the config describes a board that can be laid out.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !(self.gap_x.is_finite() && self.gap_x >= 0.0) || !(self.gap_y.is_finite() && self.gap_y >= 0.0)
        {
            return Err(invalid(format!(
                "gaps must be non-negative, got ({}, {})",
                self.gap_x, self.gap_y
            )));
        }
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(invalid(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        if !(self.spacing_width_factor.is_finite() && self.spacing_width_factor > 0.0) {
            return Err(invalid(format!(
                "spacing_width_factor must be positive, got {}",
                self.spacing_width_factor
            )));
        }
        if !self.extent_width_factor.is_finite()
            || self.spacing_width_factor > self.extent_width_factor
        {
            return Err(invalid(format!(
                "spacing_width_factor ({}) must not exceed extent_width_factor ({})",
                self.spacing_width_factor, self.extent_width_factor
            )));
        }
        if self.terrain_weights.is_empty() {
            return Err(invalid("terrain_weights is empty".to_string()));
        }
        if let Some(bad) = self
            .terrain_weights
            .iter()
            .find(|w| !(w.weight.is_finite() && w.weight >= 0.0))
        {
            return Err(invalid(format!(
                "weight for {:?} must be finite and non-negative, got {}",
                bad.kind, bad.weight
            )));
        }
        if self.terrain_weights.iter().all(|w| w.weight == 0.0) {
            return Err(invalid("all terrain weights are zero".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> GameError {
    GameError::InvalidConfig(message)
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Board layout and terrain weights.
    pub grid: GridConfig,
    /// Fixed seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Parse a session config from RON text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ConfigParse`] for malformed RON and
    /// [`GameError::InvalidConfig`] for values that fail validation.
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text).map_err(GameError::ConfigParse)?;
        config.grid.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ConfigWrite`] if serialization fails.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(GameError::ConfigWrite)
    }
}
