//! Session config validation.

use std::path::Path;

use thrive_core::config::SessionConfig;
use thrive_core::error::GameError;

use crate::{ToolError, ToolResult};

/// Read, parse and validate a session config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid RON, or holds
/// values the core rejects.
pub fn load_config(path: &Path) -> ToolResult<SessionConfig> {
    let path_str = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|e| ToolError::Io {
        path: path_str.clone(),
        source: e,
    })?;

    SessionConfig::from_ron(&contents).map_err(|e| match e {
        GameError::ConfigParse(source) => ToolError::Parse {
            path: path_str,
            source,
        },
        other => ToolError::Game(other),
    })
}

/// Default session config as pretty RON, ready to save and edit.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized.
pub fn default_config_text() -> ToolResult<String> {
    Ok(SessionConfig::default().to_ron()?)
}

/// Validate a session config file and summarize it.
///
/// # Errors
///
/// Returns an error if the config fails to load.
pub fn validate_config_file(path: &Path) -> ToolResult<String> {
    let config = load_config(path)?;
    let grid = &config.grid;
    let total: f64 = grid.terrain_weights.iter().map(|w| w.weight).sum();

    let mut summary = format!(
        "{}x{} board, tile {} px, gaps ({}, {}), viewport {}x{}",
        grid.rows,
        grid.cols,
        grid.tile_size,
        grid.gap_x,
        grid.gap_y,
        grid.viewport.width,
        grid.viewport.height
    );
    for weight in &grid.terrain_weights {
        summary.push_str(&format!(
            "\n  {:?}: {:.1}%",
            weight.kind,
            100.0 * weight.weight / total
        ));
    }
    if let Some(seed) = config.seed {
        summary.push_str(&format!("\n  seed: {seed}"));
    }

    Ok(summary)
}
