//! Session config loading for the game client.
//!
//! Reads `assets/data/session.ron`. A missing file is not an error: the
//! client falls back to the default board and logs a warning. A file that
//! exists but does not parse or validate stops startup.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use thrive_core::config::SessionConfig;
use thrive_core::error::GameError;

/// Location of the session config, relative to the asset root.
pub const SESSION_CONFIG_PATH: &str = "data/session.ron";

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// The config parsed but holds unusable values.
    #[error("Invalid config in '{path}': {source}")]
    Invalid {
        /// Path to the file.
        path: String,
        /// Validation failure.
        #[source]
        source: GameError,
    },
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Load a session config from a RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_session_from_file(path: &Path) -> DataLoadResult<SessionConfig> {
    let path_str = path.display().to_string();

    let mut file = std::fs::File::open(path).map_err(|e| DataLoadError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DataLoadError::IoError {
            path: path_str.clone(),
            source: e,
        })?;

    let config = SessionConfig::from_ron(&contents).map_err(|e| match e {
        GameError::ConfigParse(source) => DataLoadError::ParseError {
            path: path_str.clone(),
            source,
        },
        other => DataLoadError::Invalid {
            path: path_str.clone(),
            source: other,
        },
    })?;

    tracing::info!(
        "Loaded session config: {}x{} board, seed {:?}",
        config.grid.rows,
        config.grid.cols,
        config.seed
    );

    Ok(config)
}

/// Load the session config, using defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be loaded.
pub fn load_session_config(path: &Path) -> DataLoadResult<SessionConfig> {
    if !path.exists() {
        tracing::warn!(
            "Session config not found at {}, using defaults",
            path.display()
        );
        return Ok(SessionConfig::default());
    }
    load_session_from_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrive_core::terrain::TerrainKind;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("session.ron");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_session_config(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "(grid: (rows: 4, cols: 6, terrain_weights: [(kind: Desert2, weight: 1.0)]), seed: Some(7))",
        );

        let config = load_session_config(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.grid.rows, 4);
        assert_eq!(config.grid.cols, 6);
        assert_eq!(config.grid.terrain_weights[0].kind, TerrainKind::Desert2);
        assert!((config.grid.tile_size - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "(grid: (rows: \"many\"))");
        assert!(matches!(
            load_session_config(&path),
            Err(DataLoadError::ParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "(grid: (rows: 0))");
        assert!(matches!(
            load_session_config(&path),
            Err(DataLoadError::Invalid {
                source: GameError::InvalidConfig(_),
                ..
            })
        ));
    }
}
