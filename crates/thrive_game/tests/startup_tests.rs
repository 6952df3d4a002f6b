//! Startup checks against the shipped asset directory.

use std::path::PathBuf;

use thrive_core::session::GameSession;
use thrive_game::data_loader::{load_session_config, SESSION_CONFIG_PATH};
use thrive_game::AssetManifest;

fn shipped_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn shipped_assets_are_complete() {
    AssetManifest::standard()
        .verify(&shipped_assets())
        .expect("every sprite is shipped");
}

#[test]
fn shipped_config_builds_a_session() {
    let config = load_session_config(&shipped_assets().join(SESSION_CONFIG_PATH)).unwrap();
    assert_eq!(config.grid.rows, 12);
    assert_eq!(config.grid.cols, 15);

    let session = GameSession::new(config.grid, 42).unwrap();
    assert_eq!(session.terrain().len(), 180);
}
