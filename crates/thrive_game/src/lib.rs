//! # Thrive Game
//!
//! Game client for Thrive.
//!
//! This crate wraps a [`thrive_core::session::GameSession`] in Bevy for
//! rendering, UI and pointer input. All board rules live in the core; the
//! client draws what the session reports and forwards clicks to it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use thrive_core::session::GameSession;

pub mod board;
pub mod camera;
pub mod components;
pub mod data_loader;
pub mod input;
pub mod plugins;
pub mod sprites;
pub mod ui;
pub mod units;

pub use components::BoardSession;
pub use data_loader::{load_session_config, DataLoadError};
pub use plugins::{GamePlugins, HeadlessGamePlugins};
pub use sprites::{AssetLoadError, AssetManifest};

/// Run the game.
///
/// Loads the session config, checks every sprite exists, builds the session
/// and opens the window.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, an asset is missing, or
/// the board has nowhere to spawn both units.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let root = sprites::asset_root();
    let config = load_session_config(&root.join(data_loader::SESSION_CONFIG_PATH))?;
    AssetManifest::standard().verify(&root)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let session = GameSession::new(config.grid, seed)?;
    let viewport = session.config().viewport;

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Thrive".into(),
                    resolution: WindowResolution::new(
                        viewport.width as f32,
                        viewport.height as f32,
                    ),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: root.display().to_string(),
                ..default()
            })
            .set(ImagePlugin::default_nearest())
            .disable::<LogPlugin>(), // Logging already initialized in main.rs
    );

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(BoardSession::new(session));

    app.add_plugins(GamePlugins);

    #[cfg(feature = "dev-tools")]
    {
        tracing::info!("Development tools enabled, press P to place the player unit");
    }

    app.run();

    Ok(())
}
