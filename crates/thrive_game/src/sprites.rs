//! Sprite asset verification, loading and lookup.
//!
//! Every texture the board needs is listed in an [`AssetManifest`]. The
//! manifest is checked against the asset directory before the window opens,
//! so a missing file fails startup instead of drawing an empty sprite.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use thiserror::Error;
use thrive_core::animation::UNIT_FRAME_COUNT;
use thrive_core::session::Side;
use thrive_core::terrain::TerrainKind;

/// Path of the background pattern texture, relative to the asset root.
pub const BACKGROUND_TEXTURE: &str = "Background/Green.png";

/// Errors raised while locating sprite assets.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    /// One or more required textures are not on disk.
    #[error("Missing {} asset(s) under '{}': {}", .paths.len(), .root.display(), format_paths(.paths))]
    Missing {
        /// Asset root that was searched.
        root: PathBuf,
        /// Relative paths that were not found.
        paths: Vec<String>,
    },
}

fn format_paths(paths: &[String]) -> String {
    paths.join(", ")
}

/// Locate the asset directory.
///
/// Honours `BEVY_ASSET_ROOT` and `CARGO_MANIFEST_DIR` the way Bevy's file
/// asset reader does, falling back to the executable's directory.
#[must_use]
pub fn asset_root() -> PathBuf {
    let base = std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_default();
    base.join("assets")
}

/// Relative asset path of a terrain tile texture.
#[must_use]
pub fn tile_texture(kind: TerrainKind) -> String {
    format!("Tiles/{}.png", kind.asset_name())
}

/// Relative asset path of one animation frame for a side's unit.
///
/// `frame` is zero-based; files on disk are numbered from 1.
#[must_use]
pub fn unit_frame_texture(side: Side, frame: usize) -> String {
    let number = frame + 1;
    match side {
        Side::Player => format!("PlayerAnimals/Wof/WofyAni/Wof{number}.png"),
        Side::Ai => format!("PlayerAnimals/Snek/SnekyAni/Snek{number}.png"),
    }
}

/// Every texture the client draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    paths: Vec<String>,
}

impl AssetManifest {
    /// Tiles for all terrain kinds, the background and both units' frames.
    #[must_use]
    pub fn standard() -> Self {
        let mut paths: Vec<String> = TerrainKind::ALL.iter().map(|&k| tile_texture(k)).collect();
        paths.push(BACKGROUND_TEXTURE.to_string());
        for side in Side::ALL {
            paths.extend((0..UNIT_FRAME_COUNT).map(|frame| unit_frame_texture(side, frame)));
        }
        Self { paths }
    }

    /// Relative paths in the manifest.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Check that every listed file exists under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetLoadError::Missing`] naming every absent file.
    pub fn verify(&self, root: &Path) -> Result<(), AssetLoadError> {
        let missing: Vec<String> = self
            .paths
            .iter()
            .filter(|path| !root.join(path).is_file())
            .cloned()
            .collect();

        if missing.is_empty() {
            tracing::info!("Verified {} sprite assets in {}", self.paths.len(), root.display());
            Ok(())
        } else {
            Err(AssetLoadError::Missing {
                root: root.to_path_buf(),
                paths: missing,
            })
        }
    }
}

/// Plugin for loading sprite assets.
pub struct SpriteLoaderPlugin;

impl Plugin for SpriteLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteAssets>()
            .add_systems(PreStartup, load_sprite_assets);
    }
}

/// Resource containing handles to all sprite textures.
#[derive(Resource, Default)]
pub struct SpriteAssets {
    /// Tile textures by terrain kind.
    pub tiles: HashMap<TerrainKind, Handle<Image>>,
    /// Background pattern texture.
    pub background: Handle<Image>,
    /// Animation frames by side, in playback order.
    pub unit_frames: HashMap<Side, Vec<Handle<Image>>>,
    /// Whether assets have been loaded.
    pub loaded: bool,
}

impl SpriteAssets {
    /// Get the tile texture for a terrain kind.
    #[must_use]
    pub fn tile(&self, kind: TerrainKind) -> Option<Handle<Image>> {
        self.tiles.get(&kind).cloned()
    }

    /// Get one animation frame for a side. Out-of-range frames wrap.
    #[must_use]
    pub fn frame(&self, side: Side, frame: usize) -> Option<Handle<Image>> {
        let frames = self.unit_frames.get(&side)?;
        if frames.is_empty() {
            return None;
        }
        frames.get(frame % frames.len()).cloned()
    }
}

/// System to load all sprite assets at startup.
fn load_sprite_assets(mut sprites: ResMut<SpriteAssets>, asset_server: Res<AssetServer>) {
    for kind in TerrainKind::ALL {
        let handle = asset_server.load(tile_texture(kind));
        sprites.tiles.insert(kind, handle);
    }

    sprites.background = asset_server.load(BACKGROUND_TEXTURE);

    for side in Side::ALL {
        let frames = (0..UNIT_FRAME_COUNT)
            .map(|frame| asset_server.load(unit_frame_texture(side, frame)))
            .collect();
        sprites.unit_frames.insert(side, frames);
    }

    sprites.loaded = true;
    tracing::info!("Loaded sprite assets");
}
