//! Background and terrain tile sprites.
//!
//! Both are spawned once at startup from the session; the board never
//! changes after generation.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use thrive_core::layout::background_tiles;

use crate::camera::pixel_to_world;
use crate::components::{
    BackgroundTile, BoardSession, TerrainTile, Z_LAYER_BACKGROUND, Z_LAYER_TILES,
};
use crate::sprites::SpriteAssets;

/// Plugin that draws the background pattern and the terrain grid.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_background, spawn_terrain_tiles));
    }
}

/// Tiles the background texture across the whole window.
fn spawn_background(
    mut commands: Commands,
    board: Res<BoardSession>,
    sprites: Res<SpriteAssets>,
) {
    let config = board.session.config();
    let positions = background_tiles(config.viewport, config.tile_size);

    for pixel in &positions {
        let world = pixel_to_world(*pixel, config.viewport);
        commands.spawn((
            SpriteBundle {
                texture: sprites.background.clone(),
                sprite: Sprite {
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                transform: Transform::from_translation(world.extend(Z_LAYER_BACKGROUND)),
                ..default()
            },
            BackgroundTile,
        ));
    }

    tracing::debug!("Spawned {} background tiles", positions.len());
}

/// Spawns one sprite per terrain cell at its layout position.
fn spawn_terrain_tiles(
    mut commands: Commands,
    board: Res<BoardSession>,
    sprites: Res<SpriteAssets>,
) {
    let viewport = board.session.config().viewport;
    let mut spawned = 0usize;

    for cell in board.session.terrain().cells() {
        let Some(texture) = sprites.tile(cell.terrain_kind) else {
            tracing::warn!("No texture for {:?}", cell.terrain_kind);
            continue;
        };
        let world = pixel_to_world(cell.pixel_position, viewport);
        commands.spawn((
            SpriteBundle {
                texture,
                sprite: Sprite {
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                transform: Transform::from_translation(world.extend(Z_LAYER_TILES)),
                ..default()
            },
            TerrainTile,
        ));
        spawned += 1;
    }

    tracing::info!("Spawned {spawned} terrain tiles");
}
