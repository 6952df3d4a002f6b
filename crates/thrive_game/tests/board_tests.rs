//! Board spawning tests.
//!
//! Run the startup systems headless with placeholder textures.

use bevy::prelude::*;
use thrive_core::layout::background_tiles;
use thrive_core::terrain::TerrainKind;
use thrive_test_utils::fixtures;

use thrive_game::board::BoardPlugin;
use thrive_game::components::{BackgroundTile, BoardSession, TerrainTile};
use thrive_game::sprites::SpriteAssets;

fn placeholder_sprites() -> SpriteAssets {
    let mut sprites = SpriteAssets::default();
    for (i, kind) in TerrainKind::ALL.into_iter().enumerate() {
        sprites.tiles.insert(kind, Handle::weak_from_u128(100 + i as u128));
    }
    sprites.background = Handle::weak_from_u128(99);
    sprites.loaded = true;
    sprites
}

fn count<T: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<T>>();
    query.iter(app.world()).count()
}

#[test]
fn startup_spawns_one_tile_per_cell() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(BoardPlugin);
    app.insert_resource(BoardSession::new(fixtures::land_session()));
    app.insert_resource(placeholder_sprites());

    app.update();

    let config = app.world().resource::<BoardSession>().session.config().clone();
    assert_eq!(count::<TerrainTile>(&mut app), (config.rows * config.cols) as usize);
    assert_eq!(
        count::<BackgroundTile>(&mut app),
        background_tiles(config.viewport, config.tile_size).len()
    );
}

#[test]
fn missing_texture_skips_tiles() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(BoardPlugin);
    app.insert_resource(BoardSession::new(fixtures::land_session()));
    app.insert_resource(SpriteAssets::default());

    app.update();

    assert_eq!(count::<TerrainTile>(&mut app), 0);
}
