//! Game plugins for Bevy.
//!
//! This module provides the plugin groups for the game client,
//! aggregating all gameplay plugins into a single registration point.

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::board::BoardPlugin;
use crate::camera::CameraPlugin;
use crate::input::{apply_tile_clicks, InputPlugin, PlacementPlugin};
use crate::sprites::SpriteLoaderPlugin;
use crate::ui::GameUiPlugin;
use crate::units::{sync_unit_transforms, UnitPlugin};

/// Main plugin group containing all game client plugins.
///
/// Expects a [`crate::components::BoardSession`] resource to be inserted
/// before the app runs.
///
/// # Example
/// ```ignore
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .insert_resource(BoardSession::new(session))
///     .add_plugins(GamePlugins)
///     .run();
/// ```
pub struct GamePlugins;

impl PluginGroup for GamePlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(SpriteLoaderPlugin) // Load sprites before the board spawns
            .add(CameraPlugin)
            .add(BoardPlugin)
            .add(UnitPlugin)
            .add(PlacementPlugin)
            .add(InputPlugin)
            .add(GameUiPlugin)
    }
}

/// Headless plugin group for session-only testing.
///
/// Runs placement and unit sync without rendering, camera, or device input.
///
/// # Example
/// ```ignore
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(HeadlessGamePlugins)
///     .run();
/// ```
pub struct HeadlessGamePlugins;

impl PluginGroup for HeadlessGamePlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(PlacementPlugin)
            .add(HeadlessUnitSyncPlugin)
    }
}

/// Keeps unit transforms in step with the session without drawing anything.
struct HeadlessUnitSyncPlugin;

impl Plugin for HeadlessUnitSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_unit_transforms.after(apply_tile_clicks));
    }
}
