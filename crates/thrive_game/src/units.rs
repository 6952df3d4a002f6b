//! Unit sprites: spawning, frame animation and position sync.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use thrive_core::animation::FrameAnimation;
use thrive_core::config::Viewport;
use thrive_core::geometry::PixelPos;
use thrive_core::session::Side;

use crate::camera::pixel_to_world;
use crate::components::{
    BoardSession, UnitAnimation, UnitSprite, UNIT_SPRITE_OFFSET, Z_LAYER_UNITS,
};
use crate::input::apply_tile_clicks;
use crate::sprites::SpriteAssets;

/// Plugin that draws and animates both units.
pub struct UnitPlugin;

impl Plugin for UnitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_units)
            .add_systems(
                Update,
                (animate_units, sync_unit_transforms.after(apply_tile_clicks)),
            );
    }
}

/// World translation of a unit sprite's top-left corner.
#[must_use]
pub fn unit_translation(position: PixelPos, viewport: Viewport) -> Vec3 {
    let (dx, dy) = UNIT_SPRITE_OFFSET;
    pixel_to_world(position.offset(dx, dy), viewport).extend(Z_LAYER_UNITS)
}

/// Spawns one animated sprite per side at its unit's cell.
fn spawn_units(mut commands: Commands, board: Res<BoardSession>, sprites: Res<SpriteAssets>) {
    let viewport = board.session.config().viewport;

    for side in Side::ALL {
        let position = board.session.unit_position(side);
        commands.spawn((
            SpriteBundle {
                texture: sprites.frame(side, 0).unwrap_or_default(),
                sprite: Sprite {
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                transform: Transform::from_translation(unit_translation(position, viewport)),
                ..default()
            },
            UnitSprite { side },
            UnitAnimation(FrameAnimation::unit_walk()),
        ));
        tracing::debug!("Spawned {} unit sprite at {position}", side.label());
    }
}

/// Advances each unit's animation by the frame's elapsed time and swaps
/// its texture when the frame changes.
pub fn animate_units(
    time: Res<Time>,
    sprites: Res<SpriteAssets>,
    mut units: Query<(&UnitSprite, &mut UnitAnimation, &mut Handle<Image>)>,
) {
    if !sprites.loaded {
        return;
    }
    let delta = time.delta_seconds();
    for (unit, mut animation, mut texture) in &mut units {
        if !animation.0.advance(delta) {
            continue;
        }
        if let Some(handle) = sprites.frame(unit.side, animation.0.current_frame()) {
            *texture = handle;
        }
    }
}

/// Moves unit sprites to the cells the session reports.
pub fn sync_unit_transforms(
    board: Res<BoardSession>,
    mut units: Query<(&UnitSprite, &mut Transform)>,
) {
    let viewport = board.session.config().viewport;
    for (unit, mut transform) in &mut units {
        let target = unit_translation(board.session.unit_position(unit.side), viewport);
        if transform.translation != target {
            transform.translation = target;
        }
    }
}
