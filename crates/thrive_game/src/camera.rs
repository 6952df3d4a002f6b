//! Camera plugin and screen-space conversions.
//!
//! Board positions are top-left-origin pixels with y growing downward,
//! while Bevy's 2D world is centred with y growing upward. The camera sits
//! at the world origin, so the conversion is a fixed flip and shift by half
//! the viewport. Window cursor coordinates share the board's orientation.

use bevy::prelude::*;
use thrive_core::config::Viewport;
use thrive_core::geometry::PixelPos;

/// Plugin that spawns the fixed 2D camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

/// Marker component for the main game camera.
#[derive(Component)]
pub struct MainCamera;

/// Spawns the main 2D camera.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), MainCamera));
}

/// Convert a board pixel to a Bevy world position.
#[must_use]
pub fn pixel_to_world(pixel: PixelPos, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (pixel.x - viewport.width / 2.0) as f32,
        (viewport.height / 2.0 - pixel.y) as f32,
    )
}

/// Convert a window cursor position to a board pixel.
///
/// Both use a top-left origin with y growing downward; only the window's
/// size relative to the viewport has to be undone.
#[must_use]
pub fn cursor_to_pixel(cursor: Vec2, window_size: Vec2, viewport: Viewport) -> PixelPos {
    let scale_x = if window_size.x > 0.0 {
        viewport.width / f64::from(window_size.x)
    } else {
        1.0
    };
    let scale_y = if window_size.y > 0.0 {
        viewport.height / f64::from(window_size.y)
    } else {
        1.0
    };
    PixelPos::new(f64::from(cursor.x) * scale_x, f64::from(cursor.y) * scale_y)
}
