//! Pointer and keyboard input.
//!
//! Device handling is split from session updates: [`InputPlugin`] turns
//! mouse and key presses into events, and [`PlacementPlugin`] applies those
//! events to the [`BoardSession`]. Headless tests add only the latter and
//! send events directly.

use bevy::prelude::*;
use thrive_core::geometry::PixelPos;
use thrive_core::session::PlacementOutcome;

use crate::camera::cursor_to_pixel;
use crate::components::BoardSession;

/// A primary click on the board, in board pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TileClicked {
    /// Clicked position.
    pub pixel: PixelPos,
}

/// A request to change the placement mode.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRequest {
    /// Enter placement mode.
    Begin,
    /// Leave placement mode without moving.
    Cancel,
}

/// Most recent placement result, for UI and tests.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct LastPlacement(pub Option<PlacementOutcome>);

/// Plugin that routes placement events through the session.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TileClicked>()
            .add_event::<PlacementRequest>()
            .init_resource::<LastPlacement>()
            .add_systems(
                Update,
                (apply_placement_requests, apply_tile_clicks).chain(),
            );
    }
}

/// Plugin for mouse and keyboard handling.
///
/// Provides:
/// - Left click to place the player unit while placing. The fixed camera
///   shows the viewport one-to-one, so cursor coordinates are board pixels
///   up to window scaling.
/// - Right click or Escape to cancel placement
/// - `P` to begin placement (dev-tools builds only)
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (emit_tile_clicks, emit_cancel_requests).after(bevy::input::InputSystem),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            PreUpdate,
            emit_begin_requests.after(bevy::input::InputSystem),
        );
    }
}

/// Applies mode change requests. Each request clears the last placement
/// result so a fresh placement starts without a stale hint.
pub fn apply_placement_requests(
    mut requests: EventReader<PlacementRequest>,
    mut board: ResMut<BoardSession>,
    mut last: ResMut<LastPlacement>,
) {
    for request in requests.read() {
        last.0 = None;
        match request {
            PlacementRequest::Begin => board.session.begin_placement(),
            PlacementRequest::Cancel => board.session.cancel_placement(),
        }
    }
}

/// Routes clicks through the session.
pub fn apply_tile_clicks(
    mut clicks: EventReader<TileClicked>,
    mut board: ResMut<BoardSession>,
    mut last: ResMut<LastPlacement>,
) {
    for click in clicks.read() {
        tracing::debug!("Click at {}", click.pixel);
        let outcome = board.session.handle_primary_click(click.pixel);
        if outcome != PlacementOutcome::Ignored {
            last.0 = Some(outcome);
        }
    }
}

/// Converts left clicks to board pixels.
pub fn emit_tile_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    board: Res<BoardSession>,
    mut clicks: EventWriter<TileClicked>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let pixel = cursor_to_pixel(
        cursor_position,
        Vec2::new(window.width(), window.height()),
        board.session.config().viewport,
    );
    clicks.send(TileClicked { pixel });
}

/// Sends a cancel request on right click or Escape.
pub fn emit_cancel_requests(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<PlacementRequest>,
) {
    if mouse_button.just_pressed(MouseButton::Right) || keyboard.just_pressed(KeyCode::Escape) {
        requests.send(PlacementRequest::Cancel);
    }
}

/// Sends a begin request when `P` is pressed.
#[cfg(feature = "dev-tools")]
pub fn emit_begin_requests(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<PlacementRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        requests.send(PlacementRequest::Begin);
    }
}
