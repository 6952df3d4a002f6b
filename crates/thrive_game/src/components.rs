//! Game component wrappers for Bevy.
//!
//! thrive_core types don't derive Bevy's traits, so this module provides
//! the resource and components that bridge the session to the render layer.

use bevy::prelude::*;
use thrive_core::animation::FrameAnimation;
use thrive_core::session::{GameSession, Side};

/// Z-coordinate for the background pattern.
pub const Z_LAYER_BACKGROUND: f32 = 0.0;

/// Z-coordinate for terrain tiles.
pub const Z_LAYER_TILES: f32 = 1.0;

/// Z-coordinate for unit sprites.
pub const Z_LAYER_UNITS: f32 = 2.0;

/// Offset from a unit's cell position to the top-left of its sprite.
pub const UNIT_SPRITE_OFFSET: (f64, f64) = (-16.0, -6.0);

/// The running session, shared by every system.
#[derive(Resource, Debug, Clone)]
pub struct BoardSession {
    /// The wrapped core session.
    pub session: GameSession,
}

impl BoardSession {
    /// Wrap a session.
    #[must_use]
    pub const fn new(session: GameSession) -> Self {
        Self { session }
    }
}

/// Marker for background pattern tiles.
#[derive(Component, Debug, Clone, Copy)]
pub struct BackgroundTile;

/// Marker for terrain tile sprites.
#[derive(Component, Debug, Clone, Copy)]
pub struct TerrainTile;

/// A unit sprite and the side it draws.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSprite {
    /// Which unit of the session this sprite follows.
    pub side: Side,
}

/// Animation state of a unit sprite.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct UnitAnimation(pub FrameAnimation);
