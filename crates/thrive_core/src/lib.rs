//! # Thrive Core
//!
//! Board logic for Thrive, a two-player hex-grid prototype.
//!
//! This crate contains **only** pure logic:
//! - No rendering
//! - No IO
//! - No ambient randomness (every random draw comes from a seeded RNG)
//!
//! This separation enables:
//! - A thin rendering client
//! - Headless board previews in the developer tools
//! - Reproducible sessions from a seed
//!
//! ## Crate Structure
//!
//! - [`config`] - Grid and session configuration
//! - [`geometry`] - Pixel and grid coordinate types
//! - [`terrain`] - Terrain kinds and the terrain grid
//! - [`layout`] - Offset hex layout, terrain generation, pixel↔cell mapping
//! - [`mapping`] - Adjacency and occupancy queries
//! - [`spawn`] - Spawn point selection
//! - [`session`] - Session state and unit placement
//! - [`animation`] - Delta-time frame animation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod mapping;
pub mod session;
pub mod spawn;
pub mod terrain;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::animation::FrameAnimation;
    pub use crate::config::{GridConfig, SessionConfig, TerrainWeight, Viewport};
    pub use crate::error::{GameError, Result};
    pub use crate::geometry::{BoundingBox, GridCoord, PixelPos};
    pub use crate::layout::{background_tiles, generate_terrain, GridLayout};
    pub use crate::mapping::{is_adjacent, Occupancy};
    pub use crate::session::{
        GameMode, GameSession, PlacementOutcome, PlacementRejection, Side, SideStats, Unit,
    };
    pub use crate::spawn::choose_spawn_points;
    pub use crate::terrain::{TerrainCell, TerrainGrid, TerrainKind};
}
