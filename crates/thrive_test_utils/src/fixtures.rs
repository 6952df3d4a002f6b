//! Test fixtures and helpers.
//!
//! Pre-built configs and sessions for consistent testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thrive_core::config::{GridConfig, TerrainWeight};
use thrive_core::geometry::GridCoord;
use thrive_core::session::{GameSession, Side};
use thrive_core::terrain::TerrainKind;

/// Seed used by fixtures unless a test picks its own.
pub const FIXTURE_SEED: u64 = 12345;

/// Seeded RNG for tests.
#[must_use]
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Board with no water, so every cell is a spawn candidate.
#[must_use]
pub fn land_only_config() -> GridConfig {
    GridConfig::default().with_weights(vec![
        TerrainWeight::new(TerrainKind::Grass1, 1.0),
        TerrainWeight::new(TerrainKind::Desert1, 1.0),
    ])
}

/// Board made entirely of water.
#[must_use]
pub fn water_only_config() -> GridConfig {
    GridConfig::default().with_weights(vec![TerrainWeight::new(TerrainKind::Water, 1.0)])
}

/// Session on a land-only board with the fixture seed.
///
/// # Panics
///
/// Panics if the session cannot be built, which would be a fixture bug.
#[must_use]
pub fn land_session() -> GameSession {
    GameSession::new(land_only_config(), FIXTURE_SEED).expect("land-only board always has spawns")
}

/// An in-bounds, unoccupied cell next to the player's spawn.
///
/// # Panics
///
/// Panics if the spawn has no free neighbour.
#[must_use]
pub fn free_neighbour_of_player(session: &GameSession) -> GridCoord {
    let spawn = session.unit(Side::Player).cell;
    (-1..=1)
        .flat_map(|dc| (-1..=1).map(move |dr| GridCoord::new(spawn.col + dc, spawn.row + dr)))
        .find(|c| session.layout().contains(*c) && session.is_empty(*c))
        .expect("player spawn has a free neighbour")
}
