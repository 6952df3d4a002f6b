//! Game session state.
//!
//! A [`GameSession`] owns everything created at startup: the layout, the
//! terrain, both units and the current input mode. Clients hold one session
//! and route pointer input through it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::{GridCoord, PixelPos};
use crate::layout::{generate_terrain, GridLayout};
use crate::mapping::{is_adjacent, Occupancy};
use crate::spawn::choose_spawn_points;
use crate::terrain::TerrainGrid;

/// Survival points each side starts with.
pub const STARTING_SURVIVAL_POINTS: u32 = 10;

/// Which side a unit fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Self; 2] = [Self::Player, Self::Ai];

    /// Label shown in the stats panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Ai => "AI",
        }
    }
}

/// Input mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Clicks are ignored.
    #[default]
    RegularPlay,
    /// The next valid click moves the player unit.
    PlacingUnit,
}

/// A unit on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Owning side.
    pub side: Side,
    /// Pixel position the unit spawned at. Never changes.
    pub spawn: PixelPos,
    /// Cell the unit currently stands on.
    pub cell: GridCoord,
}

/// Per-side numbers shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    /// Remaining survival points.
    pub survival_points: u32,
    /// Units the side controls.
    pub units: u32,
}

impl Default for SideStats {
    fn default() -> Self {
        Self {
            survival_points: STARTING_SURVIVAL_POINTS,
            units: 1,
        }
    }
}

/// Why a placement click did not move the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// The click mapped to a cell off the board.
    OutOfBounds,
    /// The cell is not next to the player's spawn point.
    NotAdjacent,
    /// Another unit stands on the cell.
    Occupied,
}

/// Result of routing a primary click through the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The session was not in placement mode.
    Ignored,
    /// The player unit moved to the cell.
    Placed {
        /// Destination cell.
        cell: GridCoord,
        /// Pixel position recomputed from the cell.
        position: PixelPos,
    },
    /// The click was rejected; the session stays in placement mode.
    Rejected {
        /// Cell the click mapped to.
        cell: GridCoord,
        /// Reason for rejection.
        reason: PlacementRejection,
    },
}

/// All state for one game, created once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GridConfig,
    seed: u64,
    layout: GridLayout,
    terrain: TerrainGrid,
    spawn_candidates: Vec<PixelPos>,
    player: Unit,
    ai: Unit,
    occupancy: Occupancy,
    mode: GameMode,
    player_stats: SideStats,
    ai_stats: SideStats,
}

impl GameSession {
    /// Generate terrain and choose spawn points from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::InvalidConfig`] for a bad config and
    /// [`crate::error::GameError::NoValidSpawn`] when the terrain has fewer
    /// than two non-water cells.
    pub fn new(config: GridConfig, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (terrain, spawn_candidates) = generate_terrain(&config, &mut rng)?;
        let (player_spawn, ai_spawn) = choose_spawn_points(&spawn_candidates, &mut rng)?;

        let layout = GridLayout::new(&config);
        let player = Unit {
            side: Side::Player,
            spawn: player_spawn,
            cell: layout.pixel_to_cell(player_spawn),
        };
        let ai = Unit {
            side: Side::Ai,
            spawn: ai_spawn,
            cell: layout.pixel_to_cell(ai_spawn),
        };

        let mut occupancy = Occupancy::new();
        occupancy.occupy(player.cell);
        occupancy.occupy(ai.cell);

        tracing::info!(
            seed,
            rows = config.rows,
            cols = config.cols,
            player = %player.cell,
            ai = %ai.cell,
            "Session created"
        );

        Ok(Self {
            config,
            seed,
            layout,
            terrain,
            spawn_candidates,
            player,
            ai,
            occupancy,
            mode: GameMode::RegularPlay,
            player_stats: SideStats::default(),
            ai_stats: SideStats::default(),
        })
    }

    /// Config the session was built from.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Seed the session was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Pixel geometry of the board.
    #[must_use]
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Generated terrain.
    #[must_use]
    pub const fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Non-water positions spawn points were drawn from.
    #[must_use]
    pub fn spawn_candidates(&self) -> &[PixelPos] {
        &self.spawn_candidates
    }

    /// Current input mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// The unit belonging to `side`.
    #[must_use]
    pub const fn unit(&self, side: Side) -> &Unit {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// Stats for `side`.
    #[must_use]
    pub const fn stats(&self, side: Side) -> SideStats {
        match side {
            Side::Player => self.player_stats,
            Side::Ai => self.ai_stats,
        }
    }

    /// Current pixel position of a unit, derived from its cell.
    #[must_use]
    pub fn unit_position(&self, side: Side) -> PixelPos {
        self.layout.cell_to_pixel(self.unit(side).cell)
    }

    /// Whether no unit stands on `cell`.
    #[must_use]
    pub fn is_empty(&self, cell: GridCoord) -> bool {
        self.occupancy.is_empty(cell)
    }

    /// Whether `cell` is next to the player's spawn point.
    #[must_use]
    pub fn is_adjacent_to_spawn(&self, cell: GridCoord) -> bool {
        is_adjacent(&self.layout, self.player.spawn, cell)
    }

    /// Enter placement mode.
    pub fn begin_placement(&mut self) {
        if self.mode != GameMode::PlacingUnit {
            tracing::debug!("Entering unit placement");
            self.mode = GameMode::PlacingUnit;
        }
    }

    /// Leave placement mode without moving anything.
    pub fn cancel_placement(&mut self) {
        if self.mode != GameMode::RegularPlay {
            tracing::debug!("Unit placement cancelled");
            self.mode = GameMode::RegularPlay;
        }
    }

    /// Route a primary click at `pixel` through the session.
    pub fn handle_primary_click(&mut self, pixel: PixelPos) -> PlacementOutcome {
        if self.mode != GameMode::PlacingUnit {
            return PlacementOutcome::Ignored;
        }

        let cell = self.layout.pixel_to_cell(pixel);
        let outcome = self.try_place(cell);
        match outcome {
            PlacementOutcome::Placed { cell, position } => {
                tracing::info!("Player unit placed at {cell} {position}");
            }
            PlacementOutcome::Rejected { cell, reason } => {
                tracing::debug!("Placement at {cell} rejected: {reason:?}");
            }
            PlacementOutcome::Ignored => {}
        }
        outcome
    }

    fn try_place(&mut self, cell: GridCoord) -> PlacementOutcome {
        let reject = |reason| PlacementOutcome::Rejected { cell, reason };

        if !self.layout.contains(cell) {
            return reject(PlacementRejection::OutOfBounds);
        }
        if !self.is_adjacent_to_spawn(cell) {
            return reject(PlacementRejection::NotAdjacent);
        }
        if !self.is_empty(cell) {
            return reject(PlacementRejection::Occupied);
        }

        self.occupancy.relocate(self.player.cell, cell);
        self.player.cell = cell;
        self.mode = GameMode::RegularPlay;

        PlacementOutcome::Placed {
            cell,
            position: self.layout.cell_to_pixel(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainWeight;
    use crate::error::GameError;
    use crate::terrain::TerrainKind;

    fn land_only() -> GridConfig {
        GridConfig::default().with_weights(vec![TerrainWeight::new(TerrainKind::Grass1, 1.0)])
    }

    /// A cell adjacent to the player spawn that holds no unit.
    fn free_neighbour(session: &GameSession) -> GridCoord {
        let spawn = session.unit(Side::Player).cell;
        [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1), (1, -1), (-1, 1)]
            .iter()
            .map(|(dc, dr)| GridCoord::new(spawn.col + dc, spawn.row + dr))
            .find(|c| session.layout().contains(*c) && session.is_empty(*c))
            .unwrap()
    }

    #[test]
    fn test_new_session_starts_in_regular_play() {
        let session = GameSession::new(GridConfig::default(), 1).unwrap();
        assert_eq!(session.mode(), GameMode::RegularPlay);
        assert_eq!(session.terrain().len(), 180);
        assert_eq!(session.stats(Side::Player).survival_points, 10);
        assert_eq!(session.stats(Side::Ai).units, 1);
    }

    #[test]
    fn test_spawns_are_distinct_and_on_land() {
        for seed in 0..25 {
            let session = GameSession::new(GridConfig::default(), seed).unwrap();
            let player = session.unit(Side::Player);
            let ai = session.unit(Side::Ai);
            assert_ne!(player.spawn, ai.spawn);
            assert_ne!(player.cell, ai.cell);
            let cell = session.terrain().get(player.cell).unwrap();
            assert!(!cell.terrain_kind.is_water());
            assert_eq!(cell.pixel_position, player.spawn);
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = GameSession::new(GridConfig::default(), 99).unwrap();
        let b = GameSession::new(GridConfig::default(), 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_water_has_no_spawn() {
        let config = GridConfig::default()
            .with_weights(vec![TerrainWeight::new(TerrainKind::Water, 1.0)]);
        assert_eq!(
            GameSession::new(config, 3),
            Err(GameError::NoValidSpawn { candidates: 0 })
        );
    }

    #[test]
    fn test_single_land_cell_has_no_spawn() {
        let config = land_only().with_size(1, 1);
        assert_eq!(
            GameSession::new(config, 3),
            Err(GameError::NoValidSpawn { candidates: 1 })
        );
    }

    #[test]
    fn test_click_ignored_in_regular_play() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        let target = session.layout().cell_to_pixel(free_neighbour(&session));
        assert_eq!(session.handle_primary_click(target), PlacementOutcome::Ignored);
        assert_eq!(session.mode(), GameMode::RegularPlay);
    }

    #[test]
    fn test_place_on_adjacent_empty_cell() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        let spawn = session.unit(Side::Player).spawn;
        let target_cell = free_neighbour(&session);
        let target = session.layout().cell_to_pixel(target_cell);

        session.begin_placement();
        let outcome = session.handle_primary_click(target);

        assert_eq!(
            outcome,
            PlacementOutcome::Placed {
                cell: target_cell,
                position: target,
            }
        );
        assert_eq!(session.mode(), GameMode::RegularPlay);
        assert_eq!(session.unit(Side::Player).cell, target_cell);
        assert_eq!(session.unit(Side::Player).spawn, spawn);
        assert_eq!(session.unit_position(Side::Player), target);
        assert!(!session.is_empty(target_cell));
        assert!(session.is_empty(session.layout().pixel_to_cell(spawn)));
    }

    #[test]
    fn test_far_click_rejected() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        let spawn_cell = session.unit(Side::Player).cell;
        let far = GridCoord::new((spawn_cell.col + 7) % 15, (spawn_cell.row + 6) % 12);

        session.begin_placement();
        let outcome = session.handle_primary_click(session.layout().cell_to_pixel(far));

        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                cell: far,
                reason: PlacementRejection::NotAdjacent,
            }
        );
        assert_eq!(session.mode(), GameMode::PlacingUnit);
    }

    #[test]
    fn test_out_of_bounds_click_rejected() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        session.begin_placement();
        let outcome = session.handle_primary_click(PixelPos::new(-500.0, -500.0));
        assert!(matches!(
            outcome,
            PlacementOutcome::Rejected {
                reason: PlacementRejection::OutOfBounds,
                ..
            }
        ));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        let own_cell = session.unit(Side::Player).cell;
        session.begin_placement();
        let outcome = session.handle_primary_click(session.layout().cell_to_pixel(own_cell));
        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                cell: own_cell,
                reason: PlacementRejection::Occupied,
            }
        );
    }

    #[test]
    fn test_cancel_placement() {
        let mut session = GameSession::new(land_only(), 5).unwrap();
        session.begin_placement();
        assert_eq!(session.mode(), GameMode::PlacingUnit);
        session.cancel_placement();
        assert_eq!(session.mode(), GameMode::RegularPlay);
    }
}
