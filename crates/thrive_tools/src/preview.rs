//! Board previews for the terminal.
//!
//! Builds a session from a config and seed, then prints the board either as
//! ASCII art or as JSON for other tools.

use serde::Serialize;
use thrive_core::config::SessionConfig;
use thrive_core::geometry::{GridCoord, PixelPos};
use thrive_core::session::{GameSession, Side};
use thrive_core::terrain::TerrainKind;

use crate::ToolResult;

/// Output format for a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PreviewFormat {
    /// Glyph grid with spawn markers.
    #[default]
    Ascii,
    /// Machine-readable board dump.
    Json,
}

/// Glyph marking the player's spawn cell.
pub const PLAYER_GLYPH: char = 'P';

/// Glyph marking the AI's spawn cell.
pub const AI_GLYPH: char = 'A';

/// A unit's spawn in a JSON preview.
#[derive(Debug, Serialize)]
pub struct SpawnReport {
    /// Spawn cell.
    pub cell: GridCoord,
    /// Spawn pixel position.
    pub position: PixelPos,
}

/// JSON form of a generated board.
#[derive(Debug, Serialize)]
pub struct BoardReport {
    /// Seed the board was generated from.
    pub seed: u64,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Terrain kinds, row-major.
    pub terrain: Vec<Vec<TerrainKind>>,
    /// Number of non-water cells spawns were drawn from.
    pub spawn_candidates: usize,
    /// Player spawn.
    pub player: SpawnReport,
    /// AI spawn.
    pub ai: SpawnReport,
}

impl BoardReport {
    /// Collect the report from a session.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let spawn = |side| {
            let unit = session.unit(side);
            SpawnReport {
                cell: unit.cell,
                position: unit.spawn,
            }
        };
        Self {
            seed: session.seed(),
            rows: session.terrain().rows(),
            cols: session.terrain().cols(),
            terrain: session
                .terrain()
                .rows_iter()
                .map(|row| row.iter().map(|cell| cell.terrain_kind).collect())
                .collect(),
            spawn_candidates: session.spawn_candidates().len(),
            player: spawn(Side::Player),
            ai: spawn(Side::Ai),
        }
    }
}

/// Draw the board as text.
///
/// Each grid row takes two lines: even columns on the first, odd columns on
/// the second, mirroring the half-tile drop of odd columns.
#[must_use]
pub fn render_ascii(session: &GameSession) -> String {
    let player = session.unit(Side::Player).cell;
    let ai = session.unit(Side::Ai).cell;
    let cols = session.terrain().cols() as usize;

    let mut out = format!(
        "seed {} | {}x{} | {}=player {}=ai\n",
        session.seed(),
        session.terrain().rows(),
        session.terrain().cols(),
        PLAYER_GLYPH,
        AI_GLYPH
    );

    for row in session.terrain().rows_iter() {
        for parity in [0, 1] {
            let mut line = vec![' '; cols * 2];
            for cell in row.iter().filter(|c| c.coord.col.rem_euclid(2) == parity) {
                let glyph = if cell.coord == player {
                    PLAYER_GLYPH
                } else if cell.coord == ai {
                    AI_GLYPH
                } else {
                    cell.terrain_kind.glyph()
                };
                line[cell.coord.col as usize * 2] = glyph;
            }
            let line: String = line.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// Build a session and render it.
///
/// # Errors
///
/// Returns an error if the session cannot be built or JSON output fails.
pub fn preview(config: SessionConfig, seed: u64, format: PreviewFormat) -> ToolResult<String> {
    let session = GameSession::new(config.grid, seed)?;
    tracing::debug!(seed, "Rendering preview");

    match format {
        PreviewFormat::Ascii => Ok(render_ascii(&session)),
        PreviewFormat::Json => Ok(serde_json::to_string_pretty(&BoardReport::from_session(
            &session,
        ))?),
    }
}
