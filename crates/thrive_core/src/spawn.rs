//! Spawn point selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GameError, Result};
use crate::geometry::PixelPos;

/// Choose the player and AI spawn points from the candidates.
///
/// The player point is drawn uniformly, then the AI point is drawn
/// uniformly among the candidates that differ from it. The two points are
/// never equal.
///
/// # Errors
///
/// Returns [`GameError::NoValidSpawn`] when fewer than two distinct
/// candidates are available.
pub fn choose_spawn_points<R: Rng + ?Sized>(
    candidates: &[PixelPos],
    rng: &mut R,
) -> Result<(PixelPos, PixelPos)> {
    let Some(&player) = candidates.choose(rng) else {
        return Err(GameError::NoValidSpawn { candidates: 0 });
    };

    let remaining: Vec<PixelPos> = candidates.iter().copied().filter(|p| *p != player).collect();
    let Some(&ai) = remaining.choose(rng) else {
        return Err(GameError::NoValidSpawn { candidates: 1 });
    };

    tracing::info!("Player spawn point: {player}, AI spawn point: {ai}");
    Ok((player, ai))
}
