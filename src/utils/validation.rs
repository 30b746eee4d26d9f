use log::{debug, warn};

use crate::expression::TileSet;
use crate::utils::errors::UtilsError;

/// Check a tile list before handing it to the solver.
///
/// Tiles must be non-negative so every intermediate value stays
/// non-negative, which the operand admissibility rules rely on. Zero tiles
/// are fine: they stream as leaves and are simply never combined.
///
/// # Errors
///
/// Returns an error if the list is empty, holds more tiles than a
/// [`TileSet`] can track, or contains a negative value.
pub fn validate_tiles(tiles: &[i64]) -> Result<(), UtilsError> {
    debug!("validating {} tiles", tiles.len());

    if tiles.is_empty() {
        warn!("no tiles supplied");
        return Err(UtilsError::NoTiles);
    }

    if tiles.len() > TileSet::MAX_TILES {
        warn!("{} tiles exceeds the supported maximum", tiles.len());
        return Err(UtilsError::TooManyTiles {
            count: tiles.len(),
            max: TileSet::MAX_TILES,
        });
    }

    if let Some(&tile) = tiles.iter().find(|&&tile| tile < 0) {
        warn!("negative tile value: {}", tile);
        return Err(UtilsError::NegativeTile(tile));
    }

    Ok(())
}
