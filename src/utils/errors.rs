use thiserror::Error;

/// Errors raised by input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one tile is required")]
    NoTiles,
    #[error("Too many tiles: {count} (maximum {max})")]
    TooManyTiles { count: usize, max: usize },
    #[error("Tile values must be non-negative, got {0}")]
    NegativeTile(i64),
}
