use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid tiles: {0}")]
    InvalidTiles(#[from] UtilsError),
}
