//! Digitle - exhaustive solver for numbers-game puzzles
//!
//! Given a handful of integer tiles and a target, this library enumerates
//! every arithmetic expression over a non-repeating subset of the tiles
//! (addition, subtraction, multiplication and exact integer division) and
//! reports each improvement on the way to the closest reachable value.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, OpKind, TileSet};
pub use solver::{Discovery, ExpressionSolver, SolveReport, SolverError};
pub use utils::{UtilsError, validate_tiles};

/// Search the tiles for the expression whose value is closest to the target
///
/// This is a convenience function that creates a default solver and runs the
/// full search, collecting discoveries instead of streaming them.
///
/// # Arguments
///
/// * `target` - The value to aim for
/// * `tiles` - The available number tiles, each usable at most once
///
/// # Errors
///
/// Returns an error if the tile list is empty, too large, or contains a
/// negative value.
///
/// # Examples
///
/// ```
/// match digitle::solve(24, &[2, 3, 4]) {
///     Ok(report) => assert_eq!(report.best_error, 0),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, tiles: &[i64]) -> Result<SolveReport, SolverError> {
    let solver = ExpressionSolver::new();
    solver.solve(target, tiles)
}
