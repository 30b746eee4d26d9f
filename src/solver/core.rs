use std::collections::HashSet;

use log::{debug, info};

use crate::expression::Expression;
use crate::iterator::ExpressionIterator;
use crate::solver::errors::SolverError;
use crate::utils::validate_tiles;

/// One improvement found during the search: the first expression rendering
/// to reach a new lowest error (or another exact hit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub expression: String,
    pub error: i64,
}

/// Final outcome of an exhaustive search.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The closest expression found, in generation order on ties.
    pub best: Option<Expression>,
    /// Absolute difference between `best` and the target.
    pub best_error: i64,
    /// Every improvement, in the order it was found.
    pub discoveries: Vec<Discovery>,
    /// Total number of expressions examined.
    pub tested: u64,
}

/// Exhaustive solver for a numbers-game round.
pub struct ExpressionSolver {}

impl ExpressionSolver {
    pub fn new() -> Self {
        Self {}
    }

    /// Search every valid expression over `tiles` for the value closest to
    /// `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list fails validation; the search itself
    /// cannot fail.
    pub fn solve(&self, target: i64, tiles: &[i64]) -> Result<SolveReport, SolverError> {
        self.solve_with(target, tiles, |_| {})
    }

    /// Like [`solve`](Self::solve), invoking `on_discovery` for each
    /// improvement as soon as it is found.
    ///
    /// The running best is updated whenever an expression's error beats it,
    /// and on every exact hit so each distinct solution surfaces even after
    /// the error has already reached zero. Expressions rendering to an
    /// already-reported string are not reported twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list fails validation.
    pub fn solve_with<F>(
        &self,
        target: i64,
        tiles: &[i64],
        mut on_discovery: F,
    ) -> Result<SolveReport, SolverError>
    where
        F: FnMut(&Discovery),
    {
        validate_tiles(tiles)?;

        info!("searching for {} from tiles {:?}", target, tiles);

        let mut best: Option<Expression> = None;
        let mut best_error = i64::MAX;
        let mut seen: HashSet<String> = HashSet::new();
        let mut discoveries = Vec::new();
        let mut tested: u64 = 0;

        for expr in ExpressionIterator::new(tiles) {
            tested += 1;
            let error = (expr.value() - target).abs();
            if error < best_error || error == 0 {
                best_error = best_error.min(error);
                let rendered = expr.to_string();
                best = Some(expr);
                if seen.insert(rendered.clone()) {
                    debug!("new best: {} (error {})", rendered, error);
                    let discovery = Discovery {
                        expression: rendered,
                        error,
                    };
                    on_discovery(&discovery);
                    discoveries.push(discovery);
                }
            }
        }

        info!("tested {} expressions, best error {}", tested, best_error);

        Ok(SolveReport {
            best,
            best_error,
            discoveries,
            tested,
        })
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
