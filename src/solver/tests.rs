use crate::solver::{Discovery, ExpressionSolver};

#[test]
fn test_solve_reaches_exact_target() {
    let solver = ExpressionSolver::new();
    let result = solver.solve(21, &[1, 2, 3, 4, 5, 6]);
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.best_error, 0);
        assert!(report.best.is_some());
        if let Some(best) = report.best {
            assert_eq!(best.value(), 21);
        }
        let last = report.discoveries.last();
        assert!(matches!(last, Some(d) if d.error == 0));
    }
}

#[test]
fn test_solve_exact_discovery_sequence() {
    // Two tiles give a fully predictable stream: both leaves, then 1+2 and
    // 2-1; only the first three improve on the running best.
    let solver = ExpressionSolver::new();
    let result = solver.solve(100, &[1, 2]);
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.tested, 4);
        assert_eq!(report.best_error, 97);
        assert_eq!(
            report.discoveries,
            vec![
                Discovery {
                    expression: "1".to_string(),
                    error: 99,
                },
                Discovery {
                    expression: "2".to_string(),
                    error: 98,
                },
                Discovery {
                    expression: "1+2".to_string(),
                    error: 97,
                },
            ]
        );
        if let Some(best) = report.best {
            assert_eq!(best.to_string(), "1+2");
        }
    }
}

#[test]
fn test_solve_is_deterministic() {
    let solver = ExpressionSolver::new();
    let first = solver.solve(578, &[3, 7, 25, 50, 9]);
    let second = solver.solve(578, &[3, 7, 25, 50, 9]);
    assert!(first.is_ok());
    assert!(second.is_ok());
    if let (Ok(first), Ok(second)) = (first, second) {
        assert_eq!(first.best_error, second.best_error);
        assert_eq!(first.tested, second.tested);
        assert_eq!(first.discoveries, second.discoveries);
    }
}

#[test]
fn test_discovery_errors_never_increase() {
    let solver = ExpressionSolver::new();
    let result = solver.solve(523, &[2, 5, 8, 10, 75]);
    assert!(result.is_ok());
    if let Ok(report) = result {
        for pair in report.discoveries.windows(2) {
            assert!(pair[1].error <= pair[0].error);
        }
        assert!(report.discoveries.iter().all(|d| d.error >= 0));
    }
}

#[test]
fn test_solve_with_streams_discoveries() {
    let solver = ExpressionSolver::new();
    let mut streamed = Vec::new();
    let result = solver.solve_with(24, &[2, 3, 4], |discovery| {
        streamed.push(discovery.clone());
    });
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(streamed, report.discoveries);
        assert_eq!(report.best_error, 0);
    }
}

#[test]
fn test_solve_single_tile() {
    let solver = ExpressionSolver::new();
    let result = solver.solve(5, &[7]);
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.tested, 1);
        assert_eq!(report.best_error, 2);
        assert_eq!(report.discoveries.len(), 1);
    }
}

#[test]
fn test_solve_duplicate_tiles_reach_target() {
    // Position-based tile identity lets two equal tiles combine.
    let solver = ExpressionSolver::new();
    let result = solver.solve(4, &[2, 2]);
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.best_error, 0);
    }
}

#[test]
fn test_solve_rejects_invalid_tiles() {
    let solver = ExpressionSolver::new();
    assert!(solver.solve(10, &[]).is_err());
    assert!(solver.solve(10, &[3, -1]).is_err());
}
