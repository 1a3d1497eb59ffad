//! Trajectory constraint satisfaction: the game rules plus an arbitrary
//! conjunction of caller predicates over the symbolic state.

use z3::{Config, Context};

use crate::model::{StatePredicate, TrajectoryProblem, TrajectorySolution};

use super::{decode_moves, install_game, run_check, validate_setup, SolveError};

/// Finds a legal trajectory of exactly `horizon` half-moves satisfying every
/// predicate in the problem. The problem is consumed; its predicates come back
/// in the solution on success.
pub fn solve_trajectory(
    problem: TrajectoryProblem,
) -> Result<Option<TrajectorySolution>, SolveError> {
    solve(problem, None)
}

/// Like [`solve_trajectory`], with one extra objective predicate appended to the
/// base list.
pub fn solve_trajectory_with_objective(
    problem: TrajectoryProblem,
    objective: StatePredicate,
) -> Result<Option<TrajectorySolution>, SolveError> {
    solve(problem, Some(objective))
}

fn solve(
    mut problem: TrajectoryProblem,
    objective: Option<StatePredicate>,
) -> Result<Option<TrajectorySolution>, SolveError> {
    validate_setup(&problem.setup)?;
    problem.constraints.extend(objective);

    let horizon = problem.horizon as usize;
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let (solver, state) = install_game(&ctx, &problem.setup, horizon);

    for predicate in &problem.constraints {
        solver.assert(&predicate(&state));
    }

    let Some(model) = run_check(&solver)? else {
        return Ok(None);
    };
    let moves = decode_moves(&model, &state, horizon)?;

    Ok(Some(TrajectorySolution {
        moves,
        satisfied_constraints: problem.constraints,
    }))
}
