//! Reachability: a designated piece on a designated square under a designated
//! owner, somewhere within the horizon.

use log::debug;
use z3::ast::{Ast, Bool};
use z3::{Config, Context};

use dobutsu_elements::prelude::*;

use crate::model::{ReachabilityProblem, ReachabilitySolution};
use crate::rules;
use crate::state::SymbolicState;

use super::{decode_moves, eval_bool, install_game, run_check, validate_setup, SolveError};

/// Finds a legal trajectory on which the target piece stands on the target
/// square, under the target owner and not captured, at some t ≤ N.
///
/// Returns the moves strictly before the earliest such t in the found model; a
/// horizon of 0 is allowed and succeeds exactly when the initial position
/// already satisfies the target.
pub fn solve_reachability(
    problem: &ReachabilityProblem,
) -> Result<Option<ReachabilitySolution>, SolveError> {
    validate_setup(&problem.setup)?;
    if !problem.setup.iter().any(|piece| piece.id == problem.piece_id) {
        return Err(SolveError::MissingPiece(problem.piece_id));
    }

    let horizon = problem.horizon as usize;
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let (solver, state) = install_game(&ctx, &problem.setup, horizon);

    let at_target: Vec<Bool> = (0..=horizon)
        .map(|t| target_holds(&state, t, problem))
        .collect();
    solver.assert(&rules::any(&ctx, &at_target));

    let Some(model) = run_check(&solver)? else {
        return Ok(None);
    };

    for (t, holds) in at_target.iter().enumerate() {
        if eval_bool(&model, holds)? {
            debug!("target first holds at t={t}");
            let moves = decode_moves(&model, &state, t)?;
            return Ok(Some(ReachabilitySolution {
                moves,
                piece_id: problem.piece_id,
                reached: problem.target,
            }));
        }
    }

    Err(SolveError::Backend(
        "satisfying model never witnesses the target".to_owned(),
    ))
}

/// Re-runs [`solve_reachability`] with growing horizons 0, 1, 2, ... up to the
/// problem's, returning the first hit. Monotonic in N, so this finds a witness of
/// minimal length.
pub fn find_shortest_path(
    problem: &ReachabilityProblem,
) -> Result<Option<ReachabilitySolution>, SolveError> {
    for n in 0..=problem.horizon {
        let attempt = ReachabilityProblem {
            setup: problem.setup.clone(),
            horizon: n,
            ..*problem
        };
        debug!("probing reachability at horizon {n}");
        if let Some(solution) = solve_reachability(&attempt)? {
            return Ok(Some(solution));
        }
    }
    Ok(None)
}

fn target_holds<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
    problem: &ReachabilityProblem,
) -> Bool<'ctx> {
    let p = problem.piece_id;
    rules::all(state.ctx(), &[
        state.row(t, p)._eq(&state.int(problem.target.row() as i64)),
        state.col(t, p)._eq(&state.int(problem.target.col() as i64)),
        state.owner(t, p)._eq(&state.int(problem.owner.to_i64())),
        state.captured(t, p).not(),
    ])
}
