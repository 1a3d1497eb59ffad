//! Checkmate search: the winner's victory predicate at t = N exactly, false at
//! every earlier t.
//!
//! The quantification is purely existential: the returned sequence is one
//! continuation on which the winner wins at move N, with the opponent's replies
//! chosen by the solver. It is a *cooperative* mate, not a minimax-forced one;
//! forcing would need the winner's win to hold against every opponent reply,
//! a quantifier alternation outside this encoding.

use log::debug;
use z3::{Config, Context};

use dobutsu_elements::prelude::*;

use crate::model::{CheckmateProblem, CheckmateSolution};
use crate::rules;

use super::{decode_moves, install_game, run_check, validate_setup, SolveError};

/// Finds a trajectory on which `winner` first reaches a won position at exactly
/// half-move N.
///
/// The winner must be the one making move N−1; a horizon of the wrong parity is
/// rejected as [`SolveError::ParityMismatch`] before anything is encoded, and a
/// zero horizon as [`SolveError::InvalidHorizon`].
pub fn solve_checkmate(
    problem: &CheckmateProblem,
) -> Result<Option<CheckmateSolution>, SolveError> {
    validate_setup(&problem.setup)?;
    if problem.horizon == 0 {
        return Err(SolveError::InvalidHorizon(problem.horizon));
    }
    let horizon = problem.horizon as usize;
    if Player::for_turn(horizon - 1) != problem.winner {
        return Err(SolveError::ParityMismatch {
            winner: problem.winner,
            horizon: problem.horizon,
        });
    }

    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let (solver, state) = install_game(&ctx, &problem.setup, horizon);

    solver.assert(&rules::victory(&state, horizon, problem.winner));
    for t in 0..horizon {
        solver.assert(&rules::victory(&state, t, problem.winner).not());
    }

    let Some(model) = run_check(&solver)? else {
        return Ok(None);
    };
    let moves = decode_moves(&model, &state, horizon)?;

    Ok(Some(CheckmateSolution {
        moves,
        winner: problem.winner,
        mate_in: problem.horizon,
    }))
}

/// Probes N = 1, 2, 3, ... up to the problem's horizon and returns the first
/// mate found. Horizons whose parity does not let the winner move last are
/// skipped without touching the backend.
pub fn find_shortest_mate(
    problem: &CheckmateProblem,
) -> Result<Option<CheckmateSolution>, SolveError> {
    let mut n = problem.winner.to_u8() as Horizon + 1;
    while n <= problem.horizon {
        let attempt = CheckmateProblem {
            setup: problem.setup.clone(),
            winner: problem.winner,
            horizon: n,
        };
        debug!("probing mate at horizon {n}");
        if let Some(solution) = solve_checkmate(&attempt)? {
            return Ok(Some(solution));
        }
        n += 2;
    }
    Ok(None)
}
