//! Solver façade: assembles the common formula, talks to the Z3 backend, and
//! decodes satisfying assignments into move sequences.
//!
//! Each entry point is a pure computation over a fresh context: it allocates its
//! own [`SymbolicState`], installs the rule constraints plus the class-specific
//! extras, runs one `check`, and drops everything on return. Unsatisfiability is
//! a negative *result* (`Ok(None)`), never an error; only a backend "unknown" or
//! an unevaluable model surfaces as [`SolveError::Backend`].

mod checkmate;
mod errors;
mod reachability;
mod trajectory;

use log::debug;
use z3::ast::{Bool, Int};
use z3::{Context, Model, SatResult, Solver};

use dobutsu_elements::prelude::*;

use crate::rules;
use crate::state::SymbolicState;

pub use self::checkmate::{find_shortest_mate, solve_checkmate};
pub use self::errors::SolveError;
pub use self::reachability::{find_shortest_path, solve_reachability};
pub use self::trajectory::{solve_trajectory, solve_trajectory_with_objective};

/// Rejects oversized or duplicated initial descriptors before any allocation.
pub(crate) fn validate_setup(setup: &[PieceSetup]) -> Result<(), SolveError> {
    if setup.len() > NUM_PIECES {
        return Err(SolveError::OversizedSetup(setup.len()));
    }
    let mut seen = [false; NUM_PIECES];
    for piece in setup {
        let slot = &mut seen[piece.id.to_usize()];
        if *slot {
            return Err(SolveError::DuplicatePiece(piece.id));
        }
        *slot = true;
    }
    Ok(())
}

/// Allocates the state grid and asserts the common formula: variable domains,
/// the initial-position pinning, and the game rules.
pub(crate) fn install_game<'ctx>(
    ctx: &'ctx Context,
    setup: &[PieceSetup],
    horizon: usize,
) -> (Solver<'ctx>, SymbolicState<'ctx>) {
    let state = SymbolicState::new(ctx, horizon);
    let solver = Solver::new(ctx);

    let mut constraints = state.domain_constraints();
    constraints.extend(state.pin_initial(setup));
    constraints.extend(rules::game_constraints(&state));
    debug!(
        "installed {} constraints for {} pieces over horizon {}",
        constraints.len(),
        setup.len(),
        horizon
    );
    for constraint in &constraints {
        solver.assert(constraint);
    }

    (solver, state)
}

/// One `check` call, with the three backend outcomes folded into our result
/// shape. "Unknown" is a backend failure, not a "no".
pub(crate) fn run_check<'ctx>(solver: &Solver<'ctx>) -> Result<Option<Model<'ctx>>, SolveError> {
    match solver.check() {
        SatResult::Sat => solver
            .get_model()
            .map(Some)
            .ok_or_else(|| SolveError::Backend("sat result without a model".to_owned())),
        SatResult::Unsat => Ok(None),
        SatResult::Unknown => Err(SolveError::Backend(
            solver
                .get_reason_unknown()
                .unwrap_or_else(|| "unknown".to_owned()),
        )),
    }
}

pub(crate) fn eval_i64<'ctx>(model: &Model<'ctx>, x: &Int<'ctx>) -> Result<i64, SolveError> {
    model
        .eval(x, true)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| SolveError::Backend("model does not value an integer term".to_owned()))
}

pub(crate) fn eval_bool<'ctx>(model: &Model<'ctx>, x: &Bool<'ctx>) -> Result<bool, SolveError> {
    model
        .eval(x, true)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| SolveError::Backend("model does not value a boolean term".to_owned()))
}

/// Reads the first `upto` move slots of a model back into [`MoveRecord`]s.
pub(crate) fn decode_moves<'ctx>(
    model: &Model<'ctx>,
    state: &SymbolicState<'ctx>,
    upto: usize,
) -> Result<Vec<MoveRecord>, SolveError> {
    let out_of_domain =
        |what: &str| SolveError::Backend(format!("model assigns {what} outside its domain"));

    let mut moves = Vec::with_capacity(upto);
    for t in 0..upto {
        let mv = state.move_at(t);

        let piece_id = PieceId::new(eval_i64(model, &mv.piece_id)? as u8)
            .ok_or_else(|| out_of_domain("a piece id"))?;
        let kind = PieceKind::try_from(eval_i64(model, state.kind(piece_id))? as u8)
            .map_err(|_| out_of_domain("a piece kind"))?;
        let is_drop = eval_bool(model, &mv.is_drop)?;

        let from = if is_drop {
            Square::HAND
        } else {
            Square::new(
                eval_i64(model, &mv.from_row)? as u8,
                eval_i64(model, &mv.from_col)? as u8,
            )
            .ok_or_else(|| out_of_domain("an origin square"))?
        };
        let to = Square::new(
            eval_i64(model, &mv.to_row)? as u8,
            eval_i64(model, &mv.to_col)? as u8,
        )
        .ok_or_else(|| out_of_domain("a destination square"))?;

        let captures = match eval_i64(model, &mv.captures)? {
            -1 => None,
            q => Some(PieceId::new(q as u8).ok_or_else(|| out_of_domain("a captured id"))?),
        };

        moves.push(MoveRecord {
            move_number: t,
            player: Player::for_turn(t),
            piece_id,
            kind,
            is_drop,
            from,
            to,
            captures,
        });
    }

    Ok(moves)
}
