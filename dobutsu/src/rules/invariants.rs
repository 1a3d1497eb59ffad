//! Per-state invariants, emitted for every layer t = 0..=N.

use dobutsu_elements::prelude::*;
use itertools::{iproduct, Itertools};
use z3::ast::{Ast, Bool};

use crate::state::SymbolicState;

use super::any;

/// No two on-board pieces share a square.
pub(super) fn exclusive_squares<'ctx>(state: &SymbolicState<'ctx>) -> Vec<Bool<'ctx>> {
    let ctx = state.ctx();
    let mut out = Vec::new();

    for t in 0..=state.horizon() {
        for (a, b) in PieceId::all().tuple_combinations() {
            let both_on_board =
                Bool::and(ctx, &[&state.captured(t, a).not(), &state.captured(t, b).not()]);
            let apart = any(ctx, &[
                state.row(t, a)._eq(state.row(t, b)).not(),
                state.col(t, a)._eq(state.col(t, b)).not(),
            ]);
            out.push(both_on_board.implies(&apart));
        }
    }

    out
}

/// A piece is captured exactly when some player holds it.
pub(super) fn hand_consistency<'ctx>(state: &SymbolicState<'ctx>) -> Vec<Bool<'ctx>> {
    iproduct!(0..=state.horizon(), PieceId::all())
        .map(|(t, p)| {
            let held = state.holder(t, p).ge(&state.int(0));
            state.captured(t, p).iff(&held)
        })
        .collect()
}

/// Only a Chick can carry the promoted flag.
pub(super) fn promotion_sanity<'ctx>(state: &SymbolicState<'ctx>) -> Vec<Bool<'ctx>> {
    iproduct!(0..=state.horizon(), PieceId::all())
        .map(|(t, p)| {
            let is_chick = state.kind(p)._eq(&state.int(PieceKind::Chick.to_i64()));
            state.promoted(t, p).implies(&is_chick)
        })
        .collect()
}
