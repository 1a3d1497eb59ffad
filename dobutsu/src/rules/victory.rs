//! Victory predicates.

use dobutsu_elements::prelude::*;
use z3::ast::{Ast, Bool};

use crate::state::SymbolicState;

use super::{all, any};

/// `winner` has a won position at time t: a Lion lies in the winner's hand, or
/// the winner's own Lion stands on the winner's far rank.
///
/// Capturing transfers ownership on the same step, so "the opponent's Lion has
/// been caught" reads post-transfer as "a captured Lion whose holder is the
/// winner"; a Lion can only enter that hand through the winner's own capture
/// (or an initial descriptor, which counts as already won).
///
/// This is a pure position predicate. The far-rank clause carries no safety
/// side-condition ("the Lion is not capturable on the reply"), so a witness may
/// end on a far-rank entry that a real opponent could refute; callers wanting
/// the stricter reading must post-filter.
pub fn victory<'ctx>(state: &SymbolicState<'ctx>, t: TimeStep, winner: Player) -> Bool<'ctx> {
    let ctx = state.ctx();
    let mut clauses = Vec::new();

    for p in PieceId::all() {
        let lion = state.kind(p)._eq(&state.int(PieceKind::Lion.to_i64()));

        clauses.push(all(ctx, &[
            lion.clone(),
            state.captured(t, p).clone(),
            state.holder(t, p)._eq(&state.int(winner.to_i64())),
        ]));

        clauses.push(all(ctx, &[
            lion,
            state.owner(t, p)._eq(&state.int(winner.to_i64())),
            state.captured(t, p).not(),
            state.row(t, p)._eq(&state.int(winner.far_rank())),
        ]));
    }

    any(ctx, &clauses)
}
