//! The t → t+1 step: capture resolution and the next-state schema.
//!
//! The frame condition is not a separate schema; it is the else-branch of the
//! per-piece transition, so every attribute of every piece is determined by
//! exactly one branch at every step.

use dobutsu_elements::prelude::*;
use z3::ast::{Ast, Bool};

use crate::state::SymbolicState;

use super::{all, any};

/// Pins the `captures` variable of slot t.
///
/// If an opponent piece stands on the destination, `captures` names it; the
/// uniqueness of that piece is a consequence of square exclusivity. If nothing
/// capturable stands there, `captures` is -1. A mover's own pieces never satisfy
/// the condition, so capturing them is unrepresentable, and the drop branch of
/// the move gating pins -1 independently.
pub(super) fn capture_resolution<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
) -> Vec<Bool<'ctx>> {
    let ctx = state.ctx();
    let mover = Player::for_turn(t);
    let mv = state.move_at(t);
    let mut out = Vec::new();

    let target_of = |q: PieceId| -> Bool<'ctx> {
        all(ctx, &[
            state.captured(t, q).not(),
            mv.piece_id._eq(&state.int(q.to_i64())).not(),
            state.row(t, q)._eq(&mv.to_row),
            state.col(t, q)._eq(&mv.to_col),
            state.owner(t, q)._eq(&state.int(mover.to_i64())).not(),
        ])
    };

    for q in PieceId::all() {
        out.push(target_of(q).implies(&mv.captures._eq(&state.int(q.to_i64()))));
    }

    let nothing_to_take: Vec<Bool<'ctx>> =
        PieceId::all().map(|q| target_of(q).not()).collect();
    out.push(all(ctx, &nothing_to_take).implies(&mv.captures._eq(&state.int(-1))));

    out
}

/// The next-state schema for every piece: mover, captured piece, or frame.
pub(super) fn effects<'ctx>(state: &SymbolicState<'ctx>, t: TimeStep) -> Vec<Bool<'ctx>> {
    let ctx = state.ctx();
    let mover = Player::for_turn(t);
    let mv = state.move_at(t);
    let next = t + 1;
    let mut out = Vec::new();

    for r in PieceId::all() {
        let is_mover = mv.piece_id._eq(&state.int(r.to_i64()));
        let is_taken = Bool::and(ctx, &[
            &mv.captures._eq(&state.int(r.to_i64())),
            &mv.is_drop.not(),
        ]);

        let same_square = all(ctx, &[
            state.row(next, r)._eq(state.row(t, r)),
            state.col(next, r)._eq(state.col(t, r)),
        ]);
        let same_owner = state.owner(next, r)._eq(state.owner(t, r));
        let same_promoted = state.promoted(next, r).iff(state.promoted(t, r));
        let untouched = all(ctx, &[
            same_square.clone(),
            state.captured(next, r).iff(state.captured(t, r)),
            same_promoted.clone(),
            state.holder(next, r)._eq(state.holder(t, r)),
            same_owner.clone(),
        ]);

        // Reaching the owner's far rank as a Chick promotes on this very step.
        let promotes = all(ctx, &[
            state.kind(r)._eq(&state.int(PieceKind::Chick.to_i64())),
            any(ctx, &[
                all(ctx, &[
                    state.owner(t, r)._eq(&state.int(P0.to_i64())),
                    mv.to_row._eq(&state.int(P0.far_rank())),
                ]),
                all(ctx, &[
                    state.owner(t, r)._eq(&state.int(P1.to_i64())),
                    mv.to_row._eq(&state.int(P1.far_rank())),
                ]),
            ]),
        ]);
        let moved = all(ctx, &[
            state.row(next, r)._eq(&mv.to_row),
            state.col(next, r)._eq(&mv.to_col),
            state.captured(next, r).not(),
            state.holder(next, r)._eq(&state.int(-1)),
            same_owner,
            promotes.ite(state.promoted(next, r), &same_promoted),
        ]);

        // Ownership transfers to the capturer and a promoted Chick demotes.
        let taken = all(ctx, &[
            state.captured(next, r).clone(),
            state.holder(next, r)._eq(&state.int(mover.to_i64())),
            state.promoted(next, r).not(),
            state.owner(next, r)._eq(&state.int(mover.to_i64())),
            same_square,
        ]);

        out.push(is_mover.ite(&moved, &is_taken.ite(&taken, &untouched)));
    }

    out
}
