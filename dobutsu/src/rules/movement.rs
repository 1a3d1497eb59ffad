//! Move legality for one half-move slot: turn ownership, drop vs. step gating,
//! and the one-step geometry of each piece kind.

use dobutsu_elements::prelude::*;
use strum::IntoEnumIterator;
use z3::ast::{Ast, Bool, Int};

use crate::state::SymbolicState;

use super::{all, any};

/// The moving piece belongs to the player whose turn it is.
pub(super) fn turn_ownership<'ctx>(state: &SymbolicState<'ctx>, t: TimeStep) -> Vec<Bool<'ctx>> {
    let mover = Player::for_turn(t);
    PieceId::all()
        .map(|p| {
            let is_mover = state.move_at(t).piece_id._eq(&state.int(p.to_i64()));
            is_mover.implies(&state.owner(t, p)._eq(&state.int(mover.to_i64())))
        })
        .collect()
}

/// Drop and step legality, gated per candidate mover.
///
/// A drop requires the piece to sit in the mover's hand and the destination to be
/// fully empty --- dropping onto an occupied square is illegal even when the
/// occupant is an opponent piece. A step requires the piece to be on the board,
/// the recorded origin to match its square, the geometry of its effective kind to
/// accept the delta, and the destination to be empty or opponent-occupied.
pub(super) fn move_shapes<'ctx>(state: &SymbolicState<'ctx>, t: TimeStep) -> Vec<Bool<'ctx>> {
    let ctx = state.ctx();
    let mover = Player::for_turn(t);
    let mv = state.move_at(t);

    PieceId::all()
        .map(|p| {
            let dropping = all(ctx, &[
                state.captured(t, p).clone(),
                state.holder(t, p)._eq(&state.int(mover.to_i64())),
                mv.from_row._eq(&state.int(0)),
                mv.from_col._eq(&state.int(0)),
                mv.captures._eq(&state.int(-1)),
                square_empty(state, t, &mv.to_row, &mv.to_col),
            ]);

            let stepping = all(ctx, &[
                state.captured(t, p).not(),
                mv.from_row._eq(state.row(t, p)),
                mv.from_col._eq(state.col(t, p)),
                step_geometry(state, t, p),
                square_empty_or_opponent(state, t, &mv.to_row, &mv.to_col, mover),
            ]);

            mv.piece_id
                ._eq(&state.int(p.to_i64()))
                .implies(&mv.is_drop.ite(&dropping, &stepping))
        })
        .collect()
}

/// The one-step geometry of the mover's effective kind accepts (Δrow, Δcol).
///
/// The effective kind of a promoted Chick is Hen; Chick and Hen read "forward"
/// off the mover's owner at time t.
fn step_geometry<'ctx>(state: &SymbolicState<'ctx>, t: TimeStep, p: PieceId) -> Bool<'ctx> {
    let ctx = state.ctx();
    let mv = state.move_at(t);
    let d_row = Int::sub(ctx, &[&mv.to_row, &mv.from_row]);
    let d_col = Int::sub(ctx, &[&mv.to_col, &mv.from_col]);

    let effective = state
        .promoted(t, p)
        .ite(&state.int(PieceKind::Hen.to_i64()), state.kind(p));

    let mut patterns = Vec::new();
    for kind in PieceKind::iter() {
        let selected = effective._eq(&state.int(kind.to_i64()));
        let pattern = match kind {
            PieceKind::Lion => all(ctx, &[
                within_one(state, &d_row),
                within_one(state, &d_col),
                any(ctx, &[
                    d_row._eq(&state.int(0)).not(),
                    d_col._eq(&state.int(0)).not(),
                ]),
            ]),
            PieceKind::Giraffe => orthogonal_step(state, &d_row, &d_col),
            PieceKind::Elephant => all(ctx, &[
                plus_minus_one(state, &d_row),
                plus_minus_one(state, &d_col),
            ]),
            PieceKind::Chick => all(ctx, &[
                forward_step(state, t, p, &d_row),
                d_col._eq(&state.int(0)),
            ]),
            PieceKind::Hen => any(ctx, &[
                orthogonal_step(state, &d_row, &d_col),
                all(ctx, &[
                    forward_step(state, t, p, &d_row),
                    plus_minus_one(state, &d_col),
                ]),
            ]),
        };
        patterns.push(selected.implies(&pattern));
    }

    all(ctx, &patterns)
}

/// Δrow matches the owner's forward direction.
fn forward_step<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
    p: PieceId,
    d_row: &Int<'ctx>,
) -> Bool<'ctx> {
    state
        .owner(t, p)
        ._eq(&state.int(P0.to_i64()))
        .ite(
            &d_row._eq(&state.int(P0.forward())),
            &d_row._eq(&state.int(P1.forward())),
        )
}

/// Exactly one of the deltas is ±1, the other 0.
fn orthogonal_step<'ctx>(
    state: &SymbolicState<'ctx>,
    d_row: &Int<'ctx>,
    d_col: &Int<'ctx>,
) -> Bool<'ctx> {
    let ctx = state.ctx();
    any(ctx, &[
        all(ctx, &[d_row._eq(&state.int(0)), plus_minus_one(state, d_col)]),
        all(ctx, &[d_col._eq(&state.int(0)), plus_minus_one(state, d_row)]),
    ])
}

fn within_one<'ctx>(state: &SymbolicState<'ctx>, d: &Int<'ctx>) -> Bool<'ctx> {
    all(state.ctx(), &[d.ge(&state.int(-1)), d.le(&state.int(1))])
}

fn plus_minus_one<'ctx>(state: &SymbolicState<'ctx>, d: &Int<'ctx>) -> Bool<'ctx> {
    any(state.ctx(), &[d._eq(&state.int(1)), d._eq(&state.int(-1))])
}

/// No on-board piece occupies (row, col) at time t.
///
/// In-hand pieces are excluded through the captured flag; their stale coordinates
/// never block a square.
pub(super) fn square_empty<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
    row: &Int<'ctx>,
    col: &Int<'ctx>,
) -> Bool<'ctx> {
    let ctx = state.ctx();
    let clear: Vec<Bool<'ctx>> = PieceId::all()
        .map(|q| occupies(state, t, q, row, col).not())
        .collect();
    all(ctx, &clear)
}

/// Every on-board piece at (row, col) at time t belongs to the mover's opponent.
pub(super) fn square_empty_or_opponent<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
    row: &Int<'ctx>,
    col: &Int<'ctx>,
    mover: Player,
) -> Bool<'ctx> {
    let ctx = state.ctx();
    let tolerated: Vec<Bool<'ctx>> = PieceId::all()
        .map(|q| {
            occupies(state, t, q, row, col)
                .implies(&state.owner(t, q)._eq(&state.int(mover.to_i64())).not())
        })
        .collect();
    all(ctx, &tolerated)
}

pub(super) fn occupies<'ctx>(
    state: &SymbolicState<'ctx>,
    t: TimeStep,
    q: PieceId,
    row: &Int<'ctx>,
    col: &Int<'ctx>,
) -> Bool<'ctx> {
    all(state.ctx(), &[
        state.captured(t, q).not(),
        state.row(t, q)._eq(row),
        state.col(t, q)._eq(col),
    ])
}
