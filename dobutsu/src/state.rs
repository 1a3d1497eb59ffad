//! Z3 variable layers for a bounded game trajectory.
//!
//! A [`SymbolicState`] materializes one solver variable per dynamic attribute of
//! each piece at each time step, plus one block of move variables per half-move
//! slot. The game is small (8 pieces, short horizons), so per-time
//! materialization is cheap and keeps the formula quantifier-free, which SMT
//! backends handle far more evenly than quantifier alternation.

use dobutsu_elements::prelude::*;
use itertools::iproduct;
use z3::ast::{Ast, Bool, Int};
use z3::Context;

/// Solver variables of one half-move slot.
pub struct MoveVars<'ctx> {
    /// Identity of the moving piece, 0..=7.
    pub piece_id: Int<'ctx>,
    /// Pre-move square; 0 in both coordinates for a drop.
    pub from_row: Int<'ctx>,
    pub from_col: Int<'ctx>,
    /// Destination square, always on-board.
    pub to_row: Int<'ctx>,
    pub to_col: Int<'ctx>,
    /// True iff the piece enters from its holder's hand.
    pub is_drop: Bool<'ctx>,
    /// Identity of the piece removed from the board by this move, or -1.
    pub captures: Int<'ctx>,
}

/// The full variable grid of a bounded trajectory: N+1 state layers (t = 0..=N)
/// and N move slots (t = 0..N).
///
/// The kind variable is time-independent (one per piece); every other piece
/// attribute is indexed by (time, piece) because captures transfer ownership
/// and demote.
pub struct SymbolicState<'ctx> {
    ctx: &'ctx Context,
    horizon: usize,
    kind: Vec<Int<'ctx>>,
    owner: Vec<Vec<Int<'ctx>>>,
    row: Vec<Vec<Int<'ctx>>>,
    col: Vec<Vec<Int<'ctx>>>,
    captured: Vec<Vec<Bool<'ctx>>>,
    promoted: Vec<Vec<Bool<'ctx>>>,
    holder: Vec<Vec<Int<'ctx>>>,
    moves: Vec<MoveVars<'ctx>>,
}

impl<'ctx> SymbolicState<'ctx> {
    /// Allocates all variables for a trajectory of at most `horizon` half-moves.
    pub fn new(ctx: &'ctx Context, horizon: usize) -> Self {
        let kind = (0..NUM_PIECES)
            .map(|p| Int::new_const(ctx, format!("p{p}_kind")))
            .collect();

        let layer = |attr: &str| -> Vec<Vec<Int<'ctx>>> {
            (0..=horizon)
                .map(|t| {
                    (0..NUM_PIECES)
                        .map(|p| Int::new_const(ctx, format!("p{p}_{attr}_t{t}")))
                        .collect()
                })
                .collect()
        };
        let flag = |attr: &str| -> Vec<Vec<Bool<'ctx>>> {
            (0..=horizon)
                .map(|t| {
                    (0..NUM_PIECES)
                        .map(|p| Bool::new_const(ctx, format!("p{p}_{attr}_t{t}")))
                        .collect()
                })
                .collect()
        };

        let moves = (0..horizon)
            .map(|t| MoveVars {
                piece_id: Int::new_const(ctx, format!("mv{t}_piece")),
                from_row: Int::new_const(ctx, format!("mv{t}_from_row")),
                from_col: Int::new_const(ctx, format!("mv{t}_from_col")),
                to_row: Int::new_const(ctx, format!("mv{t}_to_row")),
                to_col: Int::new_const(ctx, format!("mv{t}_to_col")),
                is_drop: Bool::new_const(ctx, format!("mv{t}_is_drop")),
                captures: Int::new_const(ctx, format!("mv{t}_captures")),
            })
            .collect();

        Self {
            ctx,
            horizon,
            kind,
            owner: layer("owner"),
            row: layer("row"),
            col: layer("col"),
            captured: flag("captured"),
            promoted: flag("promoted"),
            holder: layer("holder"),
            moves,
        }
    }

    pub fn ctx(&self) -> &'ctx Context { self.ctx }

    /// The bound N this state was allocated for.
    pub fn horizon(&self) -> usize { self.horizon }

    /// An integer literal in this state's context.
    pub fn int(&self, v: i64) -> Int<'ctx> { Int::from_i64(self.ctx, v) }

    /// The (time-independent) kind variable of piece `p`.
    pub fn kind(&self, p: PieceId) -> &Int<'ctx> { &self.kind[p.to_usize()] }

    pub fn owner(&self, t: TimeStep, p: PieceId) -> &Int<'ctx> { &self.owner[t][p.to_usize()] }
    pub fn row(&self, t: TimeStep, p: PieceId) -> &Int<'ctx> { &self.row[t][p.to_usize()] }
    pub fn col(&self, t: TimeStep, p: PieceId) -> &Int<'ctx> { &self.col[t][p.to_usize()] }
    pub fn captured(&self, t: TimeStep, p: PieceId) -> &Bool<'ctx> { &self.captured[t][p.to_usize()] }
    pub fn promoted(&self, t: TimeStep, p: PieceId) -> &Bool<'ctx> { &self.promoted[t][p.to_usize()] }
    pub fn holder(&self, t: TimeStep, p: PieceId) -> &Int<'ctx> { &self.holder[t][p.to_usize()] }

    /// The move slot for half-move `t` (0..N).
    pub fn move_at(&self, t: TimeStep) -> &MoveVars<'ctx> { &self.moves[t] }

    /// Range restrictions for every variable in the grid.
    pub fn domain_constraints(&self) -> Vec<Bool<'ctx>> {
        let mut out = Vec::new();

        for p in PieceId::all() {
            self.push_range(&mut out, self.kind(p),
                PieceKind::MIN_ENCODING as i64, PieceKind::MAX_ENCODING as i64);
        }

        for (t, p) in iproduct!(0..=self.horizon, PieceId::all()) {
            self.push_range(&mut out, self.owner(t, p), 0, 1);
            self.push_range(&mut out, self.row(t, p), 1, NUM_ROWS as i64);
            self.push_range(&mut out, self.col(t, p), 1, NUM_COLS as i64);
            // holder -1 means "on the board"; 0/1 name the hand
            self.push_range(&mut out, self.holder(t, p), -1, 1);
        }

        for t in 0..self.horizon {
            let mv = self.move_at(t);
            self.push_range(&mut out, &mv.piece_id, 0, NUM_PIECES as i64 - 1);
            // from coordinates admit the 0 sentinel used by drops
            self.push_range(&mut out, &mv.from_row, 0, NUM_ROWS as i64);
            self.push_range(&mut out, &mv.from_col, 0, NUM_COLS as i64);
            self.push_range(&mut out, &mv.to_row, 1, NUM_ROWS as i64);
            self.push_range(&mut out, &mv.to_col, 1, NUM_COLS as i64);
            self.push_range(&mut out, &mv.captures, -1, NUM_PIECES as i64 - 1);
        }

        out
    }

    /// Equality constraints pinning the initial position at t = 0.
    ///
    /// A [`Placement::Hand`] descriptor pins the piece as captured and held by its
    /// owner, leaving its (irrelevant) coordinates to the solver. Pieces absent
    /// from `setup` are left unconstrained at t = 0; see the solver entry points
    /// for the consequences.
    pub fn pin_initial(&self, setup: &[PieceSetup]) -> Vec<Bool<'ctx>> {
        let mut out = Vec::new();

        for piece in setup {
            let p = piece.id;
            out.push(self.kind(p)._eq(&self.int(piece.kind.to_i64())));
            out.push(self.owner(0, p)._eq(&self.int(piece.owner.to_i64())));
            out.push(self.promoted(0, p).not());
            match piece.placement {
                Placement::Board(square) => {
                    out.push(self.row(0, p)._eq(&self.int(square.row() as i64)));
                    out.push(self.col(0, p)._eq(&self.int(square.col() as i64)));
                    out.push(self.captured(0, p).not());
                    out.push(self.holder(0, p)._eq(&self.int(-1)));
                }
                Placement::Hand => {
                    out.push(self.captured(0, p).clone());
                    out.push(self.holder(0, p)._eq(&self.int(piece.owner.to_i64())));
                }
            }
        }

        out
    }

    fn push_range(&self, out: &mut Vec<Bool<'ctx>>, x: &Int<'ctx>, lo: i64, hi: i64) {
        out.push(x.ge(&self.int(lo)));
        out.push(x.le(&self.int(hi)));
    }
}

#[cfg(test)]
mod tests {
    use z3::Config;

    use super::*;

    #[test]
    fn allocates_layers_and_slots() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let state = SymbolicState::new(&ctx, 3);
        assert_eq!(state.horizon(), 3);
        // layers t = 0..=3 and slots t = 0..3 are addressable
        for (t, p) in iproduct!(0..=3usize, PieceId::all()) {
            let _ = state.owner(t, p);
            let _ = state.holder(t, p);
        }
        for t in 0..3 {
            let _ = state.move_at(t);
        }
    }

    #[test]
    fn zero_horizon_has_no_move_slots() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let state = SymbolicState::new(&ctx, 0);
        assert_eq!(state.horizon(), 0);
        // domain covers: 2 per kind (8 pieces), 8 per (t, piece) on 1 layer
        assert_eq!(state.domain_constraints().len(), 16 + 64);
    }

    #[test]
    fn pin_counts_match_placement() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let state = SymbolicState::new(&ctx, 1);
        // 7 equalities per on-board piece
        assert_eq!(state.pin_initial(&default_setup()).len(), 8 * 7);
        // 5 per in-hand piece
        let in_hand = [PieceSetup::in_hand(piece_id(0), PieceKind::Chick, P0)];
        assert_eq!(state.pin_initial(&in_hand).len(), 5);
    }
}
