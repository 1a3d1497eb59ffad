//! Constraint generation for the game rules.
//!
//! Every function here is a pure map from a [`SymbolicState`] to Z3 formulas;
//! nothing is asserted and nothing is solved. The conjunction of
//! [`game_constraints`] with the domain restrictions and an initial-position
//! pinning characterizes exactly the legal trajectories of the given length:
//! each model is a legal play sequence and each legal play sequence has a model.

mod invariants;
mod movement;
mod transition;
mod victory;

use z3::ast::Bool;
use z3::Context;

use crate::state::SymbolicState;

pub use self::victory::victory;

/// All rule constraints of a bounded trajectory: the per-state invariants plus,
/// for every half-move slot, turn ownership, move legality, capture resolution,
/// and the next-state schema.
///
/// Constraint order is immaterial to meaning; the result is one big conjunction.
pub fn game_constraints<'ctx>(state: &SymbolicState<'ctx>) -> Vec<Bool<'ctx>> {
    let mut out = Vec::new();

    out.extend(invariants::exclusive_squares(state));
    out.extend(invariants::hand_consistency(state));
    out.extend(invariants::promotion_sanity(state));

    for t in 0..state.horizon() {
        out.extend(movement::turn_ownership(state, t));
        out.extend(movement::move_shapes(state, t));
        out.extend(transition::capture_resolution(state, t));
        out.extend(transition::effects(state, t));
    }

    out
}

/// Conjunction of a slice of formulas.
pub(crate) fn all<'ctx>(ctx: &'ctx Context, xs: &[Bool<'ctx>]) -> Bool<'ctx> {
    let refs: Vec<&Bool<'ctx>> = xs.iter().collect();
    Bool::and(ctx, &refs)
}

/// Disjunction of a slice of formulas.
pub(crate) fn any<'ctx>(ctx: &'ctx Context, xs: &[Bool<'ctx>]) -> Bool<'ctx> {
    let refs: Vec<&Bool<'ctx>> = xs.iter().collect();
    Bool::or(ctx, &refs)
}
