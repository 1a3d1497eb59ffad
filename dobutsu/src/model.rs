//! Problem and solution value objects for the three solver entry points.
//!
//! These are plain data; the solving logic lives in [`crate::solver`].

use core::fmt::{Debug, Formatter};

use dobutsu_elements::prelude::*;
use z3::ast::Bool;

use crate::state::SymbolicState;

/// Does `piece_id`, owned by `owner`, reach `target` within `horizon` half-moves?
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReachabilityProblem {
    /// Initial descriptors, at most 8, ids unique. Pieces absent from the list are
    /// unconstrained at t = 0 and the backend may place them arbitrarily (legally);
    /// supply all 8 for deterministic positions.
    pub setup: Vec<PieceSetup>,
    pub piece_id: PieceId,
    pub target: Square,
    pub owner: Player,
    pub horizon: Horizon,
}

/// A witness for [`ReachabilityProblem`]: the moves up to (excluding) the earliest
/// time the target holds. Empty when the initial position already satisfies it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReachabilitySolution {
    pub moves: Vec<MoveRecord>,
    pub piece_id: PieceId,
    pub reached: Square,
}

/// Does `winner` have a won position after exactly `horizon` half-moves, with no
/// earlier win?
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckmateProblem {
    /// See [`ReachabilityProblem::setup`].
    pub setup: Vec<PieceSetup>,
    pub winner: Player,
    pub horizon: Horizon,
}

/// A witness for [`CheckmateProblem`]: exactly `mate_in` moves, the last of them
/// the winner's.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckmateSolution {
    pub moves: Vec<MoveRecord>,
    pub winner: Player,
    pub mate_in: Horizon,
}

/// A caller-supplied constraint over the symbolic trajectory, applied on top of
/// the game rules.
pub type StatePredicate = Box<dyn for<'ctx> Fn(&SymbolicState<'ctx>) -> Bool<'ctx>>;

/// Is there a legal trajectory of exactly `horizon` half-moves satisfying every
/// constraint?
pub struct TrajectoryProblem {
    /// See [`ReachabilityProblem::setup`].
    pub setup: Vec<PieceSetup>,
    /// Conjunctively applied predicates; the solver evaluates each against the
    /// freshly allocated state.
    pub constraints: Vec<StatePredicate>,
    pub horizon: Horizon,
}

/// A witness for [`TrajectoryProblem`], carrying the predicates it satisfies.
pub struct TrajectorySolution {
    pub moves: Vec<MoveRecord>,
    pub satisfied_constraints: Vec<StatePredicate>,
}

impl Debug for TrajectoryProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrajectoryProblem")
            .field("setup", &self.setup)
            .field("constraints", &self.constraints.len())
            .field("horizon", &self.horizon)
            .finish()
    }
}

impl Debug for TrajectorySolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrajectorySolution")
            .field("moves", &self.moves)
            .field("satisfied_constraints", &self.satisfied_constraints.len())
            .finish()
    }
}
