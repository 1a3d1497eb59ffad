//! Bounded analysis of Dōbutsu Shōgi over an SMT backend.
//!
//! The game's rules are encoded as a quantifier-free formula over per-time,
//! per-piece solver variables; three query classes are answered by discharging
//! that formula to Z3 and decoding the model into a move sequence:
//!
//! - **Reachability** ([`solver::solve_reachability`]): a designated piece
//!   reaches a designated square while owned by a designated player.
//! - **Checkmate** ([`solver::solve_checkmate`]): a designated player first
//!   reaches a won position at exactly half-move N.
//! - **Trajectory** ([`solver::solve_trajectory`]): caller-supplied predicates
//!   over the symbolic state hold jointly.
//!
//! Each entry point is a pure function over a fresh solver context; there is no
//! shared state, no I/O, and no internal timeout --- the caller owns the
//! wall-clock budget through the horizon.
//!
//! ```no_run
//! use dobutsu::prelude::*;
//!
//! let problem = ReachabilityProblem {
//!     setup: default_setup().to_vec(),
//!     piece_id: piece_id(3),
//!     target: sq(3, 2),
//!     owner: P0,
//!     horizon: 1,
//! };
//! let solution = solve_reachability(&problem).unwrap().unwrap();
//! assert_eq!(solution.moves.len(), 1);
//! ```

pub mod model;
pub mod rules;
pub mod solver;
pub mod state;

pub use dobutsu_elements as elements;

// Trajectory predicates are written against `z3::ast` types; re-exported so
// callers need not track the backend version themselves.
pub use z3;

pub mod prelude {
    //! Convenient re-exports of commonly imported items.
    pub use dobutsu_elements::prelude::*;

    pub use crate::model::*;
    pub use crate::rules::victory;
    pub use crate::solver::{
        find_shortest_mate, find_shortest_path, solve_checkmate, solve_reachability,
        solve_trajectory, solve_trajectory_with_objective, SolveError,
    };
    pub use crate::state::{MoveVars, SymbolicState};
}
