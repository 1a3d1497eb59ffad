use thiserror::Error;

use dobutsu_elements::prelude::*;

/// Everything that can go wrong in a solver call, short of a plain "no solution"
/// (which is the `Ok(None)` of every entry point, not an error).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    #[error("horizon {0} is too small for this problem")]
    InvalidHorizon(Horizon),

    #[error("{winner} cannot make the final move of a {horizon} half-move sequence")]
    ParityMismatch { winner: Player, horizon: Horizon },

    #[error("piece {0} does not appear in the initial position")]
    MissingPiece(PieceId),

    #[error("piece {0} appears more than once in the initial position")]
    DuplicatePiece(PieceId),

    #[error("initial position lists {0} pieces; at most {max} exist", max = NUM_PIECES)]
    OversizedSetup(usize),

    #[error("SMT backend failure: {0}")]
    Backend(String),
}
