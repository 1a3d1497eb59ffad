//! Building blocks of Dōbutsu Shōgi: players, pieces, squares, initial-position
//! descriptors, and the decoded move record.
//!
//! This crate is pure data model --- no game logic and no solver dependencies.
//! The bounded solving of the game lives in the `dobutsu` crate.

pub mod moves;
pub mod piece;
pub mod player;
pub mod setup;
pub mod square;
pub mod typedefs;

pub mod prelude {
    pub use crate::moves::*;
    pub use crate::piece::*;
    pub use crate::player::*;
    pub use crate::setup::*;
    pub use crate::square::*;
    pub use crate::typedefs::*;
}
