//! [`MoveRecord`] --- one decoded half-move of a witness trajectory.

use core::fmt::{Display, Formatter};

use crate::piece::{PieceId, PieceKind};
use crate::player::Player;
use crate::square::Square;
use crate::typedefs::TimeStep;

/// One half-move decoded from a satisfying assignment.
///
/// This is the single value object crossing the solver boundary; rendering it in
/// traditional shogi notation is a collaborator concern.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    /// Half-move index, 0..N-1.
    pub move_number: TimeStep,
    /// The mover; always `Player::for_turn(move_number)`.
    pub player: Player,
    /// Identity of the moving piece.
    pub piece_id: PieceId,
    /// The symbolic kind of the moving piece. A promoted Chick still reports `Chick`.
    pub kind: PieceKind,
    /// True for a drop from hand.
    pub is_drop: bool,
    /// Pre-move square; [`Square::HAND`] when dropping.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The piece removed from the board by this move, if any. Always `None` for drops.
    pub captures: Option<PieceId>,
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}. {} {} ", self.move_number + 1, self.player, self.kind)?;
        if self.is_drop {
            write!(f, "*{}", self.to)?;
        } else {
            write!(f, "{}-{}", self.from, self.to)?;
        }
        if let Some(captured) = self.captures {
            write!(f, " x{}", captured)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::piece::piece_id;
    use crate::player::P0;
    use crate::square::sq;

    use super::*;

    #[test]
    fn display_move_and_drop() {
        let step = MoveRecord {
            move_number: 0,
            player: P0,
            piece_id: piece_id(3),
            kind: PieceKind::Chick,
            is_drop: false,
            from: sq(2, 2),
            to: sq(3, 2),
            captures: Some(piece_id(7)),
        };
        assert_eq!(step.to_string(), "1. Sente Chick (2,2)-(3,2) x7");

        let drop = MoveRecord {
            move_number: 2,
            player: P0,
            piece_id: piece_id(3),
            kind: PieceKind::Chick,
            is_drop: true,
            from: Square::HAND,
            to: sq(2, 3),
            captures: None,
        };
        assert_eq!(drop.to_string(), "3. Sente Chick *(2,3)");
    }
}
