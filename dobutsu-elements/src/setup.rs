//! Initial-position descriptors.

use crate::piece::{piece_id, PieceId, PieceKind};
use crate::player::{Player, P0, P1};
use crate::square::{sq, Square};

/// Where a piece starts the game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// On the board, on this square.
    Board(Square),
    /// Already captured, in its owner's hand (used by tsume-style problems).
    Hand,
}

/// Descriptor of one piece at time 0: identity, kind, owner, and placement.
///
/// Kind is immutable for the whole game; everything else may change through
/// captures and drops.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceSetup {
    pub id: PieceId,
    pub kind: PieceKind,
    pub owner: Player,
    pub placement: Placement,
}

impl PieceSetup {
    pub const fn on_board(id: PieceId, kind: PieceKind, owner: Player, square: Square) -> Self {
        Self { id, kind, owner, placement: Placement::Board(square) }
    }

    pub const fn in_hand(id: PieceId, kind: PieceKind, owner: Player) -> Self {
        Self { id, kind, owner, placement: Placement::Hand }
    }
}

/// The standard opening arrangement.
///
/// ```text
///  row 4:  Giraffe  Lion  Elephant   (Gote)
///  row 3:     .     Chick    .       (Gote)
///  row 2:     .     Chick    .       (Sente)
///  row 1:  Elephant Lion  Giraffe    (Sente)
/// ```
pub fn default_setup() -> [PieceSetup; 8] {
    use PieceKind::*;
    [
        PieceSetup::on_board(piece_id(0), Elephant, P0, sq(1, 1)),
        PieceSetup::on_board(piece_id(1), Lion, P0, sq(1, 2)),
        PieceSetup::on_board(piece_id(2), Giraffe, P0, sq(1, 3)),
        PieceSetup::on_board(piece_id(3), Chick, P0, sq(2, 2)),
        PieceSetup::on_board(piece_id(4), Giraffe, P1, sq(4, 1)),
        PieceSetup::on_board(piece_id(5), Lion, P1, sq(4, 2)),
        PieceSetup::on_board(piece_id(6), Elephant, P1, sq(4, 3)),
        PieceSetup::on_board(piece_id(7), Chick, P1, sq(3, 2)),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_setup_is_consistent() {
        let setup = default_setup();
        let ids: HashSet<_> = setup.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 8);

        let squares: HashSet<_> = setup
            .iter()
            .filter_map(|s| match s.placement {
                Placement::Board(sq) => Some(sq),
                Placement::Hand => None,
            })
            .collect();
        assert_eq!(squares.len(), 8, "no two pieces share a starting square");

        for side in [P0, P1] {
            let kinds: Vec<_> = setup
                .iter()
                .filter(|s| s.owner == side)
                .map(|s| s.kind)
                .collect();
            assert_eq!(kinds.len(), 4);
            assert!(kinds.contains(&PieceKind::Lion));
            assert!(kinds.contains(&PieceKind::Chick));
        }
    }
}
