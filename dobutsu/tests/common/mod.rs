//! A direct, non-symbolic implementation of the game rules, used to cross-check
//! every witness the solvers return: each move is validated and applied on a
//! concrete board, so a decoded sequence that bends any rule panics the test.

use dobutsu::prelude::*;

/// Where a piece currently is. A piece is always in exactly one of the three
/// states: on the board, in Sente's hand, or in Gote's hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Loc {
    On(Square),
    Hand(Player),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PieceCell {
    pub kind: PieceKind,
    pub owner: Player,
    pub loc: Loc,
    pub promoted: bool,
}

/// Concrete board state, replayed move by move.
#[derive(Clone, Debug)]
pub struct Replay {
    pieces: [Option<PieceCell>; NUM_PIECES],
    applied: usize,
}

impl Replay {
    pub fn from_setup(setup: &[PieceSetup]) -> Self {
        let mut pieces = [None; NUM_PIECES];
        for piece in setup {
            let loc = match piece.placement {
                Placement::Board(square) => Loc::On(square),
                Placement::Hand => Loc::Hand(piece.owner),
            };
            let slot = &mut pieces[piece.id.to_usize()];
            assert!(slot.is_none(), "duplicate descriptor for {}", piece.id);
            *slot = Some(PieceCell {
                kind: piece.kind,
                owner: piece.owner,
                loc,
                promoted: false,
            });
        }
        let replay = Self { pieces, applied: 0 };
        replay.check_invariants();
        replay
    }

    pub fn piece(&self, id: PieceId) -> &PieceCell {
        self.pieces[id.to_usize()]
            .as_ref()
            .expect("piece was not described by the setup")
    }

    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        PieceId::all().find(|&id| {
            matches!(self.pieces[id.to_usize()], Some(cell) if cell.loc == Loc::On(square))
        })
    }

    /// Validates `mv` against the rules and applies it.
    pub fn apply(&mut self, mv: &MoveRecord) {
        assert_eq!(mv.move_number, self.applied, "moves out of order");
        assert_eq!(mv.player, Player::for_turn(mv.move_number), "parity broken");

        let cell = *self.piece(mv.piece_id);
        assert_eq!(cell.owner, mv.player, "mover not owned by the player to move");
        assert_eq!(cell.kind, mv.kind, "decoded kind disagrees with the piece");

        if mv.is_drop {
            assert_eq!(cell.loc, Loc::Hand(mv.player), "drop of a piece not in hand");
            assert_eq!(mv.from, Square::HAND, "drop origin must be the sentinel");
            assert_eq!(mv.captures, None, "drops never capture");
            assert_eq!(self.occupant(mv.to), None, "drop onto an occupied square");
            assert!(!cell.promoted, "a piece in hand is demoted");
            self.pieces[mv.piece_id.to_usize()].as_mut().unwrap().loc = Loc::On(mv.to);
        } else {
            assert_eq!(cell.loc, Loc::On(mv.from), "origin disagrees with the board");
            assert!(
                step_allowed(cell.kind, cell.promoted, cell.owner, mv.from, mv.to),
                "illegal step for {:?}: {} -> {}",
                cell.kind,
                mv.from,
                mv.to
            );

            match self.occupant(mv.to) {
                Some(victim) => {
                    let victim_cell = *self.piece(victim);
                    assert_ne!(victim_cell.owner, mv.player, "capture of an own piece");
                    assert_eq!(mv.captures, Some(victim), "capture not recorded");
                    let taken = self.pieces[victim.to_usize()].as_mut().unwrap();
                    taken.loc = Loc::Hand(mv.player);
                    taken.owner = mv.player;
                    taken.promoted = false;
                }
                None => assert_eq!(mv.captures, None, "phantom capture recorded"),
            }

            let mover = self.pieces[mv.piece_id.to_usize()].as_mut().unwrap();
            mover.loc = Loc::On(mv.to);
            if mover.kind == PieceKind::Chick && mv.to.row() as i64 == mover.owner.far_rank() {
                mover.promoted = true;
            }
        }

        self.applied += 1;
        self.check_invariants();
    }

    /// The position predicate for a won game: a Lion in `winner`'s hand, or
    /// `winner`'s Lion on the far rank.
    pub fn victory(&self, winner: Player) -> bool {
        PieceId::all().any(|id| match self.pieces[id.to_usize()] {
            Some(cell) if cell.kind == PieceKind::Lion => match cell.loc {
                Loc::Hand(holder) => holder == winner,
                Loc::On(square) => {
                    cell.owner == winner && square.row() as i64 == winner.far_rank()
                }
            },
            _ => false,
        })
    }

    fn check_invariants(&self) {
        for a in PieceId::all() {
            let Some(cell_a) = self.pieces[a.to_usize()] else { continue };
            assert!(
                !cell_a.promoted || cell_a.kind == PieceKind::Chick,
                "promotion outside a Chick"
            );
            for b in PieceId::all().filter(|&b| b > a) {
                let Some(cell_b) = self.pieces[b.to_usize()] else { continue };
                if let (Loc::On(sa), Loc::On(sb)) = (cell_a.loc, cell_b.loc) {
                    assert_ne!(sa, sb, "pieces {a} and {b} share a square");
                }
            }
        }
    }
}

fn step_allowed(kind: PieceKind, promoted: bool, owner: Player, from: Square, to: Square) -> bool {
    let d_row = to.row() as i64 - from.row() as i64;
    let d_col = to.col() as i64 - from.col() as i64;
    let effective = if promoted && kind == PieceKind::Chick { PieceKind::Hen } else { kind };
    let forward = owner.forward();
    let orthogonal = d_row.abs() + d_col.abs() == 1;
    match effective {
        PieceKind::Lion => d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0),
        PieceKind::Giraffe => orthogonal,
        PieceKind::Elephant => d_row.abs() == 1 && d_col.abs() == 1,
        PieceKind::Chick => d_row == forward && d_col == 0,
        PieceKind::Hen => orthogonal || (d_row == forward && d_col.abs() == 1),
    }
}
