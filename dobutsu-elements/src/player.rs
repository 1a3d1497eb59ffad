//! [`Player`] newtype (mod-2 arithmetic).

use core::fmt::{Debug, Display, Formatter};
use derive_more::{From, Into};

use crate::square::NUM_ROWS;

/// Player index --- 0 => the first mover (Sente, 先手), 1 => the second mover (Gote, 後手).
///
/// This is forced to mod-2 arithmetic, so it can represent both an absolute player and the
/// difference between players.
///
/// Reason for reinventing the wheel instead of using `bool` or a two-variant enum:
/// turn parity and the SMT encoding both want the numeric index, and the newtype keeps
/// the range invariant in one place.
///
/// ## Optional `serde` support
///
/// Serializes as the player index number (0/1). Deserialization will check the range.
///
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, From, Into)]
pub struct Player(u8);

/// The first mover (Sente).
pub const P0: Player = Player(0);
/// The second mover (Gote).
pub const P1: Player = Player(1);
pub const ALL_PLAYERS: [Player; 2] = [P0, P1];

impl Player {
    pub const fn new(x: u8) -> Self { Player(x & 1) }

    pub const fn to_u8(self) -> u8 { self.0 }
    pub const fn to_usize(self) -> usize { self.0 as usize }
    pub const fn to_i64(self) -> i64 { self.0 as i64 }

    /// The other player.
    pub const fn opponent(self) -> Self { Player(self.0 ^ 1) }

    /// The player to move at half-move index `t` (the first mover acts at even `t`).
    pub const fn for_turn(t: usize) -> Self { Player((t % 2) as u8) }

    /// Row increment of a forward step for this player.
    /// The first mover advances towards row 4, the second towards row 1.
    pub const fn forward(self) -> i64 {
        if self.0 == 0 { 1 } else { -1 }
    }

    /// The far rank of this player: the row on which the opposing pieces start.
    /// Reaching it promotes a Chick and, for a Lion, satisfies the "try" victory clause.
    pub const fn far_rank(self) -> i64 {
        if self.0 == 0 { NUM_ROWS as i64 } else { 1 }
    }
}

impl From<usize> for Player {
    fn from(x: usize) -> Self { Self::new(x as u8) }
}

impl Debug for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", if self.0 == 0 { "Sente" } else { "Gote" })
    }
}

/// Shorthand for [`Player::new`].
pub const fn player(i: u8) -> Player { Player::new(i) }

#[cfg(feature = "serde")]
mod player_serde {
    use core::fmt::Formatter;
    use serde::de::{Error, Visitor};
    use serde::*;

    use super::*;

    impl Serialize for Player {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error> where S: Serializer {
            s.serialize_u8(self.to_u8())
        }
    }

    impl<'de> Deserialize<'de> for Player {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
            struct PlayerVisitor;
            impl<'a> Visitor<'a> for PlayerVisitor {
                type Value = Player;

                fn expecting(&self, f: &mut Formatter) -> core::fmt::Result {
                    write!(f, "0..=1")
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> where E: Error {
                    if v <= 1 {
                        Ok(Player(v as u8))
                    } else {
                        Err(E::custom("out of range"))
                    }
                }
            }
            deserializer.deserialize_u8(PlayerVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_parity_alternates() {
        assert_eq!(Player::for_turn(0), P0);
        assert_eq!(Player::for_turn(1), P1);
        assert_eq!(Player::for_turn(6), P0);
        assert_eq!(Player::for_turn(7), P1);
    }

    #[test]
    fn forward_and_far_rank_oppose() {
        assert_eq!(P0.forward(), 1);
        assert_eq!(P1.forward(), -1);
        assert_eq!(P0.far_rank(), 4);
        assert_eq!(P1.far_rank(), 1);
        assert_eq!(P0.opponent(), P1);
        assert_eq!(P1.opponent(), P0);
    }
}
