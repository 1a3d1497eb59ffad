//! [`PieceKind`] and [`PieceId`].

use core::fmt::{Debug, Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Number of pieces in a game. Pieces persist for the whole game; captures only
/// change ownership.
pub const NUM_PIECES: usize = 8;

/// The kind of a piece, immutable for the lifetime of a game.
///
/// All kinds move exactly one step; see the `dobutsu` crate for the step sets.
/// A promoted Chick *acts* as a Hen while keeping kind `Chick`; `Hen` also exists
/// as a directly assignable kind for constructed positions.
///
/// The integer encoding is significant: it is the value domain of the per-piece
/// kind variable in the SMT encoding and should never be changed.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash,
    IntoPrimitive, TryFromPrimitive,
    strum::Display, strum::EnumIter,
)]
#[repr(u8)]
pub enum PieceKind {
    /// One step in any of the 8 directions.
    Lion = 0,
    /// One step orthogonally.
    Giraffe = 1,
    /// One step diagonally.
    Elephant = 2,
    /// One step forward.
    Chick = 3,
    /// One step orthogonally, or diagonally forward (the Gold pattern).
    Hen = 4,
}

impl PieceKind {
    pub const MIN_ENCODING: u8 = 0;
    pub const MAX_ENCODING: u8 = 4;

    pub const fn to_u8(self) -> u8 { self as u8 }
    pub const fn to_i64(self) -> i64 { self as i64 }
}

/// Identity of one of the eight pieces (0..=7).
///
/// ## Optional `serde` support
///
/// Serializes as the index number. Deserialization will check the range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PieceId(u8);

impl PieceId {
    pub const MAX_ENCODING: u8 = NUM_PIECES as u8 - 1;

    pub const fn new(x: u8) -> Option<Self> {
        if x <= Self::MAX_ENCODING { Some(Self(x)) } else { None }
    }

    pub const fn to_u8(self) -> u8 { self.0 }
    pub const fn to_usize(self) -> usize { self.0 as usize }
    pub const fn to_i64(self) -> i64 { self.0 as i64 }

    /// All eight piece identities, in index order.
    pub fn all() -> impl Iterator<Item = PieceId> + Clone {
        (0..NUM_PIECES as u8).map(PieceId)
    }
}

impl Debug for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shorthand for [`PieceId::new`] in positions known to be in range.
///
/// # Panics
/// If `x > 7`.
pub fn piece_id(x: u8) -> PieceId {
    PieceId::new(x).expect("piece id out of range")
}

#[cfg(feature = "serde")]
mod piece_id_serde {
    use core::fmt::Formatter;
    use serde::de::{Error, Visitor};
    use serde::*;

    use super::*;

    impl Serialize for PieceId {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error> where S: Serializer {
            s.serialize_u8(self.to_u8())
        }
    }

    impl<'de> Deserialize<'de> for PieceId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
            struct PieceIdVisitor;
            impl<'a> Visitor<'a> for PieceIdVisitor {
                type Value = PieceId;

                fn expecting(&self, f: &mut Formatter) -> core::fmt::Result {
                    write!(f, "0..=7")
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> where E: Error {
                    u8::try_from(v).ok().and_then(PieceId::new)
                        .ok_or_else(|| E::custom("out of range"))
                }
            }
            deserializer.deserialize_u8(PieceIdVisitor)
        }
    }
}

#[cfg(feature = "serde")]
mod piece_kind_serde {
    use serde::*;

    use super::*;

    impl Serialize for PieceKind {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error> where S: Serializer {
            s.serialize_u8(self.to_u8())
        }
    }

    impl<'de> Deserialize<'de> for PieceKind {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
            let v = u8::deserialize(deserializer)?;
            PieceKind::try_from(v).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kind_encoding_roundtrip() {
        for kind in PieceKind::iter() {
            assert_eq!(PieceKind::try_from(kind.to_u8()), Ok(kind));
        }
        assert!(PieceKind::try_from(5u8).is_err());
    }

    #[test]
    fn piece_id_range() {
        assert_eq!(PieceId::all().count(), NUM_PIECES);
        assert!(PieceId::new(7).is_some());
        assert!(PieceId::new(8).is_none());
    }
}
