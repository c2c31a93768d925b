//! Where a movable card can be: the discard pile, a foundation pile, or a
//! tableau pile.
//!
//! The deck is deliberately not a `Location`: cards there are face down and
//! can only leave through a discard move.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// A pile index that names no pile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} pile index {index} out of range")]
pub struct PileIndexError {
    kind: &'static str,
    index: u8,
}

/// One of the four foundation piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct FoundationPile(u8);

impl FoundationPile {
    /// All foundation piles in index order.
    pub const ALL: [FoundationPile; FOUNDATION_PILES] =
        [FoundationPile(0), FoundationPile(1), FoundationPile(2), FoundationPile(3)];

    /// Create a pile handle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < FOUNDATION_PILES, "Foundation pile index {} out of range", index);
        Self(index as u8)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for FoundationPile {
    type Error = PileIndexError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < FOUNDATION_PILES {
            Ok(Self(index))
        } else {
            Err(PileIndexError { kind: "foundation", index })
        }
    }
}

/// One of the seven tableau piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct TableauPile(u8);

impl TableauPile {
    /// All tableau piles in index order.
    pub const ALL: [TableauPile; TABLEAU_PILES] = [
        TableauPile(0),
        TableauPile(1),
        TableauPile(2),
        TableauPile(3),
        TableauPile(4),
        TableauPile(5),
        TableauPile(6),
    ];

    /// Create a pile handle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < TABLEAU_PILES, "Tableau pile index {} out of range", index);
        Self(index as u8)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for TableauPile {
    type Error = PileIndexError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < TABLEAU_PILES {
            Ok(Self(index))
        } else {
            Err(PileIndexError { kind: "tableau", index })
        }
    }
}

/// Source or destination of a card move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    DiscardPile,
    Foundation(FoundationPile),
    Tableau(TableauPile),
}

impl From<FoundationPile> for Location {
    fn from(pile: FoundationPile) -> Self {
        Location::Foundation(pile)
    }
}

impl From<TableauPile> for Location {
    fn from(pile: TableauPile) -> Self {
        Location::Tableau(pile)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::DiscardPile => write!(f, "discard pile"),
            Location::Foundation(pile) => write!(f, "foundation {}", pile.index()),
            Location::Tableau(pile) => write!(f, "tableau {}", pile.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_indices() {
        for (i, pile) in FoundationPile::ALL.iter().enumerate() {
            assert_eq!(pile.index(), i);
            assert_eq!(FoundationPile::new(i), *pile);
        }
        for (i, pile) in TableauPile::ALL.iter().enumerate() {
            assert_eq!(pile.index(), i);
            assert_eq!(TableauPile::new(i), *pile);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tableau_out_of_range() {
        let _ = TableauPile::new(7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_foundation_out_of_range() {
        let _ = FoundationPile::new(4);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Location::from(TableauPile::new(3)), Location::Tableau(TableauPile::new(3)));
        assert_eq!(Location::from(FoundationPile::new(1)), Location::Foundation(FoundationPile::new(1)));

        assert_eq!(TableauPile::try_from(6u8), Ok(TableauPile::new(6)));
        assert_eq!(FoundationPile::try_from(4u8).unwrap_err().to_string(), "foundation pile index 4 out of range");
    }

    #[test]
    fn test_deserialize_checks_range() {
        let location: Location = serde_json::from_str(r#"{"Foundation":3}"#).unwrap();
        assert_eq!(location, Location::Foundation(FoundationPile::new(3)));

        assert!(serde_json::from_str::<Location>(r#"{"Foundation":9}"#).is_err());
        assert!(serde_json::from_str::<Location>(r#"{"Tableau":7}"#).is_err());
        assert!(serde_json::from_str::<TableauPile>("255").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::DiscardPile.to_string(), "discard pile");
        assert_eq!(Location::from(FoundationPile::new(2)).to_string(), "foundation 2");
        assert_eq!(Location::from(TableauPile::new(6)).to_string(), "tableau 6");
    }
}
