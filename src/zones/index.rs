//! Card-to-location side index.
//!
//! Tracks the `Location` of every card outside the deck so that finding a
//! card is a hash lookup rather than a scan over all twelve piles. The board
//! updates it on every push and pop that crosses pile boundaries.

use rustc_hash::FxHashMap;

use crate::cards::Card;

use super::location::Location;

#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    locations: FxHashMap<Card, Location>,
}

impl LocationIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `card` is now at `location`, replacing any prior entry.
    pub fn place(&mut self, card: Card, location: Location) {
        self.locations.insert(card, location);
    }

    /// Forget a card (it went back into the deck).
    pub fn remove(&mut self, card: Card) -> Option<Location> {
        self.locations.remove(&card)
    }

    #[must_use]
    pub fn get(&self, card: Card) -> Option<Location> {
        self.locations.get(&card).copied()
    }

    /// Cards tracked, i.e. cards not in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }
}
