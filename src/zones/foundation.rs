//! The four foundation piles, each built up by suit from Ace to King.

use crate::cards::{Card, Rank, Suit};

use super::location::{FoundationPile, FOUNDATION_PILES};
use super::stack::CardStack;

/// Suit-accumulation piles.
///
/// Invariant: a non-empty pile holds cards of one suit whose ranks are
/// exactly Ace, Two, ... up to its size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Foundation {
    piles: [CardStack; FOUNDATION_PILES],
    suits: Option<[Suit; FOUNDATION_PILES]>,
}

impl Foundation {
    /// Create empty piles. With `suits`, pile *i* only accepts `suits[i]`.
    #[must_use]
    pub fn new(suits: Option<[Suit; FOUNDATION_PILES]>) -> Self {
        Self {
            piles: Default::default(),
            suits,
        }
    }

    /// Empty every pile.
    pub fn initialize(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
    }

    /// The suit a pile accepts, if it is fixed by configuration or by the
    /// cards already on it.
    #[must_use]
    pub fn suit_of(&self, pile: FoundationPile) -> Option<Suit> {
        match self.suits {
            Some(suits) => Some(suits[pile.index()]),
            None => self.piles[pile.index()].peek().map(Card::suit),
        }
    }

    #[must_use]
    pub fn is_empty(&self, pile: FoundationPile) -> bool {
        self.piles[pile.index()].is_empty()
    }

    /// The top card of a pile.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty.
    #[must_use]
    pub fn peek(&self, pile: FoundationPile) -> Card {
        match self.piles[pile.index()].peek() {
            Some(card) => card,
            None => panic!("peek on empty foundation pile {}", pile.index()),
        }
    }

    /// Put a card on a pile.
    pub fn push(&mut self, card: Card, pile: FoundationPile) {
        debug_assert!(self.can_move_to(card, pile), "{} does not fit foundation {}", card, pile.index());
        self.piles[pile.index()].push(card);
    }

    /// Take the top card off a pile.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty.
    pub fn pop(&mut self, pile: FoundationPile) -> Card {
        assert!(!self.is_empty(pile), "pop on empty foundation pile {}", pile.index());
        self.piles[pile.index()].pop()
    }

    /// Whether `card` can be placed on `pile`.
    #[must_use]
    pub fn can_move_to(&self, card: Card, pile: FoundationPile) -> bool {
        if let Some(suits) = self.suits {
            if suits[pile.index()] != card.suit() {
                return false;
            }
        }

        match self.piles[pile.index()].peek() {
            None => card.rank() == Rank::Ace,
            Some(top) => top.suit() == card.suit() && top.rank().above() == Some(card.rank()),
        }
    }

    /// Cards across all four piles. This is the score.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.piles.iter().map(CardStack::len).sum()
    }

    /// A pile's cards, bottom to top.
    #[must_use]
    pub fn pile(&self, pile: FoundationPile) -> &CardStack {
        &self.piles[pile.index()]
    }
}
