//! Ordered card stacks.
//!
//! `CardStack` is the storage behind the deck, the discard pile, and every
//! foundation and tableau pile. Index 0 is the bottom; the last index is the
//! top. Iteration runs bottom to top, which is the order piles are drawn in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// An ordered LIFO sequence of cards.
///
/// SmallVec keeps piles of up to 20 cards inline; a tableau pile never holds
/// more than 19 (6 face-down plus King to Ace).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardStack {
    cards: SmallVec<[Card; 20]>,
}

impl CardStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> Card {
        self.cards.pop().expect("pop on an empty card stack")
    }

    /// The top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of `card` in this stack, counted from the bottom.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().copied()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove the cards from `index` to the top, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn split_off(&mut self, index: usize) -> CardStack {
        assert!(index <= self.len(), "split index {} past stack of {}", index, self.len());
        Self {
            cards: self.cards.drain(index..).collect(),
        }
    }

    /// Place every card of `other` on top, bottom first.
    pub fn append(&mut self, other: CardStack) {
        self.cards.extend(other.cards);
    }
}

impl<'a> IntoIterator for &'a CardStack {
    type Item = Card;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter().copied()
    }
}

impl FromIterator<Card> for CardStack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
