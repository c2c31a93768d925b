//! The face-down draw pile.

use crate::cards::{Card, DECK_SIZE};
use crate::core::GameRng;

use super::stack::CardStack;

/// The deck: a card stack that can be refilled and shuffled.
///
/// Only `reset()` shuffles. During play the deck is drawn from by discard
/// moves and refilled, card by card, when the discard pile is recycled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: CardStack,
}

impl Deck {
    /// A full deck in suit-then-rank order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// Refill with all 52 cards and permute them.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = Card::all().collect();
        rng.shuffle(&mut cards);
        self.cards = CardStack::from_cards(cards);
        debug_assert_eq!(self.cards.len(), DECK_SIZE);
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draw the top card.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty.
    pub fn pop(&mut self) -> Card {
        self.cards.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.peek()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The deck's cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &CardStack {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deck_is_full() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards().iter().collect::<Vec<_>>(), Card::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_refills_and_permutes() {
        let mut deck = Deck::new();
        for _ in 0..10 {
            deck.pop();
        }

        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::new());

        let mut ids: Vec<_> = deck.cards().iter().map(Card::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_and_return() {
        let mut deck = Deck::new();
        let top = deck.peek().unwrap();

        let drawn = deck.pop();
        assert_eq!(drawn, top);
        assert_eq!(deck.len(), DECK_SIZE - 1);

        deck.push(drawn);
        assert_eq!(deck.peek(), Some(top));
    }
}
