//! The owned piles of one game and the primitive transfers between them.
//!
//! `Board` keeps the location index in step with the piles: every transfer
//! that crosses a pile boundary goes through a method here. Legality is not
//! checked at this level; callers (moves, via the model) have already done so.

use log::trace;

use crate::cards::{Card, Suit};
use crate::core::GameRng;
use crate::zones::{
    CardStack, Deck, Foundation, FoundationPile, Location, LocationIndex, Tableau, TableauPile,
    FOUNDATION_PILES,
};

/// Deck, discard pile, foundation, and tableau.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    deck: Deck,
    discard: CardStack,
    foundation: Foundation,
    tableau: Tableau,
    index: LocationIndex,
}

impl Board {
    /// An undealt board: full ordered deck, everything else empty.
    #[must_use]
    pub(crate) fn new(foundation_suits: Option<[Suit; FOUNDATION_PILES]>) -> Self {
        Self {
            deck: Deck::new(),
            discard: CardStack::new(),
            foundation: Foundation::new(foundation_suits),
            tableau: Tableau::new(),
            index: LocationIndex::new(),
        }
    }

    /// Shuffle all 52 cards and deal a fresh game.
    pub(crate) fn deal(&mut self, rng: &mut GameRng) {
        self.deck.shuffle(rng);
        self.discard.clear();
        self.foundation.initialize();
        self.tableau.initialize(&mut self.deck);

        self.index.clear();
        for pile in TableauPile::ALL {
            for card in self.tableau.pile(pile) {
                self.index.place(card, Location::Tableau(pile));
            }
        }
    }

    #[must_use]
    pub(crate) fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub(crate) fn discard(&self) -> &CardStack {
        &self.discard
    }

    #[must_use]
    pub(crate) fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    #[must_use]
    pub(crate) fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Where `card` can currently be moved from.
    ///
    /// `None` when the card is in the deck or buried under another card in
    /// the discard pile or a foundation pile. Any tableau position counts.
    #[must_use]
    pub(crate) fn find(&self, card: Card) -> Option<Location> {
        let location = self.index.get(card)?;
        let found = match location {
            Location::DiscardPile => self.discard.peek() == Some(card),
            Location::Foundation(pile) => self.foundation.pile(pile).peek() == Some(card),
            Location::Tableau(pile) => {
                debug_assert!(self.tableau.contains_in(card, pile));
                true
            }
        };
        trace!("find {} -> {:?}", card, found.then_some(location));
        found.then_some(location)
    }

    /// Deck top onto the discard pile.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty.
    pub(crate) fn draw(&mut self) {
        assert!(!self.deck.is_empty(), "draw from an empty deck");
        let card = self.deck.pop();
        self.discard.push(card);
        self.index.place(card, Location::DiscardPile);
    }

    /// Discard top back onto the deck.
    ///
    /// # Panics
    ///
    /// Panics if the discard pile is empty.
    pub(crate) fn undraw(&mut self) {
        assert!(!self.discard.is_empty(), "undraw from an empty discard pile");
        let card = self.discard.pop();
        self.index.remove(card);
        self.deck.push(card);
    }

    /// Move `card` from `from` to `to`. Between two tableau piles the whole
    /// run above `card` moves with it.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not the movable card at `from`.
    pub(crate) fn relocate(&mut self, card: Card, from: Location, to: Location) {
        if let (Location::Tableau(source), Location::Tableau(dest)) = (from, to) {
            let moved = self.tableau.move_within(card, source, dest);
            for moved_card in &moved {
                self.index.place(moved_card, to);
            }
            return;
        }

        let taken = match from {
            Location::DiscardPile => {
                assert!(!self.discard.is_empty(), "move from an empty discard pile");
                self.discard.pop()
            }
            Location::Foundation(pile) => self.foundation.pop(pile),
            Location::Tableau(pile) => self.tableau.pop(pile),
        };
        assert_eq!(taken, card, "{} is not the top card of the {}", card, from);

        match to {
            Location::DiscardPile => self.discard.push(card),
            Location::Foundation(pile) => self.foundation.push(card, pile),
            Location::Tableau(pile) => self.tableau.push(card, pile),
        }
        self.index.place(card, to);
    }

    pub(crate) fn show_top(&mut self, pile: TableauPile) {
        self.tableau.show_top(pile);
    }

    pub(crate) fn hide_top(&mut self, pile: TableauPile) {
        self.tableau.hide_top(pile);
    }

    /// Turn the discard pile back into the deck, one card at a time, so the
    /// deck ends up in reverse discard order. Returns the number moved.
    pub(crate) fn recycle_discard(&mut self) -> usize {
        let count = self.discard.len();
        while !self.discard.is_empty() {
            let card = self.discard.pop();
            self.index.remove(card);
            self.deck.push(card);
        }
        count
    }

    /// Reverse [`Board::recycle_discard`] for `count` cards.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than `count` cards.
    pub(crate) fn unrecycle(&mut self, count: usize) {
        assert!(self.deck.len() >= count, "cannot return {} cards from a deck of {}", count, self.deck.len());
        for _ in 0..count {
            let card = self.deck.pop();
            self.discard.push(card);
            self.index.place(card, Location::DiscardPile);
        }
    }

    /// Every card on the board, deck first, then discard, foundation, and
    /// tableau piles, each bottom to top.
    pub(crate) fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .cards()
            .iter()
            .chain(self.discard.iter())
            .chain(FoundationPile::ALL.into_iter().flat_map(|p| self.foundation.pile(p).iter()))
            .chain(TableauPile::ALL.into_iter().flat_map(|p| self.tableau.pile(p).iter()))
    }

    /// Number of cards the location index tracks (everything outside the
    /// deck).
    #[cfg(test)]
    pub(crate) fn indexed_cards(&self) -> usize {
        self.index.len()
    }
}
