//! The seven tableau piles.
//!
//! Each pile is a card stack plus a count of face-down cards at its bottom.
//! Face-up cards therefore always form a contiguous run ending at the top;
//! the only way to grow the face-down part is `hide_top`, which exists solely
//! to undo a `show_top`.

use crate::cards::{Card, Rank};

use super::deck::Deck;
use super::location::{TableauPile, TABLEAU_PILES};
use super::stack::CardStack;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Column {
    cards: CardStack,
    /// Cards `0..face_down` are hidden.
    face_down: usize,
}

impl Column {
    fn is_visible_at(&self, index: usize) -> bool {
        index >= self.face_down && index < self.cards.len()
    }
}

/// Fan-down working piles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    columns: [Column; TABLEAU_PILES],
}

impl Tableau {
    /// Create seven empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal from the deck: pile *i* gets *i + 1* cards, only the top one
    /// face up.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than 28 cards.
    pub fn initialize(&mut self, deck: &mut Deck) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.cards.clear();
            for _ in 0..=i {
                column.cards.push(deck.pop());
            }
            column.face_down = i;
        }
    }

    /// Pile and index (from the bottom) of a card, if it is in the tableau.
    #[must_use]
    pub fn locate(&self, card: Card) -> Option<(TableauPile, usize)> {
        TableauPile::ALL
            .into_iter()
            .find_map(|pile| self.columns[pile.index()].cards.position(card).map(|i| (pile, i)))
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.locate(card).is_some()
    }

    #[must_use]
    pub fn contains_in(&self, card: Card, pile: TableauPile) -> bool {
        self.columns[pile.index()].cards.contains(card)
    }

    /// Whether `card` is face up in some pile. False for cards not in the
    /// tableau.
    #[must_use]
    pub fn is_visible(&self, card: Card) -> bool {
        self.locate(card)
            .is_some_and(|(pile, i)| self.columns[pile.index()].is_visible_at(i))
    }

    /// Whether `card` is the bottom of its pile's face-up run.
    #[must_use]
    pub fn is_lowest_visible(&self, card: Card) -> bool {
        self.locate(card)
            .is_some_and(|(pile, i)| self.columns[pile.index()].face_down == i)
    }

    /// Whether `card` is a King at the very bottom of its pile.
    #[must_use]
    pub fn is_bottom_king(&self, card: Card) -> bool {
        card.rank() == Rank::King && matches!(self.locate(card), Some((_, 0)))
    }

    /// Whether moving `card` (with everything above it) off its pile would
    /// leave a face-down card on top.
    #[must_use]
    pub fn reveals_top(&self, card: Card) -> bool {
        self.locate(card)
            .is_some_and(|(pile, i)| i > 0 && self.columns[pile.index()].face_down == i)
    }

    /// A pile's cards, bottom to top.
    #[must_use]
    pub fn pile(&self, pile: TableauPile) -> &CardStack {
        &self.columns[pile.index()].cards
    }

    /// Number of face-down cards at the bottom of a pile.
    #[must_use]
    pub fn face_down_count(&self, pile: TableauPile) -> usize {
        self.columns[pile.index()].face_down
    }

    /// `card` and every card above it, bottom to top.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not face up in `pile`.
    #[must_use]
    pub fn sequence(&self, card: Card, pile: TableauPile) -> CardStack {
        let column = &self.columns[pile.index()];
        let index = Self::visible_index(column, card, pile);
        column.cards.as_slice()[index..].iter().copied().collect()
    }

    /// Turn a pile's face-down top card face up.
    ///
    /// # Panics
    ///
    /// Panics unless the pile's top card is face down.
    pub fn show_top(&mut self, pile: TableauPile) {
        let column = &mut self.columns[pile.index()];
        assert!(
            !column.cards.is_empty() && column.face_down == column.cards.len(),
            "show_top on tableau {} whose top is not face down",
            pile.index()
        );
        column.face_down -= 1;
    }

    /// Turn a pile's top card back face down.
    ///
    /// # Panics
    ///
    /// Panics unless the top card is the pile's only face-up card.
    pub fn hide_top(&mut self, pile: TableauPile) {
        let column = &mut self.columns[pile.index()];
        assert!(
            !column.cards.is_empty() && column.face_down + 1 == column.cards.len(),
            "hide_top on tableau {} whose top is not the only face-up card",
            pile.index()
        );
        column.face_down += 1;
    }

    /// Whether `card` can be placed on `pile`.
    ///
    /// Never panics: a face-down card is simply not movable.
    #[must_use]
    pub fn can_move_to(&self, card: Card, pile: TableauPile) -> bool {
        if self.contains(card) && !self.is_visible(card) {
            return false;
        }

        match self.columns[pile.index()].cards.peek() {
            None => card.rank() == Rank::King,
            Some(top) => top.color() != card.color() && top.rank().below() == Some(card.rank()),
        }
    }

    /// Put a card face up on top of a pile.
    pub fn push(&mut self, card: Card, pile: TableauPile) {
        self.columns[pile.index()].cards.push(card);
    }

    /// Take the face-up top card off a pile.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty or its top card is face down.
    pub fn pop(&mut self, pile: TableauPile) -> Card {
        let column = &mut self.columns[pile.index()];
        assert!(
            column.face_down < column.cards.len(),
            "pop on tableau {} without a face-up top card",
            pile.index()
        );
        column.cards.pop()
    }

    /// Move `card` and everything above it from `source` to `dest` in one
    /// step, keeping their order and face-up state.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not face up in `source`.
    pub fn move_within(&mut self, card: Card, source: TableauPile, dest: TableauPile) -> CardStack {
        let index = Self::visible_index(&self.columns[source.index()], card, source);
        let moved = self.columns[source.index()].cards.split_off(index);
        self.columns[dest.index()].cards.append(moved.clone());
        moved
    }

    fn visible_index(column: &Column, card: Card, pile: TableauPile) -> usize {
        match column.cards.position(card) {
            Some(index) if column.is_visible_at(index) => index,
            _ => panic!("{} is not face up in tableau {}", card, pile.index()),
        }
    }
}
