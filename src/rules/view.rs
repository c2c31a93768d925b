//! Read-only query contract for presentation layers.
//!
//! A view decides what to draw and which drops to accept using only these
//! methods, then commits by performing a move obtained from one of the move
//! factories. Nothing here mutates the game.
//!
//! ## Implementation Notes
//!
//! - `is_legal_move` must never panic, whatever card and location it is given
//! - `peek_*` and `sub_stack` assert their preconditions
//! - Move factories capture the state at creation time; perform the move
//!   before anything else changes the game

use crate::cards::Card;
use crate::moves::Move;
use crate::zones::{CardStack, FoundationPile, Location, TableauPile};

/// State queries and move factories.
pub trait GameModelView {
    fn is_deck_empty(&self) -> bool;

    fn is_discard_pile_empty(&self) -> bool;

    fn is_foundation_pile_empty(&self, pile: FoundationPile) -> bool;

    /// Top card of a foundation pile.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty.
    fn peek_suit_stack(&self, pile: FoundationPile) -> Card;

    /// Top card of the discard pile.
    ///
    /// # Panics
    ///
    /// Panics if the discard pile is empty.
    fn peek_discard_pile(&self) -> Card;

    /// A tableau pile's cards, bottom to top.
    fn tableau_pile(&self, pile: TableauPile) -> &CardStack;

    /// Whether `card` is face up in the tableau.
    fn is_visible_in_tableau(&self, card: Card) -> bool;

    /// Whether `card` is the lowest face-up card of its tableau pile.
    fn is_lowest_visible_in_tableau(&self, card: Card) -> bool;

    /// `card` and every card above it in `pile`, bottom to top.
    ///
    /// # Panics
    ///
    /// Panics unless `card` is face up in `pile`.
    fn sub_stack(&self, card: Card, pile: TableauPile) -> CardStack;

    /// Whether `card` is a King at the bottom of its tableau pile, where
    /// moving it to an empty pile would achieve nothing.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not in the tableau.
    fn is_bottom_king(&self, card: Card) -> bool;

    /// Whether moving `card` to `destination` is allowed right now.
    fn is_legal_move(&self, card: Card, destination: Location) -> bool;

    /// A move that does nothing.
    fn null_move(&self) -> Move;

    /// A move that turns the deck's top card onto the discard pile.
    fn discard_move(&self) -> Move;

    /// A move of `card` to `destination`; composite if it uncovers a
    /// face-down tableau card.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not at a movable position.
    fn card_move(&self, card: Card, destination: Location) -> Move;

    // === Convenience Methods ===

    /// Every legal card move on the board.
    ///
    /// Skips moving a bottom King to an empty pile. The discard move is not
    /// included.
    fn legal_moves(&self) -> Vec<Move> {
        let mut sources = Vec::new();

        if !self.is_discard_pile_empty() {
            sources.push(self.peek_discard_pile());
        }
        for pile in FoundationPile::ALL {
            if !self.is_foundation_pile_empty(pile) {
                sources.push(self.peek_suit_stack(pile));
            }
        }
        for pile in TableauPile::ALL {
            sources.extend(self.tableau_pile(pile).iter().filter(|&card| self.is_visible_in_tableau(card)));
        }

        let destinations = FoundationPile::ALL
            .into_iter()
            .map(Location::Foundation)
            .chain(TableauPile::ALL.into_iter().map(Location::Tableau));

        let mut moves = Vec::new();
        for destination in destinations {
            for &card in &sources {
                if !self.is_legal_move(card, destination) {
                    continue;
                }
                if let Location::Tableau(pile) = destination {
                    if self.tableau_pile(pile).is_empty()
                        && self.is_visible_in_tableau(card)
                        && self.is_bottom_king(card)
                    {
                        continue;
                    }
                }
                moves.push(self.card_move(card, destination));
            }
        }
        moves
    }
}
