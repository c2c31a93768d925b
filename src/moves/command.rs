//! Move commands.
//!
//! A `Move` is plain data describing one user-visible action. It knows how
//! to apply itself to the model's board and how to revert that application; the
//! model decides when to do either, records performed moves in its history,
//! and notifies listeners. No move touches the history itself.
//!
//! ## Lifecycle
//!
//! A move is obtained from the model's factories (`null_move`,
//! `discard_move`, `card_move`), performed once, and, if it is later undone,
//! discarded. Moves are never re-performed after an undo.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::model::{Board, GameModel};
use crate::zones::{Location, TableauPile};

/// Relocate a card, together with everything stacked on it when both ends
/// are tableau piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMove {
    card: Card,
    origin: Location,
    destination: Location,
}

impl CardMove {
    /// `origin` is where `card` is when the move is created.
    pub(crate) fn new(card: Card, origin: Location, destination: Location) -> Self {
        Self { card, origin, destination }
    }

    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    #[must_use]
    pub fn origin(&self) -> Location {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> Location {
        self.destination
    }

    fn apply(&self, board: &mut Board) {
        board.relocate(self.card, self.origin, self.destination);
    }

    fn revert(&self, board: &mut Board) {
        board.relocate(self.card, self.destination, self.origin);
    }
}

/// Turn the face-down top card of a tableau pile face up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealTopMove {
    pile: TableauPile,
}

impl RevealTopMove {
    pub(crate) fn new(pile: TableauPile) -> Self {
        Self { pile }
    }

    #[must_use]
    pub fn pile(&self) -> TableauPile {
        self.pile
    }

    fn apply(&self, board: &mut Board) {
        board.show_top(self.pile);
    }

    fn revert(&self, board: &mut Board) {
        board.hide_top(self.pile);
    }
}

/// A game action that can be performed and undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// "No move available." Performing it does nothing and records nothing.
    Null,

    /// Turn the top card of the deck onto the discard pile.
    Discard,

    /// Move a card (or a tableau run) to a new location.
    Card(CardMove),

    /// A card move that uncovers a face-down card, followed by turning that
    /// card face up. Undone as one unit: hide first, then move back.
    Composite {
        card_move: CardMove,
        reveal: RevealTopMove,
    },

    /// Recycle the whole discard pile back into the deck. Only recorded when
    /// deck recycling is configured as undoable.
    ResetDeck { count: usize },
}

impl Move {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// The card move inside this move, if any.
    #[must_use]
    pub fn card_move(&self) -> Option<&CardMove> {
        match self {
            Move::Card(card_move) | Move::Composite { card_move, .. } => Some(card_move),
            _ => None,
        }
    }

    /// Commit this move on `model`. Same as `model.perform(self)`.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal in the model's current state.
    pub fn perform(self, model: &mut GameModel) {
        model.perform(self);
    }

    pub(crate) fn apply(&self, board: &mut Board) {
        match self {
            Move::Null => {}
            Move::Discard => board.draw(),
            Move::Card(card_move) => card_move.apply(board),
            Move::Composite { card_move, reveal } => {
                card_move.apply(board);
                reveal.apply(board);
            }
            Move::ResetDeck { count } => {
                let moved = board.recycle_discard();
                assert_eq!(moved, *count, "deck reset recycled {} cards, expected {}", moved, count);
            }
        }
    }

    pub(crate) fn revert(&self, board: &mut Board) {
        match self {
            Move::Null => {}
            Move::Discard => board.undraw(),
            Move::Card(card_move) => card_move.revert(board),
            Move::Composite { card_move, reveal } => {
                reveal.revert(board);
                card_move.revert(board);
            }
            Move::ResetDeck { count } => board.unrecycle(*count),
        }
    }
}

impl fmt::Display for CardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.card, self.origin, self.destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Null => write!(f, "no move"),
            Move::Discard => write!(f, "discard"),
            Move::Card(card_move) => write!(f, "{}", card_move),
            Move::Composite { card_move, reveal } => {
                write!(f, "{}, revealing tableau {}", card_move, reveal.pile.index())
            }
            Move::ResetDeck { count } => write!(f, "reset deck ({} cards)", count),
        }
    }
}
