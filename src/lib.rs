//! # klondike-engine
//!
//! Rules engine for single-player Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: A `GameModel` owns every pile. Presentation layers read
//!    through `GameModelView` and change the game only by performing moves.
//!
//! 2. **Moves Are Data**: `Move` is a small `Copy` enum. The model records
//!    each committed move once and reverts it on undo.
//!
//! 3. **Reproducible Deals**: Shuffles come from a seeded ChaCha8 stream, so
//!    a seed identifies a sequence of games.
//!
//! ## Modules
//!
//! - `core`: Seeded RNG and configuration
//! - `cards`: Cards, suits, ranks, and the card-sequence wire format
//! - `zones`: Deck, foundation, tableau, locations, and the location index
//! - `moves`: Move commands and undo history
//! - `rules`: The query contract for presentation layers
//! - `model`: The game model facade and change notification

pub mod core;
pub mod cards;
pub mod zones;
pub mod moves;
pub mod rules;
pub mod model;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState};

pub use crate::cards::{Card, Color, ParseCardError, Rank, Suit, WireError, DECK_SIZE};

pub use crate::zones::{
    CardStack, Deck, Foundation, Tableau,
    FoundationPile, Location, PileIndexError, TableauPile,
    FOUNDATION_PILES, TABLEAU_PILES,
};

pub use crate::moves::{CardMove, Move, MoveHistory, RevealTopMove};

pub use crate::rules::GameModelView;

pub use crate::model::{GameModel, GameModelListener, ListenerId};
