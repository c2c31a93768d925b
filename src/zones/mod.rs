//! Piles and card locations.
//!
//! ## Key Types
//!
//! - `CardStack`: Ordered card storage, bottom to top
//! - `Deck`: The shuffled draw pile
//! - `Foundation`: Four suit piles built Ace to King
//! - `Tableau`: Seven fan-down piles with face-down bottoms
//! - `Location`: Discard pile, a foundation pile, or a tableau pile
//! - `LocationIndex`: O(1) card-to-location lookup

pub mod stack;
pub mod deck;
pub mod foundation;
pub mod tableau;
pub mod location;
pub mod index;

pub use stack::CardStack;
pub use deck::Deck;
pub use foundation::Foundation;
pub use tableau::Tableau;
pub use location::{
    FoundationPile, Location, PileIndexError, TableauPile, FOUNDATION_PILES, TABLEAU_PILES,
};
pub use index::LocationIndex;
