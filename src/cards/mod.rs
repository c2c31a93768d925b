//! Cards and their text forms.
//!
//! ## Key Types
//!
//! - `Card`: Immutable rank + suit value, with derived `Color`
//! - `Rank`, `Suit`, `Color`: The card's components
//! - `serializer`: Card-sequence wire format used by drag-and-drop transfers

pub mod card;
pub mod serializer;

pub use card::{Card, Color, ParseCardError, Rank, Suit, DECK_SIZE};
pub use serializer::WireError;
