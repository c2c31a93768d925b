//! Text encoding of card sequences for drag-and-drop transfers.
//!
//! A sequence is written bottom to top as card tokens joined by `;`, e.g.
//! `"KH;QS;JD"`. The bottom card is the one the player grabbed, so a drop
//! target only ever needs [`deserialize_bottom_card`] to probe legality;
//! that reads the first token without decoding the rest.
//!
//! ```
//! use klondike_engine::cards::serializer::{deserialize, deserialize_bottom_card, serialize};
//! use klondike_engine::cards::{Card, Rank, Suit};
//! use klondike_engine::zones::CardStack;
//!
//! let stack = CardStack::from_cards([
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Spades),
//! ]);
//!
//! let text = serialize(&stack);
//! assert_eq!(text, "KH;QS");
//! assert_eq!(deserialize(&text).unwrap(), stack);
//! assert_eq!(deserialize_bottom_card(&text).unwrap(), Card::new(Rank::King, Suit::Hearts));
//! ```

use thiserror::Error;

use super::card::{Card, ParseCardError};
use crate::zones::CardStack;

/// Separator between card tokens.
pub const SEPARATOR: char = ';';

/// Error decoding a serialized card sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("serialized card sequence is empty")]
    Empty,
    #[error("bad card at position {position}: {source}")]
    BadCard {
        position: usize,
        #[source]
        source: ParseCardError,
    },
}

/// Encode a sequence of cards, bottom to top.
#[must_use]
pub fn serialize(cards: &CardStack) -> String {
    let mut out = String::with_capacity(cards.len() * 4);
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&card.to_string());
    }
    out
}

/// Decode a full sequence, bottom to top.
pub fn deserialize(text: &str) -> Result<CardStack, WireError> {
    if text.is_empty() {
        return Err(WireError::Empty);
    }

    let mut stack = CardStack::new();
    for (position, token) in text.split(SEPARATOR).enumerate() {
        let card = token
            .parse::<Card>()
            .map_err(|source| WireError::BadCard { position, source })?;
        stack.push(card);
    }
    Ok(stack)
}

/// Decode only the bottom card of a sequence.
pub fn deserialize_bottom_card(text: &str) -> Result<Card, WireError> {
    if text.is_empty() {
        return Err(WireError::Empty);
    }
    let token = text.split(SEPARATOR).next().unwrap_or(text);
    token
        .parse::<Card>()
        .map_err(|source| WireError::BadCard { position: 0, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn sequence() -> CardStack {
        CardStack::from_cards([
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Spades),
        ])
    }

    #[test]
    fn test_serialize_order() {
        assert_eq!(serialize(&sequence()), "9C;8H;7S");
    }

    #[test]
    fn test_single_card() {
        let stack = CardStack::from_cards([Card::new(Rank::Ace, Suit::Diamonds)]);
        let text = serialize(&stack);

        assert_eq!(text, "AD");
        assert_eq!(deserialize(&text).unwrap().peek(), Some(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(deserialize_bottom_card(&text).unwrap(), Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn test_round_trip() {
        let stack = sequence();
        assert_eq!(deserialize(&serialize(&stack)).unwrap(), stack);
    }

    #[test]
    fn test_bottom_card_ignores_tail() {
        // Only the first token is decoded.
        assert_eq!(
            deserialize_bottom_card("9C;garbage").unwrap(),
            Card::new(Rank::Nine, Suit::Clubs)
        );
        assert!(deserialize("9C;garbage").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(deserialize(""), Err(WireError::Empty));
        assert_eq!(deserialize_bottom_card(""), Err(WireError::Empty));
    }

    #[test]
    fn test_bad_token_position() {
        let err = deserialize("9C;8X;7S").unwrap_err();
        assert_eq!(
            err,
            WireError::BadCard {
                position: 1,
                source: ParseCardError::BadSuit("8X".to_string()),
            }
        );
        assert!(deserialize("9C;").is_err());
        assert!(deserialize_bottom_card(";9C").is_err());
    }
}
