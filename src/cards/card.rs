//! Playing cards: rank, suit, and derived color.
//!
//! A `Card` is a small `Copy` value; two cards are the same card iff they
//! have the same rank and suit. Exactly 52 distinct values exist.
//!
//! ## Text form
//!
//! Each card has a short token: rank (`A`, `2`..`10`, `J`, `Q`, `K`)
//! followed by suit (`C`, `D`, `S`, `H`).
//!
//! ```
//! use klondike_engine::cards::{Card, Rank, Suit};
//!
//! let card: Card = "10H".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(card.to_string(), "10H");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value: Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// The rank one below this one, if any.
    #[must_use]
    pub fn below(self) -> Option<Rank> {
        (self as usize).checked_sub(1).map(|i| Rank::ALL[i])
    }

    /// The rank one above this one, if any.
    #[must_use]
    pub fn above(self) -> Option<Rank> {
        Rank::ALL.get(self as usize + 1).copied()
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card color, used for tableau sequencing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
        };
        write!(f, "{}", name)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Dense index in `0..52`, suit-major.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    /// Inverse of [`Card::id`]. Returns `None` for ids outside `0..52`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        let suit = *Suit::ALL.get(usize::from(id / 13))?;
        Some(Self::new(Rank::ALL[usize::from(id % 13)], suit))
    }

    /// All 52 cards, ordered by suit then rank.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Error parsing a single card token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card token")]
    Empty,
    #[error("unknown rank in card token {0:?}")]
    BadRank(String),
    #[error("unknown suit in card token {0:?}")]
    BadSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = chars.as_str();

        let suit = Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == suit_char)
            .ok_or_else(|| ParseCardError::BadSuit(s.to_string()))?;
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == rank_part)
            .ok_or_else(|| ParseCardError::BadRank(s.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);

        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).color(), Color::Red);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);

        assert_eq!(Rank::Ace.below(), None);
        assert_eq!(Rank::Two.below(), Some(Rank::Ace));
        assert_eq!(Rank::Queen.above(), Some(Rank::King));
        assert_eq!(Rank::King.above(), None);
    }

    #[test]
    fn test_all_cards_distinct() {
        let cards: Vec<_> = Card::all().collect();
        assert_eq!(cards.len(), DECK_SIZE);

        let mut ids: Vec<_> = cards.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_id_round_trip() {
        for card in Card::all() {
            assert_eq!(Card::from_id(card.id()), Some(card));
        }
        assert_eq!(Card::from_id(52), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
        assert_eq!(Card::new(Rank::King, Suit::Clubs).to_string(), "KC");
        assert_eq!(Suit::Hearts.to_string(), "hearts");
    }

    #[test]
    fn test_parse() {
        assert_eq!("QH".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Hearts)));
        assert_eq!("2C".parse::<Card>(), Ok(Card::new(Rank::Two, Suit::Clubs)));

        for card in Card::all() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("1H".parse::<Card>(), Err(ParseCardError::BadRank("1H".to_string())));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::BadSuit("AX".to_string())));
        assert_eq!("H".parse::<Card>(), Err(ParseCardError::BadRank("H".to_string())));
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Jack, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
