//! Game configuration.
//!
//! The rules of Klondike are fixed; what a host can choose is how deals are
//! seeded, whether foundation piles are pinned to suits, and whether
//! recycling the discard pile can be undone.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Complete game configuration.
///
/// ```
/// use klondike_engine::core::GameConfig;
///
/// let config = GameConfig::new(42)
///     .with_suit_order()
///     .with_undoable_deck_reset();
///
/// assert_eq!(config.seed, 42);
/// assert!(config.foundation_suits.is_some());
/// assert!(config.undoable_deck_reset);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shuffle stream. Successive resets draw successive deals.
    pub seed: u64,

    /// Suit assigned to each foundation pile, by pile index.
    ///
    /// `None`: any Ace opens any empty pile and the pile follows that suit.
    #[serde(default)]
    pub foundation_suits: Option<[Suit; 4]>,

    /// Record recycling of the discard pile as an undoable move.
    #[serde(default)]
    pub undoable_deck_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameConfig {
    /// Create a configuration with the given seed and default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            foundation_suits: None,
            undoable_deck_reset: false,
        }
    }

    /// Pin foundation piles to suits in enumeration order.
    #[must_use]
    pub fn with_suit_order(self) -> Self {
        self.with_foundation_suits(Suit::ALL)
    }

    /// Pin foundation piles to the given suits.
    ///
    /// # Panics
    ///
    /// Panics if a suit appears twice.
    #[must_use]
    pub fn with_foundation_suits(mut self, suits: [Suit; 4]) -> Self {
        for (i, suit) in suits.iter().enumerate() {
            assert!(
                !suits[..i].contains(suit),
                "Suit {} assigned to more than one foundation pile",
                suit
            );
        }
        self.foundation_suits = Some(suits);
        self
    }

    /// Make `reset_deck` record an undoable move.
    #[must_use]
    pub fn with_undoable_deck_reset(mut self) -> Self {
        self.undoable_deck_reset = true;
        self
    }
}
