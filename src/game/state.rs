//! Turn state types.

use core::fmt;

use crate::card::Card;

/// Phase of the current player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the player to pick a card source or skip.
    ChoosePickupSource,
    /// Waiting for the player to discard a card.
    DiscardPrompt,
    /// Actions are done; the turn can be ended.
    TurnComplete,
    /// A player has won. No further turns.
    GameOver,
}

/// Where a player takes a card from at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupSource {
    /// Take the top of the discard pile.
    DiscardPile,
    /// Draw from the front of the deck.
    Deck,
    /// Take nothing and discard nothing.
    Skip,
}

impl PickupSource {
    /// Returns the menu key players type to pick this source.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DiscardPile => "1",
            Self::Deck => "2",
            Self::Skip => "3",
        }
    }
}

impl fmt::Display for PickupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DiscardPile => "take the top of the discard pile",
            Self::Deck => "draw from the deck",
            Self::Skip => "skip",
        })
    }
}

/// Result of ending a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play moves on to the next player.
    Continue {
        /// Index of the player whose turn is next.
        next_player: usize,
        /// Cards moved from the discard pile into the empty deck, if any.
        refilled: Option<usize>,
    },
    /// The acting player holds a winning hand.
    Won {
        /// Index of the winning player.
        player: usize,
    },
}

/// What happened during the pickup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    /// The source the player chose.
    pub source: PickupSource,
    /// The card added to the hand, `None` on skip.
    pub card: Option<Card>,
}
