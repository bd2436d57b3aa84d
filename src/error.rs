//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing a card from its display form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text has no `" of "` between rank and suit.
    #[error("expected \"<rank> of <suit>\"")]
    MissingSeparator,
    /// The rank is not one of 2-10, Jack, Queen, King, Ace.
    #[error("unknown rank {0:?}")]
    UnknownRank(String),
    /// The suit is not one of Spades, Hearts, Diamonds, Clubs.
    #[error("unknown suit {0:?}")]
    UnknownSuit(String),
}

/// Errors that can occur on the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// The discard pile has no cards to refill the deck with.
    #[error("the discard pile has no cards to refill the deck with")]
    NothingToRefill,
    /// The deck still holds cards and cannot be refilled.
    #[error("the deck still holds cards")]
    NotEmpty,
}

/// Errors that can occur on a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No card at this position.
    #[error("no card at position {index} in a hand of {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Hand size.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid turn phase for this action.
    #[error("invalid turn phase for this action")]
    InvalidState,
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
    /// The discard pile is empty.
    #[error("the discard pile is empty")]
    DiscardPileEmpty,
    /// Both the deck and the discard pile are empty.
    #[error("no cards left in the deck or the discard pile")]
    NoCardsAvailable,
    /// The player does not hold this card.
    #[error("{0} is not in the hand")]
    CardNotInHand(Card),
    /// No card at the requested hand position.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur while saving or restoring a game.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Reading or writing the save failed.
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The save is not a valid game record.
    #[error("malformed save: {0}")]
    Json(#[from] serde_json::Error),
    /// The recorded player count does not match the player list.
    #[error("save records {recorded} players but lists {listed}")]
    PlayerCountMismatch {
        /// Value of the `players_number` field.
        recorded: usize,
        /// Length of the `players` list.
        listed: usize,
    },
    /// The saved cards are not exactly one standard deck.
    #[error("saved cards do not form a single 52-card deck")]
    CardSetMismatch,
    /// The save lists no players.
    #[error("save lists no players")]
    NoPlayers,
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ended before the game did.
    #[error("input closed")]
    InputClosed,
    /// Too many invalid answers to a prompt.
    #[error("too many invalid answers")]
    TooManyAttempts,
    /// Console i/o failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Saving or restoring failed.
    #[error(transparent)]
    Save(#[from] SaveError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A turn action failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
}
