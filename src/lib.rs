//! A terminal card game engine: collect a hand of a single suit.
//!
//! Each player holds ten cards. On their turn a player takes the top of the
//! discard pile or draws from the deck, then discards a card; or they skip
//! the turn entirely. The first player whose whole hand shares one suit wins.
//!
//! The crate provides a [`Game`] type that steps through turns, a
//! [`Session`] that plays a game over a text [`Console`], and save stores
//! that persist the game after every turn.
//!
//! # Example
//!
//! ```
//! use onesuit::{Game, GameOptions, MemoryStore};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//!
//! let mut store = MemoryStore::new();
//! game.save(&mut store).unwrap();
//! let restored = Game::restore(&mut store, GameOptions::default(), 42).unwrap();
//! assert_eq!(restored.players(), game.players());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod save;
pub mod session;

// Re-export main types
pub use card::{ALL_RANKS, ALL_SUITS, Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use deck::Deck;
pub use discard::DiscardPile;
pub use error::{
    DealError, DeckError, HandError, ParseCardError, SaveError, SessionError, TurnError,
};
pub use game::{Game, Pickup, PickupSource, TurnOutcome, TurnPhase};
pub use options::GameOptions;
pub use player::Player;
pub use save::{FileStore, MemoryStore, SaveStore, SavedGame, SavedPlayer};
pub use session::{Console, IoConsole, Session};
