//! Saving and restoring games.
//!
//! A game is saved as one JSON record:
//!
//! ```json
//! {
//!   "playersNumber": 3,
//!   "players": [{ "name": "Player1", "cards": ["Queen of Hearts", "2 of Clubs"] }],
//!   "deck": ["Ace of Spades"],
//!   "discardPile": ["10 of Diamonds"]
//! }
//! ```
//!
//! Cards are stored in their display form. Deck cards are listed front first,
//! discard pile cards bottom first. The record carries no turn position, so a
//! restored game resumes with the first player.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::SaveError;
use crate::game::Game;
use crate::options::GameOptions;
use crate::player::Player;

/// Where saved games are read from and written to.
pub trait SaveStore {
    /// Returns the saved record.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is saved or reading fails.
    fn read(&mut self) -> io::Result<String>;

    /// Replaces the saved record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&mut self, record: &str) -> io::Result<()>;
}

/// A save kept in a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Default save file name, in the working directory.
    pub const DEFAULT_PATH: &'static str = "saved_game.json";

    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the save file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl SaveStore for FileStore {
    fn read(&mut self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn write(&mut self, record: &str) -> io::Result<()> {
        fs::write(&self.path, record)
    }
}

/// A save kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    record: Option<String>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            record: None,
            writes: 0,
        }
    }

    /// Creates a store already holding `record`.
    #[must_use]
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
            writes: 0,
        }
    }

    /// Returns the last written record.
    #[must_use]
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    /// Returns how many times the record was written.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl SaveStore for MemoryStore {
    fn read(&mut self) -> io::Result<String> {
        self.record
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no saved game"))
    }

    fn write(&mut self, record: &str) -> io::Result<()> {
        self.record = Some(record.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// A player as saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlayer {
    /// Player name.
    pub name: String,
    /// Hand, in order.
    pub cards: Vec<Card>,
}

/// The saved form of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Number of players.
    #[serde(alias = "players_number")]
    pub players_number: usize,
    /// Players in turn order.
    pub players: Vec<SavedPlayer>,
    /// Deck, front first.
    pub deck: Vec<Card>,
    /// Discard pile, bottom first.
    #[serde(alias = "discard_pile")]
    pub discard_pile: Vec<Card>,
}

impl From<&Game> for SavedGame {
    fn from(game: &Game) -> Self {
        Self {
            players_number: game.players().len(),
            players: game
                .players()
                .iter()
                .map(|player| SavedPlayer {
                    name: player.name().to_owned(),
                    cards: player.cards().to_vec(),
                })
                .collect(),
            deck: game.deck().iter().copied().collect(),
            discard_pile: game.discard_pile().cards().to_vec(),
        }
    }
}

impl SavedGame {
    /// Checks that the record describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is wrong, there are no players, or
    /// the cards are not exactly one standard deck.
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.players_number != self.players.len() {
            return Err(SaveError::PlayerCountMismatch {
                recorded: self.players_number,
                listed: self.players.len(),
            });
        }
        if self.players.is_empty() {
            return Err(SaveError::NoPlayers);
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let all_cards = self
            .players
            .iter()
            .flat_map(|player| &player.cards)
            .chain(&self.deck)
            .chain(&self.discard_pile);
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(SaveError::CardSetMismatch);
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(SaveError::CardSetMismatch);
        }

        Ok(())
    }

    /// Builds a game from the record. The first player is to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails [`validate`](Self::validate).
    pub fn into_game(self, options: GameOptions, seed: u64) -> Result<Game, SaveError> {
        self.validate()?;

        let players = self
            .players
            .into_iter()
            .map(|player| Player::with_hand(player.name, player.cards))
            .collect();
        Ok(Game::from_parts(
            options,
            seed,
            players,
            Deck::from_cards(self.deck),
            DiscardPile::from_cards(self.discard_pile),
        ))
    }
}

impl Game {
    /// Writes the full game state to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save<S: SaveStore + ?Sized>(&self, store: &mut S) -> Result<(), SaveError> {
        let record = serde_json::to_string_pretty(&SavedGame::from(self))?;
        store.write(&record)?;
        info!(
            "saved game: {} players, {} cards in the deck, {} in the discard pile",
            self.players().len(),
            self.deck().len(),
            self.discard_pile().len()
        );
        Ok(())
    }

    /// Restores a game saved with [`Game::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, the record is malformed,
    /// or its cards are not exactly one standard deck.
    pub fn restore<S: SaveStore + ?Sized>(
        store: &mut S,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SaveError> {
        let record = store.read()?;
        let saved: SavedGame = serde_json::from_str(&record)?;
        let game = saved.into_game(options, seed)?;
        info!("restored game with {} players", game.players().len());
        Ok(game)
    }
}
