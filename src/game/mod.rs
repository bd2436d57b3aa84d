//! Game engine and turn state management.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::Player;

pub mod state;
mod turn;

pub use state::{Pickup, PickupSource, TurnOutcome, TurnPhase};

/// A game engine that owns the deck, the discard pile and the players, and
/// steps through turns one action at a time.
///
/// Each turn goes [`pick_up`](Self::pick_up), then
/// [`discard`](Self::discard) unless the player skipped, then
/// [`end_turn`](Self::end_turn).
///
/// # Example
///
/// ```
/// use onesuit::{Game, GameOptions, PickupSource, TurnPhase};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.deal().unwrap();
///
/// let drawn = game.pick_up(PickupSource::Deck).unwrap().card.unwrap();
/// assert_eq!(game.phase(), TurnPhase::DiscardPrompt);
/// game.discard(drawn).unwrap();
/// game.end_turn().unwrap();
///
/// assert_eq!(game.discard_pile().peek_top(), Some(&drawn));
/// assert_eq!(game.current_player_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players in turn order.
    players: Vec<Player>,
    /// Draw pile.
    deck: Deck,
    /// Discard pile.
    discard_pile: DiscardPile,
    /// Index of the player whose turn it is.
    current: usize,
    /// Phase of the current turn.
    phase: TurnPhase,
    /// Number of turns ended so far.
    turns_played: usize,
    /// Index of the winning player, once there is one.
    winner: Option<usize>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Players are named `Player1`, `Player2`, ... and start with empty hands;
    /// the deck holds all 52 cards, shuffled.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let players = (1..=options.players)
            .map(|n| Player::new(format!("Player{n}")))
            .collect();

        Self::with_rng(options, rng, players, deck, DiscardPile::new())
    }

    /// Creates a game from existing players, deck and discard pile.
    ///
    /// The first player is to act. `options.players` is not consulted; the
    /// game has as many players as `players` holds.
    #[must_use]
    pub fn from_parts(
        options: GameOptions,
        seed: u64,
        players: Vec<Player>,
        deck: Deck,
        discard_pile: DiscardPile,
    ) -> Self {
        Self::with_rng(
            options,
            ChaCha8Rng::seed_from_u64(seed),
            players,
            deck,
            discard_pile,
        )
    }

    fn with_rng(
        options: GameOptions,
        rng: ChaCha8Rng,
        players: Vec<Player>,
        deck: Deck,
        discard_pile: DiscardPile,
    ) -> Self {
        Self {
            options,
            players,
            deck,
            discard_pile,
            current: 0,
            phase: TurnPhase::ChoosePickupSource,
            turns_played: 0,
            winner: None,
            rng,
        }
    }

    /// Deals `options.hand_size` cards to each player from the front of the
    /// deck, one player at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] once a turn has been played or any
    /// player already holds cards, and [`DealError::NotEnoughCards`] if the
    /// deck cannot cover every hand. Nothing is dealt on error.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.turns_played > 0
            || self.phase != TurnPhase::ChoosePickupSource
            || self.players.iter().any(|player| !player.is_empty())
        {
            return Err(DealError::InvalidState);
        }

        let needed = self
            .players
            .len()
            .checked_mul(self.options.hand_size)
            .ok_or(DealError::NotEnoughCards)?;
        if self.deck.len() < needed {
            return Err(DealError::NotEnoughCards);
        }

        for player in &mut self.players {
            for _ in 0..self.options.hand_size {
                let card = self.deck.draw().map_err(|_| DealError::NotEnoughCards)?;
                player.add_card(card);
            }
        }

        info!(
            "dealt {} cards to each of {} players, {} left in the deck",
            self.options.hand_size,
            self.players.len(),
            self.deck.len()
        );
        Ok(())
    }

    /// Returns whether `player` holds a winning hand: at least
    /// `options.min_winning_hand` cards, all of one suit.
    ///
    /// Returns `false` for an unknown player index.
    #[must_use]
    pub fn verify_win(&self, player: usize) -> bool {
        self.players.get(player).is_some_and(|player| {
            player.len() >= self.options.min_winning_hand && player.is_single_suit()
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` if the game has no players.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns the phase of the current turn.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the number of turns ended so far.
    #[must_use]
    pub const fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Returns the index of the winning player, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Iterates every card in the game: hands in turn order, then the deck,
    /// then the discard pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.players
            .iter()
            .flat_map(|player| player.cards())
            .chain(self.deck.iter())
            .chain(self.discard_pile.cards())
    }
}
