//! Interactive play over a text console.
//!
//! A [`Session`] asks whether to resume the saved game, then drives the
//! [`Game`] turn by turn with prompts until someone wins, saving after every
//! turn. Input and output go through a [`Console`], so a whole game can be
//! played from a script.

use std::io::{self, BufRead, Stdout, Write};

use log::{debug, warn};

use crate::card::Card;
use crate::error::{SessionError, TurnError};
use crate::game::{Game, Pickup, PickupSource, TurnOutcome, TurnPhase};
use crate::options::GameOptions;
use crate::player::Player;
use crate::save::SaveStore;

/// Line-based text input and output.
pub trait Console {
    /// Prints a line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Prints `prompt` and reads one line, trimmed.
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl IoConsole<io::StdinLock<'static>, Stdout> {
    /// Creates a console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

/// Plays a game interactively.
#[derive(Debug)]
pub struct Session<C, S> {
    console: C,
    store: S,
    options: GameOptions,
    seed: u64,
}

impl<C: Console, S: SaveStore> Session<C, S> {
    /// Creates a session. `seed` drives every shuffle of the game.
    pub const fn new(console: C, store: S, options: GameOptions, seed: u64) -> Self {
        Self {
            console,
            store,
            options,
            seed,
        }
    }

    /// Returns the console and the store.
    pub fn into_parts(self) -> (C, S) {
        (self.console, self.store)
    }

    /// Sets up a game and plays it until someone wins. Returns the finished
    /// game.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends, the save cannot be read or written, or
    /// a player gives too many invalid answers.
    pub fn run(&mut self) -> Result<Game, SessionError> {
        let mut game = self.start()?;
        self.show_table(&game)?;

        loop {
            match self.play_turn(&mut game)? {
                TurnOutcome::Won { player } => {
                    let name = game.players().get(player).map_or("", Player::name);
                    self.console.show(&format!("{name} wins!"))?;
                    return Ok(game);
                }
                TurnOutcome::Continue { .. } => self.show_table(&game)?,
            }
        }
    }

    /// Asks whether to resume the saved game. A new game is dealt and saved
    /// right away.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends, the saved game cannot be restored, or
    /// the new game cannot be dealt or saved.
    pub fn start(&mut self) -> Result<Game, SessionError> {
        loop {
            let answer = self.ask("Load the saved game? (y/n) ")?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => {
                    return Ok(Game::restore(&mut self.store, self.options, self.seed)?);
                }
                "n" | "no" => break,
                _ => self.console.show("Please answer y or n.")?,
            }
        }

        let mut game = Game::new(self.options, self.seed);
        game.deal()?;
        game.save(&mut self.store)?;
        Ok(game)
    }

    /// Plays the current player's turn, then saves.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends, the game cannot be saved, or the player
    /// gives too many invalid discard answers.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<TurnOutcome, SessionError> {
        let name = game
            .current_player()
            .map(|player| player.name().to_owned())
            .ok_or(TurnError::InvalidState)?;
        self.console.show(&format!("\n{name}'s turn:"))?;

        if let Some(top) = game.discard_pile().peek_top() {
            self.console
                .show(&format!("Top of the discard pile: {top}"))?;
        }

        let pickup = self.choose_source(game)?;
        let message = match (pickup.source, pickup.card) {
            (PickupSource::DiscardPile, Some(card)) => {
                format!("{name} took {card} from the discard pile")
            }
            (PickupSource::Deck, _) => format!("{name} drew a card from the deck"),
            _ => format!("{name} skipped their turn"),
        };
        self.console.show(&message)?;

        if game.phase() == TurnPhase::DiscardPrompt {
            self.choose_discard(game, &name)?;
        }

        let outcome = game.end_turn()?;
        if let TurnOutcome::Continue {
            refilled: Some(moved),
            ..
        } = outcome
        {
            self.console.show(&format!(
                "Deck is empty. Refilled with {moved} cards from the discard pile."
            ))?;
        }
        game.save(&mut self.store)?;
        Ok(outcome)
    }

    fn choose_source(&mut self, game: &mut Game) -> Result<Pickup, SessionError> {
        let sources = game.available_sources();
        let menu = sources
            .iter()
            .map(|source| format!("{} to {source}", source.key()))
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            let answer = self.ask(&format!("{menu}: "))?;
            let Some(&source) = sources.iter().find(|source| source.key() == answer) else {
                warn!("unrecognized pickup choice {answer:?}");
                self.console.show("Invalid choice. Try again.")?;
                continue;
            };

            match game.pick_up(source) {
                Ok(pickup) => return Ok(pickup),
                Err(TurnError::NoCardsAvailable | TurnError::DiscardPileEmpty) => {
                    self.console.show("No cards left there. Try again.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn choose_discard(&mut self, game: &mut Game, name: &str) -> Result<(), SessionError> {
        let mut attempts = 0;
        loop {
            let hand = game.current_player().map_or(&[][..], Player::cards);
            self.console
                .show(&format!("Choose a card to discard from {name}'s hand:"))?;
            self.console.show(&format!("Hand: {}", numbered(hand)))?;

            let answer = self.ask("Enter the card (or its number) to discard: ")?;
            let hand = game.current_player().map_or(&[][..], Player::cards);

            if let Some(index) = select_card(hand, &answer) {
                let card = game.discard_at(index)?;
                self.console
                    .show(&format!("{name} discarded {card} from their hand"))?;
                return Ok(());
            }

            attempts += 1;
            warn!("{name} picked {answer:?}, which is not in their hand");
            if self
                .options
                .max_discard_attempts
                .is_some_and(|max| attempts >= max)
            {
                return Err(SessionError::TooManyAttempts);
            }
            self.console.show("Invalid choice. Try again.")?;
        }
    }

    fn show_table(&mut self, game: &Game) -> Result<(), SessionError> {
        for player in game.players() {
            self.console
                .show(&format!("{} : {}", player.name(), listed(player.cards())))?;
        }
        self.console
            .show(&format!("The deck contains {} cards", game.deck().len()))?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        let answer = self
            .console
            .ask(prompt)?
            .ok_or(SessionError::InputClosed)?;
        debug!("input {answer:?}");
        Ok(answer)
    }
}

/// Finds the hand position named by `answer`: a card such as
/// `"Queen of Hearts"`, or a 1-based position.
fn select_card(hand: &[Card], answer: &str) -> Option<usize> {
    if let Ok(position) = answer.parse::<usize>() {
        return position.checked_sub(1).filter(|&index| index < hand.len());
    }
    let card = answer.parse::<Card>().ok()?;
    hand.iter().position(|held| *held == card)
}

fn listed(cards: &[Card]) -> String {
    let names = cards.iter().map(Card::to_string).collect::<Vec<_>>();
    format!("[{}]", names.join(", "))
}

fn numbered(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}) {card}", index + 1))
        .collect::<Vec<_>>()
        .join("  ")
}
