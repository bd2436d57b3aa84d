use log::{debug, info, warn};

use crate::card::Card;
use crate::error::TurnError;
use crate::player::Player;

use super::{Game, Pickup, PickupSource, TurnOutcome, TurnPhase};

impl Game {
    fn ensure_phase(&self, phase: TurnPhase) -> Result<(), TurnError> {
        if self.phase == TurnPhase::GameOver {
            return Err(TurnError::GameOver);
        }
        if self.phase != phase {
            return Err(TurnError::InvalidState);
        }
        Ok(())
    }

    fn acting_player(&mut self) -> Result<&mut Player, TurnError> {
        self.players
            .get_mut(self.current)
            .ok_or(TurnError::InvalidState)
    }

    /// Returns the sources the current player may pick from, in menu order.
    ///
    /// The discard pile is offered only when it holds cards, and the deck only
    /// while the deck or the pile (which refills it) holds cards. Skipping is
    /// always offered.
    #[must_use]
    pub fn available_sources(&self) -> Vec<PickupSource> {
        let mut sources = Vec::with_capacity(3);
        if !self.discard_pile.is_empty() {
            sources.push(PickupSource::DiscardPile);
        }
        if !self.deck.is_empty() || !self.discard_pile.is_empty() {
            sources.push(PickupSource::Deck);
        }
        sources.push(PickupSource::Skip);
        sources
    }

    /// Takes a card for the current player, or skips the turn.
    ///
    /// After a pickup the turn waits for a discard; after a skip it can be
    /// ended right away. Drawing from an empty deck first refills it from the
    /// discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the turn is past the pickup step,
    /// the discard pile is chosen while empty, or the deck is chosen while
    /// both the deck and the discard pile are empty. The turn is unchanged on
    /// error, so the player can pick again or skip.
    pub fn pick_up(&mut self, source: PickupSource) -> Result<Pickup, TurnError> {
        self.ensure_phase(TurnPhase::ChoosePickupSource)?;
        // Fail before touching any pile if there is nobody to act.
        self.acting_player()?;

        let card = match source {
            PickupSource::DiscardPile => {
                Some(self.discard_pile.pop_top().ok_or(TurnError::DiscardPileEmpty)?)
            }
            PickupSource::Deck => {
                if self.deck.is_empty() {
                    let moved = self
                        .deck
                        .refill(&mut self.discard_pile, &mut self.rng)
                        .map_err(|_| TurnError::NoCardsAvailable)?;
                    info!("deck was empty, refilled with {moved} cards from the discard pile");
                }
                Some(self.deck.draw().map_err(|_| TurnError::NoCardsAvailable)?)
            }
            PickupSource::Skip => None,
        };

        let player = self.acting_player()?;
        match card {
            Some(card) => {
                player.add_card(card);
                debug!("{} took {card} ({source})", player.name());
                self.phase = TurnPhase::DiscardPrompt;
            }
            None => {
                debug!("{} skipped their turn", player.name());
                self.phase = TurnPhase::TurnComplete;
            }
        }

        Ok(Pickup { source, card })
    }

    /// Moves `card` from the current player's hand to the top of the discard
    /// pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is not waiting for a discard or the player
    /// does not hold `card`.
    pub fn discard(&mut self, card: Card) -> Result<(), TurnError> {
        self.ensure_phase(TurnPhase::DiscardPrompt)?;
        let index = self
            .acting_player()?
            .position_of(&card)
            .ok_or(TurnError::CardNotInHand(card))?;
        self.discard_at(index).map(|_| ())
    }

    /// Moves the card at `index` in the current player's hand to the top of
    /// the discard pile, and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is not waiting for a discard or there is
    /// no card at `index`.
    pub fn discard_at(&mut self, index: usize) -> Result<Card, TurnError> {
        self.ensure_phase(TurnPhase::DiscardPrompt)?;
        let player = self.acting_player()?;
        let card = player.remove_card_at(index)?;
        debug!("{} discarded {card}", player.name());

        self.discard_pile.push(card);
        self.phase = TurnPhase::TurnComplete;
        Ok(card)
    }

    /// Ends the current turn.
    ///
    /// Refills an empty deck from the discard pile, then checks the acting
    /// player's hand. A winning hand ends the game; otherwise play passes to
    /// the next player. Callers persist the game after every turn with
    /// [`Game::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the turn still needs a pickup
    /// or a discard.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        self.ensure_phase(TurnPhase::TurnComplete)?;

        let refilled = if self.deck.is_empty() {
            match self.deck.refill(&mut self.discard_pile, &mut self.rng) {
                Ok(moved) => {
                    info!("deck is empty, refilled with {moved} cards from the discard pile");
                    Some(moved)
                }
                Err(err) => {
                    warn!("deck is empty and cannot be refilled: {err}");
                    None
                }
            }
        } else {
            None
        };

        self.turns_played += 1;
        let acting = self.current;

        if self.verify_win(acting) {
            if let Some(player) = self.players.get(acting) {
                info!("{} wins after {} turns", player.name(), self.turns_played);
            }
            self.winner = Some(acting);
            self.phase = TurnPhase::GameOver;
            return Ok(TurnOutcome::Won { player: acting });
        }

        self.current = (acting + 1) % self.players.len().max(1);
        self.phase = TurnPhase::ChoosePickupSource;
        Ok(TurnOutcome::Continue {
            next_player: self.current,
            refilled,
        })
    }
}
