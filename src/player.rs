//! Players and their hands.

use crate::card::Card;
use crate::error::HandError;

/// A named player holding an ordered hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Creates a player holding `hand`.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if there is no card there.
    pub fn remove_card_at(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.hand.len() {
            return Err(HandError::IndexOutOfRange {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Returns the position of `card` in the hand.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|held| held == card)
    }

    /// Returns whether every card shares the suit of the first one.
    ///
    /// Vacuously true for hands of zero or one card.
    #[must_use]
    pub fn is_single_suit(&self) -> bool {
        self.hand
            .first()
            .is_none_or(|first| self.hand.iter().all(|card| card.suit == first.suit))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
