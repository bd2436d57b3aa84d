//! The draw pile.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, standard_deck};
use crate::discard::DiscardPile;
use crate::error::DeckError;

/// The draw pile of undealt cards. Cards are drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a full 52-card deck in random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::from_cards(standard_deck());
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck holding `cards`, the first one on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Randomizes the order of the cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Refills an empty deck with every card of the discard pile, leaving the
    /// pile empty, then shuffles.
    ///
    /// Returns the number of cards moved.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEmpty`] if the deck still holds cards, or
    /// [`DeckError::NothingToRefill`] if the pile is empty. Neither side is
    /// touched on error.
    pub fn refill<R: Rng + ?Sized>(
        &mut self,
        discard_pile: &mut DiscardPile,
        rng: &mut R,
    ) -> Result<usize, DeckError> {
        if !self.is_empty() {
            return Err(DeckError::NotEmpty);
        }
        if discard_pile.is_empty() {
            return Err(DeckError::NothingToRefill);
        }

        self.cards = discard_pile.take_all().into();
        self.shuffle(rng);
        Ok(self.cards.len())
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Iterates the cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
