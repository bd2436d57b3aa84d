//! The discard pile.

use core::mem;

use crate::card::Card;

/// Stack of discarded cards. Only the top (most recently pushed) card is
/// reachable by players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding `cards`, the last one on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Puts a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Removes and returns the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empties the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Empties the pile and returns its cards, bottom first.
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        mem::take(&mut self.cards)
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }
}
