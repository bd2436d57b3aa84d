//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use onesuit::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_hand_size(7)
///     .with_max_discard_attempts(Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players.
    pub players: u8,
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Smallest hand that can win. Hands below this size never win.
    pub min_winning_hand: usize,
    /// How many invalid discard answers a player may give in one turn.
    /// `None` to keep asking forever.
    pub max_discard_attempts: Option<u32>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 3,
            hand_size: 10,
            min_winning_hand: 2,
            max_discard_attempts: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use onesuit::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use onesuit::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the smallest hand that can win.
    #[must_use]
    pub const fn with_min_winning_hand(mut self, cards: usize) -> Self {
        self.min_winning_hand = cards;
        self
    }

    /// Sets how many invalid discard answers are tolerated per turn.
    ///
    /// # Example
    ///
    /// ```
    /// use onesuit::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_discard_attempts(Some(3));
    /// assert_eq!(options.max_discard_attempts, Some(3));
    /// ```
    #[must_use]
    pub const fn with_max_discard_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_discard_attempts = attempts;
        self
    }
}
