//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_max_players(5)
///     .with_house_hits_through(16)
///     .with_reshuffle_between_rounds(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of seats at the table.
    pub max_players: u8,
    /// The house keeps hitting while its total is at most this value.
    pub house_hits_through: u8,
    /// Whether the deck is repopulated and reshuffled before every round.
    ///
    /// Off by default: the same pile is dealt from until it runs out.
    pub reshuffle_between_rounds: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_players: 7,
            house_hits_through: 16,
            reshuffle_between_rounds: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of seats at the table.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the highest total on which the house still hits.
    #[must_use]
    pub const fn with_house_hits_through(mut self, total: u8) -> Self {
        self.house_hits_through = total;
        self
    }

    /// Sets whether the deck is rebuilt before every round.
    #[must_use]
    pub const fn with_reshuffle_between_rounds(mut self, reshuffle: bool) -> Self {
        self.reshuffle_between_rounds = reshuffle;
        self
    }
}
