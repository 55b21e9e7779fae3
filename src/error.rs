//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The draw pile is empty.
    #[error("out of cards")]
    OutOfCards,
}

/// Errors that can occur when turning a card over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The hand holds no card to flip.
    #[error("no card to flip")]
    NoCards,
}

/// Errors that can occur while seating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No player names were given.
    #[error("a table needs at least one player")]
    NoPlayers,
    /// More players than the table seats.
    #[error("{count} players requested but the table seats {max}")]
    TooManyPlayers {
        /// Number of players requested.
        count: usize,
        /// Number of seats at the table.
        max: u8,
    },
}

/// Errors that can occur while stepping through a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not at the stage this step belongs to.
    #[error("invalid round state for this step")]
    InvalidState,
}
