//! Round state types.

/// Where the table is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Between rounds, waiting for the next deal.
    #[default]
    Waiting,
    /// Cards are out and players are taking their turns.
    PlayerTurns,
    /// Every player is done; the house plays out its hand.
    HouseTurn,
    /// The house is done and hands can be compared.
    Resolution,
}
