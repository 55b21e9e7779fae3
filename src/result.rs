//! Round result types for resolution.

use crate::card::Card;

/// How a player's hand ended against the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (house busts or player has the higher total).
    Win,
    /// House has the higher total.
    Lose,
    /// Push (tie).
    Push,
    /// Player went over 21 during their turn.
    Bust,
}

/// Result for a single player after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The cards the player finished with.
    pub cards: Vec<Card>,
    /// The player's final total.
    pub total: u8,
    /// The outcome of the hand.
    pub outcome: Outcome,
}

/// Result of the entire round after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The cards the house finished with.
    pub house_cards: Vec<Card>,
    /// The house's final total.
    pub house_total: u8,
    /// Whether the house busted.
    pub house_busted: bool,
}

impl RoundResult {
    /// Returns the result for the named player, if seated.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.name == name)
    }
}
