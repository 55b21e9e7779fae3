//! Players and the house.

use core::fmt::Write;

use crate::console::{self, Console};
use crate::error::FlipError;
use crate::hand::{BLACKJACK, Hand};

/// Display name of the dealer.
pub const HOUSE_NAME: &str = "House";

/// Anyone holding a hand at the table.
pub trait Participant {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the hand.
    fn hand(&self) -> &Hand;

    /// Returns the hand for dealing into.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Decides whether to take another card.
    fn is_hitting(&self, console: &mut dyn Console) -> bool;

    /// Returns whether the hand is over 21.
    fn is_busted(&self) -> bool {
        self.hand().total() > BLACKJACK
    }

    /// Announces that this participant busted.
    fn announce_bust(&self, console: &mut dyn Console) {
        console.write_line(&format!("{} busts.", self.name()));
    }

    /// Renders the seat: name, cards, and the total when it is visible.
    fn describe(&self) -> String {
        describe_seat(self.name(), self.hand())
    }
}

fn describe_seat(name: &str, hand: &Hand) -> String {
    let mut line = format!("{name}:\t");
    if hand.is_empty() {
        line.push_str("<empty>");
        return line;
    }
    for card in hand.cards() {
        let _ = write!(line, "{card}\t");
    }
    let total = hand.total();
    if total != 0 {
        let _ = write!(line, "({total})");
    }
    line
}

/// A human player who is asked before every hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Seats a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Announces a win.
    pub fn announce_win(&self, console: &mut dyn Console) {
        console.write_line(&format!("{} wins.", self.name));
    }

    /// Announces a loss.
    pub fn announce_lose(&self, console: &mut dyn Console) {
        console.write_line(&format!("{} loses.", self.name));
    }

    /// Announces a push.
    pub fn announce_push(&self, console: &mut dyn Console) {
        console.write_line(&format!("{} pushes.", self.name));
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting(&self, console: &mut dyn Console) -> bool {
        let prompt = format!("{}, do you want a hit? (Y/N): ", self.name);
        console::ask_yes_no(console, &prompt).unwrap_or(false)
    }
}

/// The dealer, which hits on a fixed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    hand: Hand,
    hits_through: u8,
}

impl House {
    /// Creates a house that hits while its total is at most `hits_through`.
    #[must_use]
    pub const fn new(hits_through: u8) -> Self {
        Self {
            hand: Hand::new(),
            hits_through,
        }
    }

    /// Turns over the first card dealt to the house.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::NoCards`] if the house has no cards.
    pub fn flip_first_card(&mut self) -> Result<(), FlipError> {
        self.hand.flip_first_card()
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new(16)
    }
}

impl Participant for House {
    fn name(&self) -> &str {
        HOUSE_NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting(&self, _console: &mut dyn Console) -> bool {
        self.hand.total() <= self.hits_through
    }
}
