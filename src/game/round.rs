use crate::console::Console;
use crate::error::RoundError;
use crate::player::Participant;

use super::{Game, RoundState, report_deal_error, report_flip_error};

impl Game {
    /// Deals the opening cards, hides the house's first card and shows
    /// every seat.
    ///
    /// Cards go out in two passes: one to each player in seating order, then
    /// one to the house. If the pile runs dry the missing cards are simply
    /// not dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not waiting for a deal.
    pub fn deal(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Waiting)?;

        if self.options.reshuffle_between_rounds {
            self.reshuffle()?;
        }

        for _ in 0..2 {
            for player in &mut self.players {
                if let Err(err) = self.deck.deal(player.hand_mut()) {
                    report_deal_error(console, err);
                }
            }
            if let Err(err) = self.deck.deal(self.house.hand_mut()) {
                report_deal_error(console, err);
            }
        }

        if let Err(err) = self.house.flip_first_card() {
            report_flip_error(console, err);
        }

        for player in &self.players {
            console.write_line(&player.describe());
        }
        console.write_line(&self.house.describe());

        self.enter(RoundState::PlayerTurns);
        Ok(())
    }

    /// Lets each player, in seating order, draw until they stand or bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt yet.
    pub fn play_players(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurns)?;

        for player in &mut self.players {
            if let Err(err) = self.deck.deal_additional(player, console) {
                report_deal_error(console, err);
            }
            tracing::debug!(
                player = player.name(),
                total = player.hand().total(),
                busted = player.is_busted(),
                "player turn over"
            );
        }

        self.enter(RoundState::HouseTurn);
        Ok(())
    }
}
