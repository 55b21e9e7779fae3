use core::cmp::Ordering;

use crate::console::Console;
use crate::error::RoundError;
use crate::player::Participant;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, RoundState, report_deal_error, report_flip_error};

impl Game {
    /// House plays its hand.
    ///
    /// The house turns its hidden card back up, shows its seat and then
    /// draws while its total is at most
    /// [`house_hits_through`](crate::TableOptions::house_hits_through).
    ///
    /// # Errors
    ///
    /// Returns an error if the players have not finished their turns.
    pub fn play_house(&mut self, console: &mut dyn Console) -> Result<(), RoundError> {
        self.ensure_state(RoundState::HouseTurn)?;

        if let Err(err) = self.house.flip_first_card() {
            report_flip_error(console, err);
        }
        console.write_line("");
        console.write_line(&self.house.describe());

        if let Err(err) = self.deck.deal_additional(&mut self.house, console) {
            report_deal_error(console, err);
        }
        tracing::debug!(
            total = self.house.hand().total(),
            busted = self.house.is_busted(),
            "house turn over"
        );

        self.enter(RoundState::Resolution);
        Ok(())
    }

    /// Compares every hand still standing against the house and announces
    /// the outcome.
    ///
    /// Players who busted during their turn are reported as
    /// [`Outcome::Bust`] and are not announced again. Hands stay on the
    /// table until [`Game::clear_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the house has not played yet.
    pub fn resolve(&mut self, console: &mut dyn Console) -> Result<RoundResult, RoundError> {
        self.ensure_state(RoundState::Resolution)?;

        let house_total = self.house.hand().total();
        let house_busted = self.house.is_busted();

        let mut results = Vec::with_capacity(self.players.len());

        for player in &self.players {
            let total = player.hand().total();

            let outcome = if player.is_busted() {
                Outcome::Bust
            } else if house_busted {
                Outcome::Win
            } else {
                match total.cmp(&house_total) {
                    Ordering::Greater => Outcome::Win,
                    Ordering::Less => Outcome::Lose,
                    Ordering::Equal => Outcome::Push,
                }
            };

            match outcome {
                Outcome::Win => player.announce_win(console),
                Outcome::Lose => player.announce_lose(console),
                Outcome::Push => player.announce_push(console),
                Outcome::Bust => {}
            }
            tracing::debug!(player = player.name(), total, ?outcome, "hand resolved");

            results.push(PlayerResult {
                name: player.name().to_string(),
                cards: player.hand().cards().to_vec(),
                total,
                outcome,
            });
        }

        Ok(RoundResult {
            players: results,
            house_cards: self.house.hand().cards().to_vec(),
            house_total,
            house_busted,
        })
    }
}
