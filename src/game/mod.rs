//! Round controller and table state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::{DealError, FlipError, RoundError, TableError};
use crate::options::TableOptions;
use crate::player::{House, Participant, Player};
use crate::result::RoundResult;

mod dealer;
mod round;
pub mod state;

pub use state::RoundState;

/// A blackjack table: the seated players, the house, and the draw pile.
///
/// The game owns every hand and the deck. A round runs through
/// [`Game::deal`], [`Game::play_players`], [`Game::play_house`],
/// [`Game::resolve`] and [`Game::clear_round`], in that order;
/// [`Game::play_round`] does all of them.
#[derive(Debug)]
pub struct Game {
    /// Table options.
    options: TableOptions,
    /// Seated players, in the order they joined.
    players: Vec<Player>,
    /// The dealer.
    house: House,
    /// The shared draw pile.
    deck: Deck,
    /// Current position within the round.
    state: RoundState,
    /// Rounds finished so far.
    rounds_played: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Seats the named players and shuffles a fresh deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, TableOptions};
    ///
    /// let game = Game::new(["Alice", "Bob"], TableOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if no names are given or there are more names than
    /// seats.
    pub fn new<I, S>(names: I, options: TableOptions, seed: u64) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.is_empty() {
            return Err(TableError::NoPlayers);
        }
        if players.len() > usize::from(options.max_players) {
            return Err(TableError::TooManyPlayers {
                count: players.len(),
                max: options.max_players,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        tracing::info!(seed, players = players.len(), "table seated");

        Ok(Self {
            options,
            players,
            house: House::new(options.house_hits_through),
            deck,
            state: RoundState::Waiting,
            rounds_played: 0,
            rng,
        })
    }

    /// Rebuilds the deck with all 52 cards and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Waiting {
            return Err(RoundError::InvalidState);
        }

        self.deck.populate();
        self.deck.shuffle(&mut self.rng);
        tracing::debug!("deck repopulated and shuffled");
        Ok(())
    }

    /// Plays one full round and returns how every player fared.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn play_round(&mut self, console: &mut dyn Console) -> Result<RoundResult, RoundError> {
        let round = self.rounds_played + 1;
        let span = tracing::info_span!("round", round);
        let _enter = span.enter();

        self.deal(console)?;
        self.play_players(console)?;
        self.play_house(console)?;
        let result = self.resolve(console)?;
        self.clear_round();

        tracing::info!(
            house_total = result.house_total,
            cards_remaining = self.deck.len(),
            "round finished"
        );
        Ok(result)
    }

    /// Discards every hand and readies the table for the next deal.
    ///
    /// The draw pile is left as it is.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.house.hand_mut().clear();

        if self.state == RoundState::Resolution {
            self.rounds_played += 1;
        }
        self.state = RoundState::Waiting;
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the house.
    #[must_use]
    pub const fn house(&self) -> &House {
        &self.house
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the draw pile for replacing or stacking.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of rounds finished.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn enter(&mut self, state: RoundState) {
        tracing::debug!(from = ?self.state, to = ?state, "round state change");
        self.state = state;
    }
}

fn report_deal_error(console: &mut dyn Console, err: DealError) {
    tracing::warn!(%err, "deal skipped");
    match err {
        DealError::OutOfCards => console.write_line("Out of cards. Unable to deal."),
    }
}

fn report_flip_error(console: &mut dyn Console, err: FlipError) {
    tracing::warn!(%err, "flip skipped");
    match err {
        FlipError::NoCards => console.write_line("No card to flip!"),
    }
}
