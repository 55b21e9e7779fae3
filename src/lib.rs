//! A single-table console blackjack game for one to seven players.
//!
//! The crate provides a [`Game`] type that deals from a single 52-card
//! [`Deck`], lets every [`Player`] hit or stand, plays the [`House`] on a
//! fixed rule, and resolves each hand as a win, loss, or push. All text goes
//! through the [`Console`] trait, so a round can be driven from stdin or from
//! a script.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Game, StdConsole, TableOptions};
//!
//! let mut game = Game::new(["Alice"], TableOptions::default(), 42).unwrap();
//! let mut console = StdConsole::new();
//! let result = game.play_round(&mut console).unwrap();
//! let _ = result;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::{Console, StdConsole};
pub use deck::Deck;
pub use error::{DealError, FlipError, RoundError, TableError};
pub use game::{Game, RoundState};
pub use hand::{BLACKJACK, Hand};
pub use options::TableOptions;
pub use player::{House, Participant, Player};
pub use result::{Outcome, PlayerResult, RoundResult};
pub use session::play_session;
