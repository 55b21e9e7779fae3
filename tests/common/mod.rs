//! Shared helpers for integration tests.

use std::collections::VecDeque;

use bjtable::{Card, Console, Deck, Game, Suit};

/// A console that answers prompts from a script and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    /// Every prompt and line written, in order.
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn saw(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }

    pub fn answers_left(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.push(prompt.to_string());
        self.answers.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

pub fn face_down(suit: Suit, rank: u8) -> Card {
    let mut card = Card::new(suit, rank);
    card.flip();
    card
}

/// Stacks the deck so that `draws` come off the top in order.
pub fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    *game.deck_mut() = Deck::from_cards(deck);
}
