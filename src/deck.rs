//! The draw pile.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::console::Console;
use crate::error::DealError;
use crate::hand::Hand;
use crate::player::Participant;

/// A single 52-card deck, dealt from the top (the last card held).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Hand,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self { cards: Hand::new() };
        deck.populate();
        deck
    }

    /// Creates a deck holding exactly `cards`; the last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Hand::from(cards),
        }
    }

    /// Discards whatever is left and rebuilds all 52 cards, face up.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                self.cards.add_card(Card::new(suit, rank));
            }
        }
        debug_assert_eq!(self.cards.len(), DECK_SIZE);
    }

    /// Shuffles the remaining cards with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.cards_mut().shuffle(rng);
    }

    /// Moves the top card into `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if the pile is empty; `hand` is left
    /// untouched.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        let card = self.cards.take_top().ok_or(DealError::OutOfCards)?;
        tracing::trace!(%card, remaining = self.cards.len(), "dealt card");
        hand.add_card(card);
        Ok(())
    }

    /// Keeps dealing to `participant` for as long as they are not busted
    /// and still want cards, showing their seat after every card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if the pile runs out; no further
    /// cards are offered.
    pub fn deal_additional<P: Participant + ?Sized>(
        &mut self,
        participant: &mut P,
        console: &mut dyn Console,
    ) -> Result<(), DealError> {
        console.write_line("");

        while !participant.is_busted() && participant.is_hitting(console) {
            self.deal(participant.hand_mut())?;
            console.write_line(&participant.describe());

            if participant.is_busted() {
                participant.announce_bust(console);
            }
        }

        Ok(())
    }

    /// Returns the cards still in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the number of cards still in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
