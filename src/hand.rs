//! Hand representation and total evaluation.

use crate::card::Card;
use crate::error::FlipError;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// An ace is promoted to 11 only while the hard total is at most this.
const ACE_PROMOTION_LIMIT: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> u8 {
    // A face-down first card hides the whole total.
    match cards.first() {
        Some(first) if first.is_face_up() => {}
        _ => return 0,
    }

    let mut total: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.is_ace() && card.is_face_up() {
            has_ace = true;
        }
        total = total.saturating_add(card.value());
    }

    // One-shot promotion: after adding 10 the guard can never pass again.
    if has_ace && total <= ACE_PROMOTION_LIMIT {
        total += 10;
    }

    total
}

/// An ordered collection of cards, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Discards every card in the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the total of the hand.
    ///
    /// Every ace counts as 1, then a single ace is promoted to 11 if the
    /// hard total is 10 or less. An empty hand, or one whose first card is
    /// face down, totals 0.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Turns over the first card dealt.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::NoCards`] if the hand is empty.
    pub fn flip_first_card(&mut self) -> Result<(), FlipError> {
        let first = self.cards.first_mut().ok_or(FlipError::NoCards)?;
        first.flip();
        Ok(())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
