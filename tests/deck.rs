//! Deck and participant tests.

mod common;

use std::collections::HashSet;

use bjtable::card::{ACE, KING, QUEEN};
use bjtable::{DECK_SIZE, DealError, Deck, FlipError, Hand, House, Participant, Player, Suit};
use common::{ScriptedConsole, card};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn populate_builds_52_unique_face_up_cards() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, 2); 3]);
    deck.populate();

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<_> = deck.cards().iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| c.is_face_up()));
    assert!(deck.cards().iter().all(|c| (ACE..=KING).contains(&c.rank)));
}

#[test]
fn shuffle_is_reproducible_per_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(first, second);

    let unshuffled = Deck::new();
    assert_ne!(first, unshuffled);
    let unique: HashSet<_> = first.cards().iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deal_moves_top_card() {
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, 2), card(Suit::Spades, QUEEN)]);
    let mut hand = Hand::new();

    deck.deal(&mut hand).unwrap();
    assert_eq!(hand.cards(), &[card(Suit::Spades, QUEEN)]);
    assert_eq!(deck.len(), 1);
}

#[test]
fn deal_from_empty_pile_leaves_hand_unchanged() {
    let mut deck = Deck::from_cards(Vec::new());
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 9));

    assert_eq!(deck.deal(&mut hand), Err(DealError::OutOfCards));
    assert_eq!(hand.cards(), &[card(Suit::Hearts, 9)]);
    assert!(deck.is_empty());
}

#[test]
fn house_hits_through_sixteen() {
    let mut console = ScriptedConsole::default();
    for (first, second, hitting) in [
        (10, 2, true),
        (10, 6, true),
        (10, 7, false),
        (KING, QUEEN, false),
    ] {
        let mut house = House::default();
        house.hand_mut().add_card(card(Suit::Hearts, first));
        house.hand_mut().add_card(card(Suit::Spades, second));
        assert_eq!(house.is_hitting(&mut console), hitting, "{first} + {second}");
    }

    let mut busted = House::default();
    for rank in [10, 6, 9] {
        busted.hand_mut().add_card(card(Suit::Clubs, rank));
    }
    assert!(busted.is_busted());
    assert!(!busted.is_hitting(&mut console));
    assert!(console.output.is_empty());
}

#[test]
fn house_flip_on_empty_hand_fails() {
    let mut house = House::default();
    assert_eq!(house.flip_first_card(), Err(FlipError::NoCards));
    assert!(house.hand().is_empty());
}

#[test]
fn player_hit_answers() {
    let player = Player::new("Alice");
    let mut console = ScriptedConsole::new(&["y", "Y", "yes", "  y", "n", "", "q"]);

    assert!(player.is_hitting(&mut console));
    assert!(player.is_hitting(&mut console));
    assert!(player.is_hitting(&mut console));
    assert!(player.is_hitting(&mut console));
    assert!(!player.is_hitting(&mut console));
    assert!(!player.is_hitting(&mut console));
    assert!(!player.is_hitting(&mut console));
    // End of input means stand.
    assert!(!player.is_hitting(&mut console));

    assert_eq!(console.count("Alice, do you want a hit? (Y/N): "), 8);
}

#[test]
fn describe_renders_seat() {
    let mut player = Player::new("Alice");
    assert_eq!(player.describe(), "Alice:\t<empty>");

    player.hand_mut().add_card(card(Suit::Hearts, ACE));
    player.hand_mut().add_card(card(Suit::Clubs, 7));
    assert_eq!(player.describe(), "Alice:\tAh\t7c\t(18)");

    let mut house = House::default();
    house.hand_mut().add_card(card(Suit::Spades, 9));
    house.hand_mut().add_card(card(Suit::Diamonds, KING));
    house.flip_first_card().unwrap();
    assert_eq!(house.describe(), "House:\tXX\tKd\t");
}

#[test]
fn deal_additional_stops_when_player_stands() {
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, 9), card(Suit::Spades, 2)]);
    let mut player = Player::new("Bob");
    player.hand_mut().add_card(card(Suit::Hearts, 10));
    player.hand_mut().add_card(card(Suit::Diamonds, 3));

    let mut console = ScriptedConsole::new(&["y", "n"]);
    deck.deal_additional(&mut player, &mut console).unwrap();

    assert_eq!(player.hand().total(), 15);
    assert_eq!(deck.len(), 1);
    assert!(console.saw("Bob:\t10h\t3d\t2s\t(15)"));
    assert!(!console.saw("Bob busts."));
}

#[test]
fn deal_additional_announces_bust_and_stops_asking() {
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, 4), card(Suit::Spades, KING)]);
    let mut player = Player::new("Bob");
    player.hand_mut().add_card(card(Suit::Hearts, 10));
    player.hand_mut().add_card(card(Suit::Diamonds, 5));

    let mut console = ScriptedConsole::new(&["y", "y"]);
    deck.deal_additional(&mut player, &mut console).unwrap();

    assert!(player.is_busted());
    assert!(console.saw("Bob busts."));
    assert_eq!(console.count("Bob, do you want a hit? (Y/N): "), 1);
    assert_eq!(console.answers_left(), 1);
    assert_eq!(deck.len(), 1);
}

#[test]
fn deal_additional_plays_house_to_seventeen() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Clubs, 9),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 2),
    ]);
    let mut house = House::default();
    house.hand_mut().add_card(card(Suit::Hearts, 10));
    house.hand_mut().add_card(card(Suit::Diamonds, 2));

    let mut console = ScriptedConsole::default();
    deck.deal_additional(&mut house, &mut console).unwrap();

    // 12 -> 14 -> 17, stands.
    assert_eq!(house.hand().total(), 17);
    assert_eq!(deck.len(), 1);
}

#[test]
fn deal_additional_ends_when_pile_runs_out() {
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, 2)]);
    let mut house = House::default();
    house.hand_mut().add_card(card(Suit::Hearts, 4));
    house.hand_mut().add_card(card(Suit::Diamonds, 3));

    let mut console = ScriptedConsole::default();
    assert_eq!(
        deck.deal_additional(&mut house, &mut console),
        Err(DealError::OutOfCards)
    );
    assert_eq!(house.hand().total(), 9);
    assert!(deck.is_empty());
}
