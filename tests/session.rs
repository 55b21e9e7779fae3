//! Console session tests.

mod common;

use bjtable::{TableOptions, console, play_session};
use common::ScriptedConsole;

const COUNT_PROMPT: &str = "How many players? (1 - 7): ";
const AGAIN_PROMPT: &str = "Do you want to play again? (Y/N): ";

#[test]
fn player_count_is_reprompted_until_valid() {
    let mut console = ScriptedConsole::new(&["0", "8", "abc", " 2 "]);
    assert_eq!(console::ask_player_count(&mut console, 7), Some(2));
    assert_eq!(console.count(COUNT_PROMPT), 4);
}

#[test]
fn blank_names_are_reprompted() {
    let mut console = ScriptedConsole::new(&["", "   ", "  Alice  "]);
    assert_eq!(console::ask_name(&mut console), Some("Alice".to_string()));
    assert_eq!(console.count("Enter player name: "), 3);
}

#[test]
fn session_plays_one_round_and_stops_on_no() {
    let mut console = ScriptedConsole::new(&["9", "1", "Alice", "n", "n"]);
    let rounds = play_session(&mut console, TableOptions::default(), 11);

    assert_eq!(rounds, 1);
    assert_eq!(console.output[0], "\t\tWelcome to Blackjack!");
    assert_eq!(console.count(COUNT_PROMPT), 2);
    assert_eq!(console.count(AGAIN_PROMPT), 1);
    assert_eq!(console.answers_left(), 0);
}

#[test]
fn session_keeps_playing_until_answer_starts_with_n() {
    let mut console = ScriptedConsole::new(&["1", "Alice", "n", "y", "n", "maybe", "n", "No"]);
    let rounds = play_session(&mut console, TableOptions::default(), 5);

    assert_eq!(rounds, 3);
    assert_eq!(console.count(AGAIN_PROMPT), 3);
}

#[test]
fn session_seats_every_named_player() {
    let mut console = ScriptedConsole::new(&["2", "Alice", "", "Bob", "n", "n", "n"]);
    let rounds = play_session(&mut console, TableOptions::default(), 2);

    assert_eq!(rounds, 1);
    assert_eq!(console.count("Alice, do you want a hit? (Y/N): "), 1);
    assert_eq!(console.count("Bob, do you want a hit? (Y/N): "), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let mut console = ScriptedConsole::new(&[]);
    assert_eq!(play_session(&mut console, TableOptions::default(), 1), 0);
    assert_eq!(console.count(COUNT_PROMPT), 1);

    let mut console = ScriptedConsole::new(&["1"]);
    assert_eq!(play_session(&mut console, TableOptions::default(), 1), 0);

    // Running dry mid-round: Alice stands and the session stops.
    let mut console = ScriptedConsole::new(&["1", "Alice"]);
    assert_eq!(play_session(&mut console, TableOptions::default(), 1), 1);
    assert_eq!(console.count(AGAIN_PROMPT), 1);
}

#[test]
fn table_size_follows_options() {
    let mut console = ScriptedConsole::new(&["3", "1", "Alice", "n", "n"]);
    let options = TableOptions::default().with_max_players(2);
    assert_eq!(play_session(&mut console, options, 4), 1);
    assert_eq!(console.count("How many players? (1 - 2): "), 2);
}
