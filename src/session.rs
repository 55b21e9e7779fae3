//! The outer input loop: seat the table, then play rounds until told to stop.

use crate::console::{self, Console};
use crate::game::Game;
use crate::options::TableOptions;

/// Runs a whole session on `console` and returns the number of rounds played.
///
/// Asks for the number of players and their names, then plays rounds until
/// an answer to "play again" starts with `n` or `N`. End of input at any
/// prompt ends the session.
pub fn play_session(console: &mut dyn Console, options: TableOptions, seed: u64) -> u32 {
    console.write_line("\t\tWelcome to Blackjack!");
    console.write_line("");

    let Some(count) = console::ask_player_count(console, options.max_players) else {
        return 0;
    };

    let mut names = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let Some(name) = console::ask_name(console) else {
            return 0;
        };
        names.push(name);
    }
    console.write_line("");

    let mut game = match Game::new(names, options, seed) {
        Ok(game) => game,
        Err(err) => {
            tracing::error!(%err, "could not seat the table");
            return 0;
        }
    };

    loop {
        if let Err(err) = game.play_round(console) {
            tracing::error!(%err, "round aborted");
            break;
        }
        if !ask_play_again(console) {
            break;
        }
    }

    game.rounds_played()
}

fn ask_play_again(console: &mut dyn Console) -> bool {
    console.write_line("");
    console
        .read_line("Do you want to play again? (Y/N): ")
        .is_some_and(|answer| !matches!(console::first_char(&answer), Some('n' | 'N')))
}
