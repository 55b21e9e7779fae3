//! Line-oriented console seam and the prompts built on it.

use std::io::{self, BufRead, Write};

/// Text input and output for the table.
///
/// The game never touches stdin or stdout directly; everything it shows and
/// every answer it needs goes through this trait.
pub trait Console {
    /// Shows `prompt` without a line break and reads one line of input.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str);
}

/// A [`Console`] over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a console bound to stdin and stdout.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
        drop(stdout);

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(err) => {
                tracing::warn!(%err, "failed to read from stdin");
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}

/// Asks a yes/no question.
///
/// Only the first non-whitespace character of the answer matters. Returns
/// `Some(true)` for `y`/`Y`, `Some(false)` for anything else, and `None` at
/// end of input.
pub fn ask_yes_no(console: &mut dyn Console, prompt: &str) -> Option<bool> {
    let answer = console.read_line(prompt)?;
    Some(matches!(first_char(&answer), Some('y' | 'Y')))
}

/// Asks how many players will sit down, re-prompting until the answer is a
/// number between 1 and `max`.
pub fn ask_player_count(console: &mut dyn Console, max: u8) -> Option<u8> {
    let prompt = format!("How many players? (1 - {max}): ");
    loop {
        let answer = console.read_line(&prompt)?;
        match answer.trim().parse::<u8>() {
            Ok(count) if (1..=max).contains(&count) => return Some(count),
            _ => tracing::debug!(answer = answer.trim(), "rejected player count"),
        }
    }
}

/// Asks for a player's name, re-prompting while the answer is blank.
pub fn ask_name(console: &mut dyn Console) -> Option<String> {
    loop {
        let answer = console.read_line("Enter player name: ")?;
        let name = answer.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }
}

pub(crate) fn first_char(answer: &str) -> Option<char> {
    answer.trim_start().chars().next()
}
