//! Console blackjack for one to seven players.

use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{StdConsole, TableOptions, play_session};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "bjtable")]
#[command(about = "Single-table console blackjack against the house")]
struct Args {
    #[arg(long, help = "Seed for the shuffle (defaults to the current time)")]
    seed: Option<u64>,

    #[arg(long, help = "Rebuild and reshuffle the deck before every round")]
    reshuffle_each_round: bool,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "bjtable=debug" } else { "bjtable=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(?args, seed, "starting");

    let options = TableOptions::default().with_reshuffle_between_rounds(args.reshuffle_each_round);
    let mut console = StdConsole::new();
    let rounds = play_session(&mut console, options, seed);

    tracing::info!(rounds, "session over");
}
