//! Play a match in the terminal.
//!
//! ```text
//! gwent [CONFIG.json]
//! ```
//!
//! Without a config the starter match is played. Each prompt takes a card
//! name, `N` to end the turn or `S` to skip the rest of the round. Logs go
//! to stderr and are filtered with `RUST_LOG` (default `info`).

use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rust_gwent::core::{Intent, MatchConfig, MatchPhase, PlayerView};
use rust_gwent::interface::{CommandSource, TextSink};
use rust_gwent::rules::{EngineError, Match};

/// Reads one command per line from stdin.
struct StdinSource<R> {
    input: R,
    line: String,
}

impl<R: BufRead> CommandSource for StdinSource<R> {
    fn next_intent(&mut self, view: &PlayerView) -> Result<Intent, EngineError> {
        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => Err(EngineError::SourceExhausted(view.id)),
            Ok(_) => Intent::parse(&self.line),
            Err(err) => {
                error!(%err, "failed to read stdin");
                Err(EngineError::SourceExhausted(view.id))
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match MatchConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(%path, %err, "could not load match config");
                return ExitCode::FAILURE;
            }
        },
        None => MatchConfig::starter(),
    };

    let mut game = Match::new(&config);
    let mut source = StdinSource {
        input: io::stdin().lock(),
        line: String::new(),
    };
    let mut sink = TextSink::new(io::stdout());

    loop {
        match game.step(&mut source, &mut sink) {
            Ok(MatchPhase::MatchOver) => break,
            Ok(_) => {}
            Err(err) if err.is_recoverable() => eprintln!("{err}. Try again."),
            Err(err) => {
                error!(%err, "match aborted");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(outcome) = game.outcome() {
        info!(winner = %outcome.winner_name, rounds = outcome.rounds, "done");
    }
    ExitCode::SUCCESS
}
