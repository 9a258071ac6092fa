use std::io;

use clap::Parser;
use fogsweep_cli::{Args, GameSession, SessionOutcome};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = GameSession::new(io::stdin().lock(), io::stdout().lock());
    let outcome = session.run(args.session_config(seed))?;

    match outcome {
        SessionOutcome::Won | SessionOutcome::Lost => log::info!("Game over: {:?}", outcome),
        SessionOutcome::Aborted => log::warn!("Game aborted, no more input"),
    }
    Ok(())
}
