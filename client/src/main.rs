mod config;
mod game_runner;

use std::io;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayer, MatchSession};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use game_runner::{RunnerOptions, run_match};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Human,
    Bot,
    Random,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayer::Human,
            FirstArg::Bot => FirstPlayer::Bot,
            FirstArg::Random => FirstPlayer::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax bot")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Who moves first; overrides the config file.
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, config_error) = match get_config_manager(&args.config).get_config() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let prefix = config
        .log
        .prefix
        .clone()
        .or_else(|| args.use_log_prefix.then(|| "Client".to_string()));
    logger::init_logger(prefix);

    if let Some(err) = config_error {
        log!("Failed to load {}: {}; using defaults", args.config, err);
    }

    let first_player = args
        .first
        .map(FirstPlayer::from)
        .unwrap_or(config.game.first_player);
    let mut rng = match args.seed.or(config.game.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = MatchSession::new(first_player, &mut rng);
    let options = RunnerOptions {
        show_history: config.display.show_history,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_match(&mut session, &mut stdin.lock(), &mut stdout.lock(), &options)?;

    match outcome {
        Some(outcome) => log!("Session finished: {}", outcome),
        None => log!("Session abandoned after {} moves", session.history().len()),
    }

    Ok(())
}
