mod config;
mod game_ui;
mod input;
mod offline;

use std::io;
use std::path::PathBuf;
use clap::Parser;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use offline::{run_self_play, run_tictactoe_game};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Let the computer play both sides and print the result.
    #[arg(long)]
    self_play: bool,

    #[arg(long)]
    no_opening_shortcut: bool,
}

fn load_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ConfigManager::<_, Config, _>::from_yaml_file(path.clone()).get_config()?,
        None => get_config_manager().get_config()?,
    };
    if args.no_opening_shortcut {
        config.opening_shortcut = false;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log_level);
    log!(
        "Starting tic-tac-toe client (opening shortcut: {})",
        config.opening_shortcut
    );

    let mut stdout = io::stdout().lock();
    if args.self_play {
        run_self_play(&mut stdout, &config)?;
    } else {
        run_tictactoe_game(io::stdin().lock(), &mut stdout, &config)?;
    }

    Ok(())
}
