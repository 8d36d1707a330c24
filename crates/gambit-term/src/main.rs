//! gambit - play chess in the terminal by typing squares.

use clap::Parser;
use gambit_engine::Game;
use gambit_term::{Glyphs, Shell, ShellConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal by typing squares.
#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "Play chess in the terminal by typing squares")]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from a FEN position instead of the standard setup
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces with letters instead of chess symbols
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(ShellConfig::default_path);
    let mut config = ShellConfig::load(&config_path)?;
    if args.ascii {
        config.glyphs = Glyphs::Ascii;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Config: {:?}", config_path);

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };

    let stdin = std::io::stdin();
    let mut shell = Shell::new(stdin.lock(), std::io::stdout(), game, config);
    shell.run()?;

    tracing::info!("Played {} plies", shell.game().ply_count());
    Ok(())
}
