//! Terminal driver for the Treasure Maze exploration game.

mod commands;
mod interrupt;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use commands::play::PlayArgs;

#[derive(Parser)]
#[command(
    name = "maze",
    about = "Treasure Maze, a text exploration game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default when no subcommand is given)
    Play(PlayArgs),

    /// Validate a world file without playing
    Check {
        /// JSON world file (default: the bundled maze)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Some(Commands::Play(args)) => commands::play::run(&args),
        Some(Commands::Check { world }) => commands::check::run(world.as_deref()),
        None => commands::play::run(&cli.play),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
