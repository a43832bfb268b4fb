//! Command-line interface

use crate::{Board, Difficulty, GameConfig, Mode};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tictac",
    version,
    about = "Tic-tac-toe against a friend or the computer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for the computer's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Keep previous output instead of clearing the screen
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,
    /// Start a single game without the menu
    Play {
        #[arg(long, value_enum, default_value_t = Mode::Human)]
        mode: Mode,

        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        /// The computer opens the game as X
        #[arg(long)]
        computer_first: bool,
    },
    /// Print the best move for the side to move
    BestMove {
        /// Board as 9 cells, e.g. "XX3OO6789" or "xx.oo...."
        board: Board,

        #[arg(long)]
        json: bool,
    },
    /// Print whether the game is won, tied or still going
    Status {
        /// Board as 9 cells, e.g. "XX3OO6789" or "xx.oo...."
        board: Board,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn game_config(
        &self,
        mode: Mode,
        difficulty: Difficulty,
        computer_first: bool,
    ) -> GameConfig {
        GameConfig {
            mode,
            difficulty,
            computer_first,
            seed: self.seed,
        }
    }
}
