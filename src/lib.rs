//! Tic-tac-toe with a perfect computer opponent.
//!
//! The crate is split into:
//! - [`rules`]: the board, win/tie detection and legal move generation
//! - [`bot`]: the random and alpha-beta search opponents
//! - [`game`]: turn bookkeeping and difficulty handling
//! - [`console`]: the interactive menu and turn loop
//! - [`analysis`]: one-shot reports used by the command line

pub mod analysis;
pub mod bot;
pub mod cli;
pub mod console;
pub mod error;
pub mod game;
pub mod rules;

pub use analysis::{MoveReport, StatusReport, analyze_best_move, analyze_status};
pub use bot::{
    MinimaxBot, RandomBot, SearchResult, TicTacBot, best_move, best_move_for, evaluate,
};
pub use console::{Console, LinePrompt, Prompt, ScriptedPrompt, parse_position};
pub use error::{Error, Result};
pub use game::{Computer, Difficulty, Game, GameConfig, Mode};
pub use rules::{BOARD_SIZE, Board, Cell, Moves, Player, TerminalStatus, WINNING_LINES};
