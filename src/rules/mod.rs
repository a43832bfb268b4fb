//! Board representation and terminal-state detection

pub mod board;
pub mod player;

pub use board::{BOARD_SIZE, Board, Cell, Moves, TerminalStatus, WINNING_LINES};
pub use player::Player;
