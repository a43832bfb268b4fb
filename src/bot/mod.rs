//! Computer opponents
//!
//! Every bot answers the same question: given a board, which cell should the
//! side to move claim next?

pub mod minimax;
pub mod random;

pub use minimax::{MinimaxBot, SearchResult, best_move, best_move_for, evaluate};
pub use random::RandomBot;

use crate::Board;

pub trait TicTacBot {
    fn name(&self) -> &str;

    /// Returns `None` when the board is already decided or full.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;
}
