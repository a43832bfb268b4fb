//! One-shot position reports for the `best-move` and `status` commands

use crate::{
    Board, Error, Player, Result, TerminalStatus, best_move_for,
    bot::minimax::{O_WINS, X_WINS},
};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Optimal move for the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub board: String,
    pub to_move: Player,
    /// Cell index, 0-8.
    pub index: usize,
    /// Position as typed at the prompt, 1-9.
    pub position: usize,
    pub value: i32,
    /// Result of the game if both sides keep playing perfectly.
    pub forecast: TerminalStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub board: String,
    pub status: TerminalStatus,
    /// `None` once the game is over.
    pub to_move: Option<Player>,
    pub legal_moves: Vec<usize>,
}

pub fn analyze_best_move(board: &Board) -> Result<MoveReport> {
    if board.is_terminal().is_over() {
        return Err(Error::GameOver);
    }

    let mut scratch = *board;
    let to_move = scratch.next_player();
    let result = best_move_for(&mut scratch, to_move).ok_or(Error::NoLegalMoves)?;
    debug!(?result, "analysis finished");

    Ok(MoveReport {
        board: board.encode(),
        to_move,
        index: result.index,
        position: result.index + 1,
        value: result.value,
        forecast: forecast(result.value),
    })
}

pub fn analyze_status(board: &Board) -> StatusReport {
    let status = board.is_terminal();
    let (to_move, legal_moves) = if status.is_over() {
        (None, Vec::new())
    } else {
        (Some(board.next_player()), board.legal_moves().to_vec())
    };

    StatusReport {
        board: board.encode(),
        status,
        to_move,
        legal_moves,
    }
}

fn forecast(value: i32) -> TerminalStatus {
    match value {
        O_WINS => TerminalStatus::Win(Player::O),
        X_WINS => TerminalStatus::Win(Player::X),
        _ => TerminalStatus::Tie,
    }
}

fn describe(status: TerminalStatus) -> String {
    match status {
        TerminalStatus::Win(player) => format!("{player} wins"),
        TerminalStatus::Tie => "tie".to_string(),
        TerminalStatus::Ongoing => "ongoing".to_string(),
    }
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} to move: play {} (index {}), value {}, {} with perfect play",
            self.to_move,
            self.position,
            self.index,
            self.value,
            describe(self.forecast)
        )
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.board, describe(self.status))?;
        if let Some(player) = self.to_move {
            let positions: Vec<String> = self
                .legal_moves
                .iter()
                .map(|idx| (idx + 1).to_string())
                .collect();
            write!(f, ", {player} to move, open {}", positions.join(" "))?;
        }
        writeln!(f)
    }
}
