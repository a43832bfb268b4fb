use crate::{Board, Player, TerminalStatus, TicTacBot};
use std::cmp;
use tracing::{debug, trace};

/// Value of a position O has won. O maximizes.
pub const O_WINS: i32 = 1;

/// Value of a position X has won. X minimizes.
pub const X_WINS: i32 = -1;

pub const DRAW: i32 = 0;

/// Search bound strictly outside the reachable values `X_WINS..=O_WINS`.
pub const INFINITY: i32 = 1_000;

/// Best root move together with its game-theoretic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub value: i32,
}

/// Perfect player: full-depth alpha-beta search for the side to move.
#[derive(Debug, Default)]
pub struct MinimaxBot;

impl MinimaxBot {
    pub fn new() -> Self {
        Self
    }
}

impl TicTacBot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax_bot"
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        if board.is_terminal().is_over() {
            return None;
        }

        let mut scratch = *board;
        let player = scratch.next_player();
        let result = best_move_for(&mut scratch, player)?;

        debug!(%player, index = result.index, value = result.value, "minimax move");
        Some(result.index)
    }
}

/// Best move for O on `board`, or `None` if no cell is free.
pub fn best_move(board: &mut Board) -> Option<usize> {
    best_move_for(board, Player::O).map(|result| result.index)
}

/// Root driver for either side.
///
/// Moves are tried in ascending index order and only a strictly better value
/// replaces the current choice, so the lowest index wins among equal moves.
/// The board is restored before returning.
pub fn best_move_for(board: &mut Board, player: Player) -> Option<SearchResult> {
    let maximizing = player == Player::O;
    let mut best: Option<SearchResult> = None;

    trace!(board = %board.encode(), %player, "root search");

    for move_idx in board.legal_moves() {
        board.mark(move_idx, player);

        let value = evaluate(board, -INFINITY, INFINITY, !maximizing);

        board.clear(move_idx);

        debug!(move_idx, value, "root candidate");

        let improves = match best {
            None => true,
            Some(current) if maximizing => value > current.value,
            Some(current) => value < current.value,
        };
        if improves {
            best = Some(SearchResult {
                index: move_idx,
                value,
            });
        }
    }

    best
}

/// Minimax with alpha-beta pruning.
///
/// O moves when `maximizing` is true, X otherwise. The returned value is
/// exact inside the `(alpha, beta)` window and a bound outside it.
pub fn evaluate(board: &mut Board, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
    match board.is_terminal() {
        TerminalStatus::Win(Player::O) => return O_WINS,
        TerminalStatus::Win(Player::X) => return X_WINS,
        TerminalStatus::Tie => return DRAW,
        TerminalStatus::Ongoing => {}
    }

    if maximizing {
        let mut best_score = -INFINITY;

        for move_idx in board.legal_moves() {
            board.mark(move_idx, Player::O);

            let score = evaluate(board, alpha, beta, false);

            board.clear(move_idx);

            best_score = cmp::max(best_score, score);

            alpha = cmp::max(alpha, best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut worst_score = INFINITY;

        for move_idx in board.legal_moves() {
            board.mark(move_idx, Player::X);

            let score = evaluate(board, alpha, beta, true);

            board.clear(move_idx);

            worst_score = cmp::min(worst_score, score);

            beta = cmp::min(beta, worst_score);
            if beta <= alpha {
                break;
            }
        }
        worst_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // HELPERS
    // ============================================================================

    fn board(s: &str) -> Board {
        s.parse().expect("test board must parse")
    }

    // ============================================================================
    // EVALUATE
    // ============================================================================

    #[test]
    fn test_evaluate_terminal_positions() {
        let mut o_won = board("XX3OOOX89");
        let mut x_won = board("XXXOO6789");
        let mut tie = board("XOXXOOOXX");

        assert_eq!(evaluate(&mut o_won, -INFINITY, INFINITY, false), O_WINS);
        assert_eq!(evaluate(&mut x_won, -INFINITY, INFINITY, true), X_WINS);
        assert_eq!(evaluate(&mut tie, -INFINITY, INFINITY, true), DRAW);
    }

    #[test]
    fn test_evaluate_sees_immediate_win_for_side_to_move() {
        // X to move can complete the top row.
        let mut b = board("XX3OO6789");
        assert_eq!(evaluate(&mut b, -INFINITY, INFINITY, false), X_WINS);
    }

    #[test]
    fn test_evaluate_empty_board_is_draw() {
        let mut b = Board::new();
        assert_eq!(evaluate(&mut b, -INFINITY, INFINITY, false), DRAW);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_evaluate_returns_score_in_valid_range() {
        let mut b = board("X23456789");
        let score = evaluate(&mut b, -INFINITY, INFINITY, true);
        assert!((X_WINS..=O_WINS).contains(&score));
    }

    #[test]
    fn test_evaluate_fails_high_above_window() {
        // O to move wins at 5. With beta at DRAW the node cuts off as soon as a
        // value reaches beta, and the returned bound is at least beta.
        let mut b = board("XX3OO6X89");
        let exact = evaluate(&mut b, -INFINITY, INFINITY, true);
        let bounded = evaluate(&mut b, -INFINITY, DRAW, true);
        assert_eq!(exact, O_WINS);
        assert!(bounded >= DRAW);
    }

    // ============================================================================
    // ROOT
    // ============================================================================

    #[test]
    fn test_best_move_takes_immediate_win() {
        let mut b = board("XX3OO6X89");
        assert_eq!(best_move(&mut b), Some(5));
    }

    #[test]
    fn test_best_move_blocks_x() {
        // X threatens the left column, O has no win of its own.
        let mut b = board("X23XO6789");
        assert_eq!(best_move(&mut b), Some(6));
    }

    #[test]
    fn test_best_move_for_x_prefers_lowest_index_among_wins() {
        // X can win at 2 (row) or at 6 (column).
        let mut b = board("XX3XOO7O9");
        let result = best_move_for(&mut b, Player::X).unwrap();
        assert_eq!(result, SearchResult { index: 2, value: X_WINS });
    }

    #[test]
    fn test_best_move_on_full_board_is_none() {
        let mut b = board("XOXXOOOXX");
        assert_eq!(best_move(&mut b), None);
        assert_eq!(best_move_for(&mut b, Player::X), None);
    }

    #[test]
    fn test_best_move_leaves_board_untouched() {
        let original = board("X2345O789");
        let mut b = original;
        best_move_for(&mut b, Player::X);
        assert_eq!(b, original);
    }

    // ============================================================================
    // BOT
    // ============================================================================

    #[test]
    fn test_bot_plays_for_side_to_move() {
        let mut bot = MinimaxBot::new();
        // X to move, X wins at 2.
        assert_eq!(bot.choose_move(&board("XX3OO6789")), Some(2));
        // O to move, O wins at 5.
        assert_eq!(bot.choose_move(&board("XX3OO6X89")), Some(5));
    }

    #[test]
    fn test_bot_declines_finished_game() {
        let mut bot = MinimaxBot::new();
        assert_eq!(bot.choose_move(&board("XXXOO6789")), None);
    }
}
