use super::Player;
use crate::{Error, Result};
use serde::Serialize;
use smallvec::SmallVec;
use std::{fmt, str::FromStr};

pub const BOARD_SIZE: usize = 9;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Legal move indices, never more than one per cell.
pub type Moves = SmallVec<[usize; BOARD_SIZE]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unclaimed. Rendered as its own 1-based position.
    #[default]
    Empty,
    Mark(Player),
}

/// Outcome of inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "winner", rename_all = "snake_case")]
pub enum TerminalStatus {
    Win(Player),
    Tie,
    Ongoing,
}

impl TerminalStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, TerminalStatus::Ongoing)
    }
}

/// A 3x3 board stored row-major, cell 0 top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// A move is valid when it names one of the nine cells and that cell is empty.
    pub fn is_move_valid(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index] == Cell::Empty
    }

    /// Every valid move, in ascending index order.
    pub fn legal_moves(&self) -> Moves {
        (0..BOARD_SIZE)
            .filter(|&idx| self.is_move_valid(idx))
            .collect()
    }

    pub fn has_won(&self, player: Player) -> bool {
        let target = Cell::Mark(player);
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    /// The player owning a complete line. O is checked first.
    pub fn winner(&self) -> Option<Player> {
        [Player::O, Player::X]
            .into_iter()
            .find(|&player| self.has_won(player))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_terminal(&self) -> TerminalStatus {
        if let Some(player) = self.winner() {
            TerminalStatus::Win(player)
        } else if self.is_full() {
            TerminalStatus::Tie
        } else {
            TerminalStatus::Ongoing
        }
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }

    /// Number of marks on the board, i.e. moves played so far.
    pub fn marks(&self) -> usize {
        self.count(Player::X) + self.count(Player::O)
    }

    /// Side to move, assuming X opened the game.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Checked placement used by the turn loop.
    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        match self.cells.get(index) {
            None => Err(Error::OutOfBounds { index }),
            Some(Cell::Mark(_)) => Err(Error::Occupied { index }),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Mark(player);
                Ok(())
            }
        }
    }

    /// Unchecked placement for the search, which only visits legal moves.
    pub(crate) fn mark(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Mark(player);
    }

    /// Returns the cell to empty. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Compact row-major form, e.g. `XO3456789`.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| cell_char(idx, *cell))
            .collect()
    }
}

fn cell_char(idx: usize, cell: Cell) -> char {
    match cell {
        Cell::Mark(player) => player.symbol(),
        Cell::Empty => char::from(b'1' + idx as u8),
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if symbols.len() != BOARD_SIZE {
            return Err(Error::InvalidBoardLength {
                got: symbols.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (position, &character) in symbols.iter().enumerate() {
            board.cells[position] = match character {
                'X' | 'x' => Cell::Mark(Player::X),
                'O' | 'o' => Cell::Mark(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                d if d.to_digit(10) == Some(position as u32 + 1) => Cell::Empty,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    });
                }
            };
        }

        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            let base = row * 3;
            writeln!(
                f,
                " {} | {} | {}",
                cell_char(base, chunk[0]),
                cell_char(base + 1, chunk[1]),
                cell_char(base + 2, chunk[2])
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &idx in x {
            board.mark(idx, Player::X);
        }
        for &idx in o {
            board.mark(idx, Player::O);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty_and_ongoing() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.is_terminal(), TerminalStatus::Ongoing);
        assert_eq!(board.marks(), 0);
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_every_line_wins_for_each_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for idx in line {
                    board.mark(idx, player);
                }
                assert_eq!(
                    board.is_terminal(),
                    TerminalStatus::Win(player),
                    "line {line:?} must win for {player}"
                );
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(board.is_full());
        assert_eq!(board.is_terminal(), TerminalStatus::Tie);
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        // X X X
        // O O X
        // X O O
        let board = board_with(&[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert_eq!(board.is_terminal(), TerminalStatus::Win(Player::X));
    }

    #[test]
    fn test_o_checked_before_x_on_impossible_board() {
        let board = board_with(&[0, 1, 2], &[6, 7, 8]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_is_move_valid_rejects_index_nine() {
        let board = Board::new();
        assert!(board.is_move_valid(8));
        assert!(!board.is_move_valid(9));
        assert!(!board.is_move_valid(usize::MAX));
    }

    #[test]
    fn test_is_move_valid_rejects_occupied_cell() {
        let board = board_with(&[4], &[]);
        assert!(!board.is_move_valid(4));
        assert!(board.is_move_valid(3));
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board = board_with(&[0, 4], &[8]);
        assert_eq!(board.legal_moves().as_slice(), &[1, 2, 3, 5, 6, 7]);
        assert_eq!(board.next_player(), Player::O);
    }

    #[test]
    fn test_place_reports_errors() {
        let mut board = Board::new();
        board.place(3, Player::X).unwrap();
        assert!(matches!(
            board.place(3, Player::O),
            Err(Error::Occupied { index: 3 })
        ));
        assert!(matches!(
            board.place(9, Player::O),
            Err(Error::OutOfBounds { index: 9 })
        ));
        assert_eq!(board.cell(3), Some(Cell::Mark(Player::X)));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = board_with(&[2], &[]);
        board.clear(2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_accepts_digits_and_dots() {
        let a: Board = "XX3OO6789".parse().unwrap();
        let b: Board = "xx. oo. ...".parse().unwrap();
        let c: Board = "XX_|OO_|___".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.encode(), "XX3OO6789");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert!(matches!(err, Error::InvalidBoardLength { got: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_misplaced_digit() {
        let err = "2XO456789".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellCharacter {
                character: '2',
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_impossible_counts() {
        let err = "OO3456789".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 2
            }
        ));
    }

    #[test]
    fn test_display_shows_positions() {
        let board = board_with(&[0], &[4]);
        let expected = " X | 2 | 3\n-----------\n 4 | O | 6\n-----------\n 7 | 8 | 9\n";
        assert_eq!(board.to_string(), expected);
    }
}
