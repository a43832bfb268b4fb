//! Turn bookkeeping and computer move selection

use crate::{Board, Error, MinimaxBot, Player, RandomBot, Result, TerminalStatus, TicTacBot};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two people share the keyboard
    #[default]
    Human,
    /// One person against the computer
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Random legal moves
    #[default]
    Easy,
    /// Full game-tree search
    Hard,
}

/// Options for a single game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// The computer opens the game and plays X.
    pub computer_first: bool,
    /// Seed for the random bot; `None` draws one from the OS.
    pub seed: Option<u64>,
}

/// A game in progress. X moves on turn 1.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: u32,
    to_move: Player,
    status: TerminalStatus,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 1,
            to_move: Player::X,
            status: TerminalStatus::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 1-based turn number. Stays on the final turn once the game is over.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> TerminalStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Claims `index` for the side to move and reports the resulting status.
    pub fn play(&mut self, index: usize) -> Result<TerminalStatus> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        self.board.place(index, self.to_move)?;
        self.status = self.board.is_terminal();
        debug!(player = %self.to_move, index, turn = self.turn, "move played");

        if self.is_over() {
            info!(status = ?self.status, turns = self.turn, "game finished");
        } else {
            self.to_move = self.to_move.opponent();
            self.turn += 1;
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// The computer side of a human-vs-computer game.
pub struct Computer {
    player: Player,
    difficulty: Difficulty,
    random: RandomBot,
    minimax: MinimaxBot,
}

impl Computer {
    pub fn new(config: &GameConfig) -> Self {
        let player = if config.computer_first {
            Player::X
        } else {
            Player::O
        };
        let random = match config.seed {
            Some(seed) => RandomBot::seeded(seed),
            None => RandomBot::new(),
        };
        Self {
            player,
            difficulty: config.difficulty,
            random,
            minimax: MinimaxBot::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Hard difficulty searches on every turn but the first, which is random.
    pub fn choose_move(&mut self, game: &Game) -> Result<usize> {
        if game.is_over() {
            return Err(Error::GameOver);
        }

        let bot: &mut dyn TicTacBot = match self.difficulty {
            Difficulty::Hard if game.turn() != 1 => &mut self.minimax,
            _ => &mut self.random,
        };
        let index = bot.choose_move(game.board()).ok_or(Error::NoLegalMoves)?;

        debug!(bot = bot.name(), index, turn = game.turn(), "computer move");
        Ok(index)
    }
}
