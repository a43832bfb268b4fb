use crate::{Board, TicTacBot};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

/// Picks uniformly among the legal moves.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacBot for RandomBot {
    fn name(&self) -> &str {
        "random_bot"
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        if board.is_terminal().is_over() {
            return None;
        }
        let choice = board.legal_moves().choose(&mut self.rng).copied();
        debug!(?choice, "random move");
        choice
    }
}
