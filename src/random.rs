use crate::{
    board::{Board, Move},
    common::GameError,
    strategy::Strategy,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Plays a uniformly random empty square.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Reproducible strategy driven by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        let free = board.empty_positions().count();
        if free == 0 {
            return Err(GameError::NoLegalMove);
        }
        let pick = self.rng.random_range(0..free);
        let pos = board
            .empty_positions()
            .nth(pick)
            .ok_or(GameError::NoLegalMove)?;
        Ok(Move::at(pos, board.current_player()))
    }
}
