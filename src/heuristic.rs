// One-ply heuristic: win now, otherwise block, otherwise take the best
// free square by position. Never looks further ahead than the next board.

use crate::{
    board::{Board, GameStatus, Move, Position},
    common::{GameError, Player},
    config::{CENTER, CORNERS, EDGES},
    strategy::Strategy,
};

/// First empty position (row-major) where `player` would win immediately.
///
/// Simulates the move with [`Board::apply`] when `player` is on turn; for the
/// side not on turn the lines through each candidate are inspected directly.
pub fn winning_position(board: &Board, player: Player) -> Option<Position> {
    if player == board.current_player() {
        board.empty_positions().find(|&pos| {
            board
                .apply(Move::at(pos, player))
                .map(|next| next.status() == GameStatus::win_for(player))
                .unwrap_or(false)
        })
    } else {
        board
            .empty_positions()
            .find(|&pos| board.completes_line(pos, player))
    }
}

/// Center, then corners, then edges, then any empty square.
pub fn preferred_position(board: &Board) -> Option<Position> {
    let is_free = |p: &Position| {
        board
            .cell_at(p.row, p.col)
            .map(|c| c.is_empty())
            .unwrap_or(false)
    };
    core::iter::once(CENTER)
        .chain(CORNERS)
        .chain(EDGES)
        .find(is_free)
        .or_else(|| board.empty_positions().next())
}

/// Win-or-block heuristic with positional preference.
///
/// Refuses finished boards with [`GameError::NoLegalMove`], including a won
/// board that still has empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        if board.status().is_terminal() {
            return Err(GameError::NoLegalMove);
        }
        let me = board.current_player();
        let pos = winning_position(board, me)
            .or_else(|| winning_position(board, me.opponent()))
            .or_else(|| preferred_position(board))
            .ok_or(GameError::NoLegalMove)?;
        Ok(Move::at(pos, me))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CELL_COUNT;

    #[test]
    fn preference_lists_partition_the_grid() {
        let mut seen = [false; CELL_COUNT];
        for p in core::iter::once(CENTER).chain(CORNERS).chain(EDGES) {
            assert!(!seen[p.index()], "{:?} listed twice", p);
            seen[p.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn opponent_win_detected_without_turn_change() {
        let board = Board::replay([
            Move::new(0, 0, Player::X),
            Move::new(2, 2, Player::O),
            Move::new(0, 1, Player::X),
        ])
        .unwrap();
        assert_eq!(board.current_player(), Player::O);
        assert_eq!(winning_position(&board, Player::X), Some(Position::new(0, 2)));
        assert_eq!(winning_position(&board, Player::O), None);
    }

    #[test]
    fn won_board_with_free_cells_has_no_move() {
        // X completed row 0; O holds (1,0) and (1,1)
        let board = Board::replay([
            Move::new(0, 0, Player::X),
            Move::new(1, 0, Player::O),
            Move::new(0, 1, Player::X),
            Move::new(1, 1, Player::O),
            Move::new(0, 2, Player::X),
        ])
        .unwrap();
        assert_eq!(board.status(), GameStatus::XWins);
        assert!(board.empty_positions().next().is_some());
        assert_eq!(
            HeuristicStrategy.choose_move(&board).unwrap_err(),
            GameError::NoLegalMove
        );
    }

    #[test]
    fn corner_taken_when_center_occupied() {
        let board = Board::empty().apply(Move::new(1, 1, Player::X)).unwrap();
        let mv = HeuristicStrategy.choose_move(&board).unwrap();
        assert_eq!(mv, Move::new(0, 0, Player::O));
    }
}
