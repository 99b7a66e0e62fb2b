//! Linear undo/redo over whole board snapshots.

use crate::{board::Board, common::GameError};
use alloc::vec::Vec;

/// Played timeline plus the boards undone since the last recorded move.
///
/// The timeline always holds at least the initial empty board; its last
/// element is the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    timeline: Vec<Board>,
    redo: Vec<Board>,
}

impl History {
    /// Timeline holding only the empty board.
    pub fn new() -> Self {
        let mut timeline = Vec::with_capacity(crate::config::CELL_COUNT + 1);
        timeline.push(Board::empty());
        Self {
            timeline,
            redo: Vec::new(),
        }
    }

    pub fn current(&self) -> &Board {
        // timeline is never empty
        &self.timeline[self.timeline.len() - 1]
    }

    /// Append `board` and discard anything redoable.
    pub fn record(&mut self, board: Board) {
        self.timeline.push(board);
        self.redo.clear();
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        if !self.can_undo() {
            return Err(GameError::NothingToUndo);
        }
        if let Some(board) = self.timeline.pop() {
            self.redo.push(board);
        }
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), GameError> {
        let board = self.redo.pop().ok_or(GameError::NothingToRedo)?;
        self.timeline.push(board);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.timeline.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of boards on the timeline, including the initial one.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Always `false`; the timeline keeps its initial board.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn timeline(&self) -> &[Board] {
        &self.timeline
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Move, common::Player};

    #[test]
    fn redo_order_is_last_undone_first() {
        let b1 = Board::empty().apply(Move::new(0, 0, Player::X)).unwrap();
        let b2 = b1.apply(Move::new(1, 1, Player::O)).unwrap();
        let mut h = History::new();
        h.record(b1);
        h.record(b2);
        h.undo().unwrap();
        h.undo().unwrap();
        assert_eq!(h.redo_len(), 2);
        h.redo().unwrap();
        assert_eq!(h.current(), &b1);
        h.redo().unwrap();
        assert_eq!(h.current(), &b2);
        assert!(!h.can_redo());
    }
}
