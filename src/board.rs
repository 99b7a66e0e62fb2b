//! Immutable game board: cell occupancy, turn, move validation and status.

use crate::common::{Cell, GameError, Player};
use crate::config::{BOARD_SIZE, CELL_COUNT, LINES};
use core::fmt;

/// A (row, column) pair on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Row-major index into the flat grid. Only meaningful for in-range positions.
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub const fn from_index(index: usize) -> Self {
        Position {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub const fn in_range(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// An attempted action. Carries the acting player so out-of-turn moves are caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

impl Move {
    pub const fn new(row: usize, col: usize, player: Player) -> Self {
        Move { row, col, player }
    }

    pub const fn at(position: Position, player: Player) -> Self {
        Move::new(position.row, position.col, player)
    }

    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Derived outcome of a board; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    /// The status meaning `player` has won.
    pub const fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A 3×3 board and the side on turn.
///
/// Boards are values: [`Board::apply`] returns a new board and never touches
/// the receiver, so a board may be shared freely once constructed.
///
/// Only `Serialize` is derived: a deserialized board could break the turn
/// and mark-count invariants, so boards are built through `apply` alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    current: Player,
}

impl Board {
    /// All cells empty, `X` to move.
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
            current: Player::X,
        }
    }

    /// Side whose turn it is.
    pub const fn current_player(&self) -> Player {
        self.current
    }

    /// Row-major view of all nine cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let pos = Position::new(row, col);
        if !pos.in_range() {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(self.cells[pos.index()])
    }

    /// Validate `mv` and return the resulting board with the turn flipped.
    ///
    /// Checks run in order: range, occupancy, then turn.
    pub fn apply(&self, mv: Move) -> Result<Board, GameError> {
        let pos = mv.position();
        if !pos.in_range() {
            return Err(GameError::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.cells[pos.index()].is_empty() {
            return Err(GameError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        if mv.player != self.current {
            return Err(GameError::WrongPlayer {
                expected: self.current,
                actual: mv.player,
            });
        }
        let mut next = *self;
        next.cells[pos.index()] = mv.player.into();
        next.current = self.current.opponent();
        Ok(next)
    }

    /// Apply `moves` in order starting from the empty board.
    pub fn replay<I>(moves: I) -> Result<Board, GameError>
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .try_fold(Board::empty(), |board, mv| board.apply(mv))
    }

    /// Rows, columns, main diagonal, anti-diagonal; first completed line wins.
    pub fn status(&self) -> GameStatus {
        for line in LINES.iter() {
            if let Some(p) = self.line_owner(line) {
                return GameStatus::win_for(p);
            }
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Lazily enumerate empty positions in row-major order.
    pub fn empty_positions(&self) -> EmptyPositions<'_> {
        EmptyPositions {
            cells: &self.cells,
            next: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether `player` marking `pos` would complete a line through it.
    ///
    /// Looks only at the lines containing `pos`; turn state is ignored.
    pub fn completes_line(&self, pos: Position, player: Player) -> bool {
        if !pos.in_range() {
            return false;
        }
        let idx = pos.index();
        let mark = Cell::from(player);
        LINES
            .iter()
            .filter(|line| line.contains(&idx))
            .any(|line| line.iter().all(|&i| i == idx || self.cells[i] == mark))
    }

    fn line_owner(&self, line: &[usize; 3]) -> Option<Player> {
        let first = self.cells[line[0]];
        if first == self.cells[line[1]] && first == self.cells[line[2]] {
            first.player()
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ to_move: {}, cells:\n{}}}", self.current, self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the empty positions of a board. Clone it to restart.
#[derive(Debug, Clone)]
pub struct EmptyPositions<'a> {
    cells: &'a [Cell; CELL_COUNT],
    next: usize,
}

impl Iterator for EmptyPositions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.next < CELL_COUNT {
            let i = self.next;
            self.next += 1;
            if self.cells[i].is_empty() {
                return Some(Position::from_index(i));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CELL_COUNT - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_index_roundtrip() {
        for i in 0..CELL_COUNT {
            assert_eq!(Position::from_index(i).index(), i);
        }
        assert_eq!(Position::new(2, 1).index(), 7);
    }

    #[test]
    fn completes_line_ignores_turn() {
        let board = Board::replay([
            Move::new(1, 0, Player::X),
            Move::new(0, 0, Player::O),
            Move::new(1, 2, Player::X),
        ])
        .unwrap();
        assert_eq!(board.current_player(), Player::O);
        assert!(board.completes_line(Position::new(1, 1), Player::X));
        assert!(!board.completes_line(Position::new(1, 1), Player::O));
        assert!(!board.completes_line(Position::new(3, 3), Player::X));
    }

    #[cfg(feature = "std")]
    #[test]
    fn serializes_cells_and_turn() {
        let board = Board::empty().apply(Move::new(1, 1, Player::X)).unwrap();
        let v = serde_json::to_value(board).unwrap();
        assert_eq!(v["current"], "O");
        assert_eq!(v["cells"][4], "X");
        assert_eq!(v["cells"].as_array().unwrap().len(), CELL_COUNT);
    }

    #[test]
    fn display_grid() {
        let board = Board::empty().apply(Move::new(0, 2, Player::X)).unwrap();
        assert_eq!(format!("{}", board), ".|.|X\n.|.|.\n.|.|.\n");
    }
}
