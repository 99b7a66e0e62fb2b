//! Common types for Tic-Tac-Toe: players, cells, and game errors.

/// One of the two sides. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the cell, or `None` when empty.
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        match p {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Errors returned by board, strategy, and history operations.
///
/// All of them are recoverable outcomes of interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Row or column is outside the 3×3 grid.
    OutOfRange { row: usize, col: usize },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The move was declared for the side that is not on turn.
    WrongPlayer { expected: Player, actual: Player },
    /// Strategy was asked to move on a full or finished board.
    NoLegalMove,
    NothingToUndo,
    NothingToRedo,
}

impl GameError {
    /// `true` for failures raised by move validation, which a human can
    /// correct by entering a different move.
    pub const fn is_move_rejection(&self) -> bool {
        matches!(
            self,
            GameError::OutOfRange { .. }
                | GameError::CellOccupied { .. }
                | GameError::WrongPlayer { .. }
        )
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfRange { row, col } => {
                write!(f, "Move coordinates ({}, {}) are out of range, must be 0-2", row, col)
            }
            GameError::CellOccupied { row, col } => {
                write!(f, "Cell at ({}, {}) is already occupied", row, col)
            }
            GameError::WrongPlayer { expected, actual } => {
                write!(f, "Move is for {} but current player is {}", actual, expected)
            }
            GameError::NoLegalMove => write!(f, "No empty cells available for a move"),
            GameError::NothingToUndo => write!(f, "No moves to undo"),
            GameError::NothingToRedo => write!(f, "No moves to redo"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
