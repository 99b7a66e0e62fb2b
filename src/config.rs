use crate::board::Position;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight winning lines as row-major indices, in the order they are
/// checked: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const CENTER: Position = Position::new(1, 1);
pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];
pub const EDGES: [Position; 4] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 2),
    Position::new(2, 1),
];

/// Environment variable holding the log level for the binaries.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
