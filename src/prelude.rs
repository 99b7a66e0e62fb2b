//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, GameError, GameStatus, HeuristicStrategy, History, Move, Player, Position,
    RandomStrategy, Strategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Command, Outcome, Session};
