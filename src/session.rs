#![cfg(feature = "std")]
//! Human-versus-strategy game driver.
//!
//! [`Session`] performs no I/O. A console front end parses each input line
//! into a [`Command`], hands it to [`Session::handle`], and prints the board.

use std::fmt;
use std::string::String;

use crate::{
    board::{Board, GameStatus, Move, Position},
    common::{GameError, Player},
    config::BOARD_SIZE,
    history::History,
    strategy::Strategy,
};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the given 0-based position.
    Place(Position),
    Undo,
    Redo,
    Quit,
}

/// Why an input line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    /// Not of the form `row,col`.
    Format(String),
    NotANumber(String),
    /// Row or column outside 1..=3.
    OutOfRange { row: i64, col: i64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::Format(s) => {
                write!(f, "Invalid input '{}' - enter coordinates as 'row,col' (e.g., 2,3)", s)
            }
            ParseError::NotANumber(s) => {
                write!(f, "Invalid number '{}' - row and column must be numbers", s)
            }
            ParseError::OutOfRange { row, col } => {
                write!(f, "Coordinates ({}, {}) out of bounds - must be between 1 and 3", row, col)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A move was entered after the game ended. Undo to keep playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver(pub GameStatus);

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.winner() {
            Some(p) => write!(f, "Game is over, {} won - undo to keep playing", p),
            None => write!(f, "Game is over - undo to keep playing"),
        }
    }
}

impl std::error::Error for GameOver {}

impl Command {
    /// Parse `q`, `u`, `r` (any case) or 1-based `row,col`.
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        if input.eq_ignore_ascii_case("q") {
            return Ok(Command::Quit);
        }
        if input.eq_ignore_ascii_case("u") {
            return Ok(Command::Undo);
        }
        if input.eq_ignore_ascii_case("r") {
            return Ok(Command::Redo);
        }

        let mut parts = input.split(',');
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(c), None) => (parse_number(r)?, parse_number(c)?),
            _ => return Err(ParseError::Format(input.into())),
        };
        let max = BOARD_SIZE as i64;
        if !(1..=max).contains(&row) || !(1..=max).contains(&col) {
            return Err(ParseError::OutOfRange { row, col });
        }
        Ok(Command::Place(Position::new(row as usize - 1, col as usize - 1)))
    }
}

fn parse_number(s: &str) -> Result<i64, ParseError> {
    let s = s.trim();
    s.parse().map_err(|_| ParseError::NotANumber(s.into()))
}

/// Result of handling one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Waiting for the human's next move.
    Continue,
    /// The game ended with the given status.
    Finished(GameStatus),
    Quit,
}

/// A game between a human and a [`Strategy`], with undo and redo.
pub struct Session<S> {
    history: History,
    human: Player,
    bot: S,
}

impl<S: Strategy> Session<S> {
    pub fn new(bot: S, human: Player) -> Self {
        Self {
            history: History::new(),
            human,
            bot,
        }
    }

    /// Let the strategy open the game when the human plays `O`.
    pub fn start(&mut self) -> anyhow::Result<Outcome> {
        if self.board().current_player() != self.human && !self.history.can_undo() {
            self.play_bot()?;
        }
        Ok(self.outcome())
    }

    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn status(&self) -> GameStatus {
        self.board().status()
    }

    pub fn handle(&mut self, command: Command) -> anyhow::Result<Outcome> {
        match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Undo => {
                self.undo()?;
                log::debug!("undo, {} boards on timeline", self.history.len());
            }
            Command::Redo => {
                self.redo()?;
                log::debug!("redo, {} boards on timeline", self.history.len());
            }
            Command::Place(pos) => self.place(pos)?,
        }
        Ok(self.outcome())
    }

    fn outcome(&self) -> Outcome {
        match self.status() {
            GameStatus::InProgress => Outcome::Continue,
            status => Outcome::Finished(status),
        }
    }

    fn place(&mut self, pos: Position) -> anyhow::Result<()> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameOver(status).into());
        }
        let next = self.board().apply(Move::at(pos, self.human))?;
        self.history.record(next);
        log::debug!("{} played ({}, {})", self.human, pos.row, pos.col);

        if !self.status().is_terminal() {
            self.play_bot()?;
        }
        match self.status() {
            GameStatus::InProgress => {}
            GameStatus::Draw => log::info!("game over, draw"),
            status => {
                if let Some(winner) = status.winner() {
                    log::info!("game over, {} wins", winner);
                }
            }
        }
        Ok(())
    }

    fn play_bot(&mut self) -> Result<(), GameError> {
        let board = *self.board();
        let mv = self.bot.choose_move(&board)?;
        self.history.record(board.apply(mv)?);
        log::debug!("strategy played {} at ({}, {})", mv.player, mv.row, mv.col);
        Ok(())
    }

    /// Step back to the previous board where the human was on turn.
    fn undo(&mut self) -> Result<(), GameError> {
        let steps = self
            .history
            .timeline()
            .iter()
            .rev()
            .skip(1)
            .position(|b| b.current_player() == self.human)
            .ok_or(GameError::NothingToUndo)?
            + 1;
        for _ in 0..steps {
            self.history.undo()?;
        }
        Ok(())
    }

    /// Replay undone plies until the human is on turn or the game is over.
    fn redo(&mut self) -> Result<(), GameError> {
        self.history.redo()?;
        while self.board().current_player() != self.human
            && !self.status().is_terminal()
            && self.history.can_redo()
        {
            self.history.redo()?;
        }
        Ok(())
    }
}
