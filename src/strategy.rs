use crate::{
    board::{Board, Move},
    common::{GameError, Player},
    history::History,
};

/// A move-selection policy.
///
/// Implementations only use the board's public queries and must return a
/// move that [`Board::apply`] accepts, or [`GameError::NoLegalMove`] when the
/// board has no move to offer.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        (**self).choose_move(board)
    }
}

impl<S: Strategy + ?Sized> Strategy for alloc::boxed::Box<S> {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        (**self).choose_move(board)
    }
}

/// Let `x` and `o` play each other from the empty board until the game ends.
///
/// Every applied board is recorded, so the returned history's current board
/// is terminal.
pub fn play_out<A, B>(x: &mut A, o: &mut B) -> Result<History, GameError>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let mut history = History::new();
    while !history.current().status().is_terminal() {
        let board = *history.current();
        let mv = match board.current_player() {
            Player::X => x.choose_move(&board)?,
            Player::O => o.choose_move(&board)?,
        };
        history.record(board.apply(mv)?);
    }
    Ok(history)
}
