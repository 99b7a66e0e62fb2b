use tictactoe::{
    play_out, Board, GameError, GameStatus, HeuristicStrategy, Move, Player, RandomStrategy,
    Strategy,
};

fn board_from(cells: &[(usize, usize, Player)], to_move: Player) -> Board {
    // interleave the marks so every intermediate board is legal
    let xs: Vec<_> = cells.iter().filter(|c| c.2 == Player::X).collect();
    let os: Vec<_> = cells.iter().filter(|c| c.2 == Player::O).collect();
    let mut moves = Vec::new();
    for i in 0..xs.len().max(os.len()) {
        if let Some(&&(r, c, p)) = xs.get(i) {
            moves.push(Move::new(r, c, p));
        }
        if let Some(&&(r, c, p)) = os.get(i) {
            moves.push(Move::new(r, c, p));
        }
    }
    let board = Board::replay(moves).unwrap();
    assert_eq!(board.current_player(), to_move);
    board
}

#[test]
fn test_takes_immediate_win() {
    // O holds (0,0) and (0,1); X has blocking chances elsewhere
    let board = board_from(
        &[
            (1, 1, Player::X),
            (0, 0, Player::O),
            (2, 2, Player::X),
            (0, 1, Player::O),
            (2, 1, Player::X),
        ],
        Player::O,
    );
    let mv = HeuristicStrategy::new().choose_move(&board).unwrap();
    assert_eq!(mv, Move::new(0, 2, Player::O));
}

#[test]
fn test_win_preferred_over_block() {
    // X wins at (2,0); O's threat at (1,2) comes earlier in row-major order
    let board = board_from(
        &[
            (0, 0, Player::X),
            (0, 2, Player::O),
            (1, 0, Player::X),
            (2, 2, Player::O),
        ],
        Player::X,
    );
    let mv = HeuristicStrategy::new().choose_move(&board).unwrap();
    assert_eq!(mv, Move::new(2, 0, Player::X));
}

#[test]
fn test_blocks_row() {
    let board = board_from(
        &[(1, 0, Player::X), (0, 0, Player::O), (1, 2, Player::X)],
        Player::O,
    );
    let mv = HeuristicStrategy::new().choose_move(&board).unwrap();
    assert_eq!(mv, Move::new(1, 1, Player::O));
}

#[test]
fn test_center_on_empty_board() {
    let mv = HeuristicStrategy::new().choose_move(&Board::empty()).unwrap();
    assert_eq!(mv, Move::new(1, 1, Player::X));
}

#[test]
fn test_edge_when_center_and_corners_taken() {
    let board = board_from(
        &[
            (1, 1, Player::X),
            (0, 0, Player::O),
            (2, 2, Player::X),
            (0, 2, Player::O),
            (0, 1, Player::X),
            (2, 1, Player::O),
            (2, 0, Player::X),
        ],
        Player::O,
    );
    // no win or block is available for O
    let mv = HeuristicStrategy::new().choose_move(&board).unwrap();
    assert_eq!(mv, Move::new(1, 0, Player::O));
}

#[test]
fn test_no_legal_move_on_full_board() {
    let board = Board::replay([
        Move::new(0, 0, Player::X),
        Move::new(0, 1, Player::O),
        Move::new(0, 2, Player::X),
        Move::new(1, 0, Player::O),
        Move::new(1, 1, Player::X),
        Move::new(2, 0, Player::O),
        Move::new(1, 2, Player::X),
        Move::new(2, 2, Player::O),
        Move::new(2, 1, Player::X),
    ])
    .unwrap();
    assert_eq!(
        HeuristicStrategy::new().choose_move(&board).unwrap_err(),
        GameError::NoLegalMove
    );
    assert_eq!(
        RandomStrategy::seeded(3).choose_move(&board).unwrap_err(),
        GameError::NoLegalMove
    );
}

#[test]
fn test_heuristic_self_play_draws() {
    let history = play_out(&mut HeuristicStrategy::new(), &mut HeuristicStrategy::new()).unwrap();
    assert_eq!(history.current().status(), GameStatus::Draw);
    assert_eq!(history.len(), 10);
}

#[test]
fn test_strategies_usable_as_trait_objects() {
    let mut players: Vec<Box<dyn Strategy>> = vec![
        Box::new(HeuristicStrategy::new()),
        Box::new(RandomStrategy::seeded(11)),
    ];
    let board = Board::empty();
    for p in players.iter_mut() {
        let mv = p.choose_move(&board).unwrap();
        assert!(board.apply(mv).is_ok());
    }
}
