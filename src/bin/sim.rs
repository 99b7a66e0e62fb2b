use serde_json::json;
use tictactoe::{init_logging, play_out, GameStatus, HeuristicStrategy, RandomStrategy};

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 100,
    };

    let mut heuristic = HeuristicStrategy::new();
    let mut random = RandomStrategy::seeded(seed);

    let (mut x_wins, mut o_wins, mut draws, mut plies) = (0usize, 0usize, 0usize, 0usize);
    let mut last_game = None;
    for game in 0..games {
        let history = play_out(&mut heuristic, &mut random)?;
        let board = *history.current();
        log::debug!("game {} ended {:?}\n{}", game, board.status(), board);
        plies += board.moves_played();
        match board.status() {
            GameStatus::XWins => x_wins += 1,
            GameStatus::OWins => o_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::InProgress => anyhow::bail!("game {} stopped before the end", game),
        }
        last_game = Some(json!({ "status": board.status(), "board": board }));
    }

    let average_plies = if games == 0 {
        0.0
    } else {
        plies as f64 / games as f64
    };
    let result = json!({
        "games": games,
        "x": "heuristic",
        "o": "random",
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "average_plies": average_plies,
        "last_game": last_game,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
