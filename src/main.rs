use std::io::{self, BufRead, Write};

use tictactoe::{
    init_logging, Command, GameError, GameOver, GameStatus, HeuristicStrategy, Outcome,
    ParseError, Player, Session,
};

fn print_result(status: GameStatus) {
    match status {
        GameStatus::XWins => println!("You (X) win!"),
        GameStatus::OWins => println!("The bot (O) wins!"),
        GameStatus::Draw => println!("It's a draw!"),
        GameStatus::InProgress => println!("Game is still in progress."),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut session = Session::new(HeuristicStrategy::new(), Player::X);
    session.start()?;

    println!("Tic-Tac-Toe - Human (X) vs Bot (O)");
    println!("Commands: 'row,col' to move (1-3), 'u' to undo, 'r' to redo, 'q' to quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print!("{}", session.board());
        println!("Current player: {}", session.board().current_player());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match Command::parse(&line?) {
            Ok(c) => c,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };

        match session.handle(command) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Finished(status)) => {
                println!();
                print!("{}", session.board());
                print_result(status);
                break;
            }
            Err(e) => {
                if let Some(game_err) = e.downcast_ref::<GameError>() {
                    println!("Error: {}", game_err);
                } else if let Some(over) = e.downcast_ref::<GameOver>() {
                    println!("{}", over);
                } else {
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}
