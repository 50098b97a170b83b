use anyhow::Result;
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    board::{GameState, Player},
    config::{Config, Difficulty},
    engine::Engine,
    INFINITY,
};

mod session;
use session::*;

/// Asks `prompt` until `parse` accepts the answer
fn ask<T>(stdin: &Stdin, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
    loop {
        print!("{}", prompt);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        match parse(buffer.trim()) {
            Ok(answer) => return Ok(answer),
            Err(err) => println!("{}", err),
        }
    }
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose who moves first
    let human = ask(&stdin, "Do you want to move first? y/n: ", |answer| {
        match answer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => Ok(Player::One),
            Some(_letter @ 'n') => Ok(Player::Two),
            _ => Err(anyhow::anyhow!("Unknown answer given")),
        }
    })?;

    // choose AI strength
    let difficulty = ask(
        &stdin,
        "Choose a difficulty, easy/medium/hard: ",
        |answer| answer.parse::<Difficulty>(),
    )?;

    let mut session = Session::new(human);
    let config = Config::new().with_maximizer(session.ai());

    // game loop
    loop {
        session.display().expect("Failed to draw board!");

        match session.state {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if session.to_move() == session.ai() {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);

                        let mut engine = Engine::new(&config);
                        let (best_move, score) = engine.search(&session.board, difficulty.depth());
                        spinner.finish_and_clear();

                        let best_move = match best_move {
                            Some(column) => column,
                            None => {
                                println!("AI has no move left");
                                break;
                            }
                        };

                        if score == INFINITY {
                            println!("AI can force a win.");
                        } else if score == -INFINITY {
                            println!("AI sees a forced loss.");
                        }
                        println!("Searched {} positions", engine.node_count);
                        println!("AI move: {}", best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin | GameState::PlayerTwoWin => {
                let winner = if session.state == GameState::PlayerOneWin {
                    Player::One
                } else {
                    Player::Two
                };
                if winner == session.human {
                    println!("You win!");
                } else {
                    println!("AI wins!");
                }
                println!("Moves played: {}", session.game);
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                println!("Moves played: {}", session.game);
                break;
            }
        }
    }
    Ok(())
}
