//! Plays one game of Wordle in the terminal against a word list file.

use std::{
    env,
    io::{self, BufRead, Write},
    process,
    time::SystemTime,
};

use log::{debug, info};
use wordle_engine::{submit_guess, Game, GameId, GameState, Guesses, WordList, WordSource};

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: wordle_cli <words.txt>");
            process::exit(2);
        }
    };

    let words = match WordList::from_path(&path) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    };
    info!("loaded {} words from {}", words.len(), path);

    let target = match words.random_word() {
        Some(word) => word,
        None => {
            eprintln!("{}: the word list is empty", path);
            process::exit(1);
        }
    };
    debug!("target word is {}", target);

    let mut game = Game::new(GameId(1), target, SystemTime::now());

    println!(
        "Guess the hidden word: 5 letters, {} tries.",
        Guesses::LIMIT
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("could not flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }

        match submit_guess(Some(&mut game), line.trim(), &words) {
            Ok(outcome) => {
                println!("  [{}]", outcome.score);
                match outcome.state {
                    GameState::InProgress => {}
                    GameState::Won => {
                        println!("You won in {} guesses.", game.guesses().inner().len());
                        return;
                    }
                    GameState::Lost => {
                        println!("Out of guesses. The word was {}.", game.target());
                        return;
                    }
                }
            }
            Err(err) => println!("{}", err),
        }
    }
}
