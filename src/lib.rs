#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod game;
pub use game::{Game, GameId, GameState, Guesses, Word};

pub mod score;
pub use score::{score, Mark, Score};

pub mod engine;
pub use engine::{submit_guess, Outcome, WordSource};

pub mod words;
pub use words::WordList;

/// Convenient alias used throughout the crate.
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_engine` can produce.
///
/// `GameNotFound` is its own variant rather than a [`GuessError`] so that a
/// transport can answer with a missing-resource status instead of a
/// bad-request one. Every other rejection of a guess arrives as
/// [`Guess`](WordleError::Guess), displaying the exact message the player
/// should see.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The referenced game was never created.
    #[error("Game does not exist. Please call Game first.")]
    GameNotFound,

    #[error(transparent)]
    Guess {
        #[from]
        kind: GuessError,
    },

    #[error(transparent)]
    Word {
        #[from]
        kind: WordError,
    },

    #[error(transparent)]
    WordList {
        #[from]
        kind: WordListError,
    },
}

/// A guess rejected by [`submit_guess`](engine::submit_guess()).
///
/// The display string of each variant is the message the boundary returns
/// verbatim, so variants must not be reworded casually.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    /// The game has already been won.
    #[error("You have already won this game.")]
    GameAlreadyWon,

    /// The game has already been lost.
    #[error("You have already lost this game.")]
    GameAlreadyLost,

    /// The guess is not exactly five letters long.
    #[error("Guesses must be 5 letters long.")]
    WrongLength,

    /// The guess is not in the dictionary.
    #[error("Your guess is not a valid word.")]
    NotAWord,

    /// The same word was already played earlier in this game.
    #[error("You have already guessed this word.")]
    AlreadyGuessed,
}

/// The string provided when constructing a [`Word`] is not a playable word.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// The string is not exactly five characters long.
    #[error("\"{0}\" is not 5 letters long")]
    WrongLength(String),

    /// The string contains a character outside `A-Z`.
    #[error("\"{0}\" contains a character outside the alphabet")]
    NotAlphabetic(String),
}

/// A word list could not be loaded.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read the word list")]
    Io(#[from] std::io::Error),

    /// A line of the file did not parse as a playable word.
    #[error("line {line} of the word list is not a 5-letter word")]
    BadWord {
        line: usize,
        source: WordError,
    },
}
