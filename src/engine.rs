//! Validating guesses and driving the game state machine.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    game::{Game, GameState, Word},
    score::{score, Score},
    GuessError, Result, WordError, WordleError,
};

/// The dictionary capability the engine consumes.
///
/// [`submit_guess`] only ever calls [`exists`](WordSource::exists);
/// [`random_word`](WordSource::random_word) serves the collaborator that
/// creates games. Implementations decide where the words come from; see
/// [`WordList`](crate::words::WordList) for the file-backed one.
pub trait WordSource {
    /// Returns true if `word` may be played.
    fn exists(&self, word: &Word) -> bool;

    /// Picks a target for a new game, or `None` if the source is empty.
    fn random_word(&self) -> Option<Word>;
}

/// What a legal guess produced, for the caller to serialize.
///
/// With the `serde` feature this becomes the boundary record
/// `{ "Score": "GG   ", "State": "InProgress" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(crate = "serde_crate", rename_all = "PascalCase")
)]
pub struct Outcome {
    /// The per-letter marks for this guess.
    pub score: Score,

    /// Where the game stands after this guess.
    pub state: GameState,
}

/// Validates `raw_guess` against `game` and, when it is legal, records and
/// scores it.
///
/// The checks run in a fixed order and only the first failure is reported:
///
/// 1. `game` must be resolved (`Some`), otherwise
///    [`WordleError::GameNotFound`];
/// 2. the game must not already be won, nor
/// 3. lost;
/// 4. the guess, normalized to uppercase, must be exactly five letters;
/// 5. it must be a word `words` knows;
/// 6. it must not have been played earlier in this game.
///
/// On success the normalized guess is appended to the game, the state moves
/// to [`Won`](GameState::Won), [`Lost`](GameState::Lost), or stays
/// [`InProgress`](GameState::InProgress), and the caller receives the
/// [`Outcome`]. Persisting the mutated `game` afterwards is the caller's
/// job; on any error the game is untouched.
///
/// Nothing here is internally synchronized. Two overlapping calls for the
/// same game could both pass validation against stale state, so callers
/// serving concurrent requests must serialize them per game id, for example
/// with a per-game lock or a transactional read-modify-write at the storage
/// boundary. Distinct games need no coordination.
///
/// # Examples
///
/// ```rust
/// # use std::time::SystemTime;
/// # use wordle_engine::{submit_guess, Game, GameId, GameState, Word, WordList};
/// #
/// let words = WordList::from_words(
///     ["CRANE", "CRIMP"].iter().map(|w| Word::from_str(w).unwrap()),
/// );
/// let mut game = Game::new(
///     GameId(1),
///     Word::from_str("CRIMP")?,
///     SystemTime::now(),
/// );
///
/// let outcome = submit_guess(Some(&mut game), "crane", &words)?;
/// assert_eq!(outcome.score.to_string(), "GG   ");
/// assert_eq!(outcome.state, GameState::InProgress);
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
pub fn submit_guess(
    game: Option<&mut Game>,
    raw_guess: &str,
    words: &impl WordSource,
) -> Result<Outcome> {
    let game = game.ok_or(WordleError::GameNotFound)?;

    match game.state() {
        GameState::Won => return Err(GuessError::GameAlreadyWon.into()),
        GameState::Lost => return Err(GuessError::GameAlreadyLost.into()),
        GameState::InProgress => {}
    }

    let guess = match Word::from_str(raw_guess) {
        Ok(word) => word,
        Err(WordError::WrongLength(_)) => return Err(GuessError::WrongLength.into()),
        // anything outside the alphabet cannot be a dictionary word
        Err(WordError::NotAlphabetic(_)) => return Err(GuessError::NotAWord.into()),
    };

    if !words.exists(&guess) {
        return Err(GuessError::NotAWord.into());
    }

    if game.guesses().contains(&guess) {
        return Err(GuessError::AlreadyGuessed.into());
    }

    let score = score(game.target(), &guess);
    let state = game.append(guess);

    Ok(Outcome { score, state })
}
