//! The game record and the types it is made of.

use std::{fmt::Display, ops::Deref, time::SystemTime};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, WordError};

/// A five letter word, stored uppercase.
///
/// This struct represents a word a game can be played with, and its
/// construction is validated to ensure that every instance is exactly five
/// letters of the Latin alphabet. Comparisons between words are therefore
/// case-insensitive: both `"apple"` and `"APPLE"` construct the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: [u8; 5],
}

impl Word {
    /// Creates a new [`Word`] from a five letter string.
    ///
    /// The input is normalized to ASCII uppercase. Returns an error if the
    /// string is not exactly five characters long or contains anything
    /// outside the alphabet. Punctuation and accented letters are rejected
    /// rather than stripped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::ops::Deref;
    /// # use wordle_engine::Word;
    /// #
    /// let apple = Word::from_str("apple")?;
    /// assert_eq!(apple.deref(), "APPLE");
    ///
    /// assert!(Word::from_str("pears").is_ok());
    /// assert!(Word::from_str("pear").is_err());
    /// assert!(Word::from_str("pe-ar").is_err());
    /// #
    /// # Ok::<_, wordle_engine::WordleError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Result<Self, WordError> {
        if word.chars().count() != 5 {
            return Err(WordError::WrongLength(word.to_string()));
        }

        let mut letters = [0_u8; 5];
        for (slot, c) in letters.iter_mut().zip(word.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotAlphabetic(word.to_string()));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }

        Ok(Word { letters })
    }

    /// The five uppercase ASCII letters of this word.
    pub(crate) fn letters(&self) -> &[u8; 5] {
        &self.letters
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // always valid UTF-8: construction admits ASCII letters only
        std::str::from_utf8(&self.letters).unwrap()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deref())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Word {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Word::from_str(&s).map_err(de::Error::custom)
    }
}

/// Opaque identifier of a [`Game`].
///
/// Assigned by the storage collaborator when the game record is created;
/// nothing in this crate inspects the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct GameId(pub u64);

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a [`Game`] is in its lifecycle.
///
/// `Won` and `Lost` are terminal: once either is reached, no further guess
/// is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum GameState {
    /// Fewer than six guesses made and none of them matched the target.
    InProgress,

    /// A guess matched the target word.
    Won,

    /// All six guesses were used without matching the target.
    Lost,
}

impl GameState {
    /// Returns true once no further guesses will be accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// The guesses made in one game, in play order.
///
/// A plain `Vec` behind a capacity guard: six guesses at most, append-only.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Guesses {
    inner: Vec<Word>,
}

impl Guesses {
    /// How many guesses a game allows.
    pub const LIMIT: usize = 6;

    /// Creates an empty list of guesses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a guess.
    ///
    /// This will return the word back if `inner` already has six elements.
    /// Otherwise, this function will succeed and return the new guess count.
    pub(crate) fn push(&mut self, word: Word) -> Result<usize, Word> {
        if self.inner.len() < Self::LIMIT {
            self.inner.push(word);
            Ok(self.inner.len())
        } else {
            Err(word)
        }
    }

    /// Returns a slice into the underlying data.
    pub fn inner(&self) -> &[Word] {
        self.inner.as_slice()
    }

    /// Returns true if all six guesses have been used.
    pub fn finished(&self) -> bool {
        self.inner.len() >= Self::LIMIT
    }

    /// Returns true if `word` was already played.
    pub fn contains(&self, word: &Word) -> bool {
        self.inner.contains(word)
    }
}

impl Display for Guesses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.iter().format("\n"))
    }
}

/// One play session.
///
/// Created by the storage collaborator with a target drawn from a
/// [`WordSource`](crate::WordSource) and an id of its choosing. After
/// creation the record is only ever mutated by
/// [`submit_guess`](crate::engine::submit_guess()), which appends to
/// `guesses` and moves `state`; `id` and `date_started` are never touched
/// again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Game {
    id: GameId,
    target: Word,
    guesses: Guesses,
    state: GameState,
    date_started: SystemTime,
}

impl Game {
    /// Creates a fresh game around a target word.
    pub fn new(id: GameId, target: Word, date_started: SystemTime) -> Self {
        Game {
            id,
            target,
            guesses: Guesses::new(),
            state: GameState::InProgress,
            date_started,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// The hidden word this game is trying to guess.
    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn date_started(&self) -> SystemTime {
        self.date_started
    }

    /// Records a validated guess and advances the state machine.
    ///
    /// Callers must already have checked that the game is in progress,
    /// which guarantees an open guess slot.
    pub(crate) fn append(&mut self, guess: Word) -> GameState {
        self.guesses
            .push(guess)
            .expect("a game in progress has an open guess slot");

        self.state = if guess == self.target {
            GameState::Won
        } else if self.guesses.finished() {
            GameState::Lost
        } else {
            GameState::InProgress
        };
        self.state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_normalize_to_uppercase() -> Result<(), WordError> {
        assert_eq!(Word::from_str("crane")?, Word::from_str("CRANE")?);
        assert_eq!(&*Word::from_str("crAnE")?, "CRANE");
        Ok(())
    }

    #[test]
    fn words_must_be_five_characters() {
        assert_eq!(
            Word::from_str("abc"),
            Err(WordError::WrongLength("abc".into()))
        );
        assert_eq!(
            Word::from_str("abcdef"),
            Err(WordError::WrongLength("abcdef".into()))
        );
        assert_eq!(Word::from_str(""), Err(WordError::WrongLength("".into())));
    }

    #[test]
    fn words_reject_anything_outside_the_alphabet() {
        for bad in ["ab!de", "ab de", "ab1de", "naïve"] {
            assert_eq!(
                Word::from_str(bad),
                Err(WordError::NotAlphabetic(bad.into())),
                "{bad:?} should not parse",
            );
        }
    }

    #[test]
    fn guesses_stop_accepting_after_six() -> Result<(), WordError> {
        let mut guesses = Guesses::new();
        for word in ["ALPHA", "BRAVO", "DELTA", "GAMMA", "OMEGA", "SIGMA"] {
            assert!(guesses.push(Word::from_str(word)?).is_ok());
        }
        assert!(guesses.finished());

        let extra = Word::from_str("KAPPA")?;
        assert_eq!(guesses.push(extra), Err(extra));
        assert_eq!(guesses.inner().len(), 6);
        Ok(())
    }

    #[test]
    fn guess_lookup_is_case_insensitive_by_construction() -> Result<(), WordError> {
        let mut guesses = Guesses::new();
        guesses.push(Word::from_str("apple")?).unwrap();
        assert!(guesses.contains(&Word::from_str("APPLE")?));
        Ok(())
    }

    #[test]
    fn only_terminal_states_refuse_further_guesses() {
        assert!(!GameState::InProgress.is_terminal());
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
    }

    #[test]
    fn new_games_start_in_progress() -> Result<(), WordError> {
        let game = Game::new(
            GameId(7),
            Word::from_str("APPLE")?,
            SystemTime::UNIX_EPOCH,
        );
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.guesses().inner().is_empty());
        assert_eq!(game.id(), GameId(7));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn words_serialize_as_strings() -> Result<(), WordError> {
        let word = Word::from_str("apple")?;
        assert_eq!(serde_json::to_value(word).unwrap(), "APPLE");
        assert_eq!(
            serde_json::from_str::<Word>("\"plumb\"").unwrap(),
            Word::from_str("PLUMB")?
        );
        assert!(serde_json::from_str::<Word>("\"not a word\"").is_err());
        Ok(())
    }
}
