//! A concrete word list backing the [`WordSource`] capability.

use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rand::seq::IteratorRandom;

use crate::{engine::WordSource, game::Word, Result, WordListError};

/// An in-memory dictionary of playable words.
///
/// The shape a deployment loads from `words.txt`: one word per line,
/// normalized to uppercase, duplicates collapsed. Lookup is a set probe and
/// [`random_word`](WordSource::random_word) draws uniformly, so the list
/// can be shared read-only across as many games as the caller likes.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: HashSet<Word>,
}

impl WordList {
    /// Reads a word list from a file with one five letter word per line.
    ///
    /// Lines are validated as they are read; the first one that is not a
    /// playable word fails the whole load, reporting its line number.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let file = File::open(path)?;

        let mut words = HashSet::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let word = Word::from_str(&line).map_err(|source| WordListError::BadWord {
                line: index + 1,
                source,
            })?;
            words.insert(word);
        }

        Ok(WordList { words })
    }

    /// Builds a word list out of already-constructed words.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        WordList {
            words: words.into_iter().collect(),
        }
    }

    /// How many distinct words the list holds.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn exists(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    fn random_word(&self) -> Option<Word> {
        self.words.iter().choose(&mut rand::thread_rng()).copied()
    }
}
