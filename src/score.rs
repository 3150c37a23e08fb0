//! Scoring a guess against the target word.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::game::Word;

/// The feedback for a single letter of a guess.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Mark {
    /// The letter is in the target word, in this position.
    Green,

    /// The letter is in the target word in another position, and the target
    /// still has an unmatched copy of it to credit.
    Yellow,

    /// The letter earns no credit against the target.
    Gray,
}

impl Mark {
    /// The single-character wire encoding: `G`, `Y`, or a space.
    pub fn letter(self) -> char {
        match self {
            Mark::Green => 'G',
            Mark::Yellow => 'Y',
            Mark::Gray => ' ',
        }
    }
}

/// The five marks produced by scoring one guess, in guess-letter order.
///
/// Displays as the 5-character string a client receives, for instance
/// `"GG   "` for a guess whose first two letters are placed correctly.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Score([Mark; 5]);

impl Score {
    /// The marks, aligned with the letters of the guess.
    pub fn marks(&self) -> &[Mark; 5] {
        &self.0
    }

    /// Returns true when every mark is [`Mark::Green`].
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Green)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.letter())?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

const A_ASCII: usize = 0x41;

/// Scores `guess` against `target`.
///
/// Two passes over the guess. The first claims every exactly-placed letter
/// as [`Mark::Green`] and consumes it from the target's remaining-letter
/// counts. The second marks the rest [`Mark::Yellow`] only while the counts
/// still hold an unmatched copy of the letter, and [`Mark::Gray`] otherwise.
///
/// Greens must be claimed before any yellow is granted: with the target
/// `APPLE` and the guess `LLAMA`, the target has a single creditable `L`,
/// so only the first `L` of the guess may score, and a guess never receives
/// more combined green and yellow credit for a letter than the target
/// contains copies of it.
///
/// # Examples
///
/// ```rust
/// # use wordle_engine::{score, Word};
/// #
/// let target = Word::from_str("EXXXA")?;
/// let guess = Word::from_str("APPLE")?;
/// assert_eq!(score(&target, &guess).to_string(), "Y   Y");
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
pub fn score(target: &Word, guess: &Word) -> Score {
    let i = |b: u8| b as usize - A_ASCII;

    let mut remaining = [0_u8; 26];
    for &letter in target.letters() {
        remaining[i(letter)] += 1;
    }

    let mut marks = [Mark::Gray; 5];

    for (slot, (&guessed, &answer)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if guessed == answer {
            marks[slot] = Mark::Green;
            remaining[i(guessed)] -= 1;
        }
    }

    for (slot, &guessed) in guess.letters().iter().enumerate() {
        if marks[slot] == Mark::Green {
            continue;
        }
        if remaining[i(guessed)] > 0 {
            marks[slot] = Mark::Yellow;
            remaining[i(guessed)] -= 1;
        }
    }

    Score(marks)
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;
    use crate::WordleError;

    macro_rules! score_test {
        ($fn_name:ident[$target:expr, $guess:expr => $encoded:expr]) => {
            #[test]
            fn $fn_name() -> Result<(), WordleError> {
                let target = Word::from_str($target)?;
                let guess = Word::from_str($guess)?;
                assert_eq!(score(&target, &guess).to_string(), $encoded);
                Ok(())
            }
        };
    }

    score_test! { placed_letters_are_green["ABCDE", "ABOUT" => "GG   "] }
    score_test! { displaced_letters_are_yellow["EXXXA", "APPLE" => "Y   Y"] }
    score_test! { the_target_scores_all_green["APPLE", "APPLE" => "GGGGG"] }
    score_test! { unrelated_words_score_nothing["CRIMP", "BOLTS" => "     "] }

    // a repeated guess letter may not claim more credit than the target
    // holds copies of it
    score_test! { repeated_guess_letters_share_one_budget["APPLE", "LLAMA" => "Y Y  "] }
    score_test! { green_consumes_the_budget_first["SOBER", "SPOOL" => "G Y  "] }
    score_test! { second_copy_goes_gray_after_green["SOBER", "SOAKS" => "GG   "] }
    score_test! { repeated_target_letters_credit_twice["SPOON", "ODORS" => "Y G Y"] }
    score_test! { sixth_guess_scenario["ABCDE", "APPLE" => "G   G"] }

    fn word() -> impl Strategy<Value = Word> {
        "[A-Z]{5}".prop_map(|s| Word::from_str(&s).unwrap())
    }

    proptest! {
        #[test]
        fn greens_match_positional_equality(target in word(), guess in word()) {
            let marks = *score(&target, &guess).marks();
            let equal_positions = target
                .letters()
                .iter()
                .zip(guess.letters())
                .filter(|(t, g)| t == g)
                .count();
            let greens = marks.iter().filter(|&&m| m == Mark::Green).count();
            prop_assert_eq!(greens, equal_positions);
        }

        #[test]
        fn credit_never_exceeds_target_count(target in word(), guess in word()) {
            let marks = *score(&target, &guess).marks();
            let target_counts = target.letters().iter().copied().counts();
            let credited = guess
                .letters()
                .iter()
                .copied()
                .zip(marks.iter().copied())
                .filter(|&(_, mark)| mark != Mark::Gray)
                .map(|(letter, _)| letter)
                .counts();
            for (letter, n) in credited {
                prop_assert!(n <= target_counts.get(&letter).copied().unwrap_or(0));
            }
        }

        #[test]
        fn guessing_the_target_is_winning(target in word()) {
            prop_assert!(score(&target, &target).is_winning());
        }

        #[test]
        fn encoding_is_always_five_characters(target in word(), guess in word()) {
            prop_assert_eq!(score(&target, &guess).to_string().chars().count(), 5);
        }
    }
}
