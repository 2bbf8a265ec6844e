//! Distractor construction: plausible wrong options along a semantic axis.
//!
//! Copula distractors flip agreement (wrong number) and time reference
//! (opposite tense); connector distractors come from fixed per-pattern
//! confusable sets or from template authors. `build_options` turns any
//! candidate list into the final shuffled four-option set.

use crate::grammar::{self, Number, Person, Tense};
use rand::seq::SliceRandom;
use rand::Rng;

/// Every question presents exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// Confusable copula forms for the correct form at (person, number, tense).
///
/// The first entry is the wrong-number counterpart in the same tense; the
/// remaining two are the singular and plural forms of the opposite tense.
/// Deriving the set through [`grammar::copula`] keeps it person-aware and
/// free of duplicates, and collapses to {is, are}/{was, were} for the
/// third-person targets the lexicon actually carries.
pub fn copula_distractors(person: Person, number: Number, tense: Tense) -> [&'static str; 3] {
    [
        grammar::copula(person, number.opposite(), tense),
        grammar::copula(person, Number::Singular, tense.opposite()),
        grammar::copula(person, Number::Plural, tense.opposite()),
    ]
}

/// Assemble the final option list for a question.
///
/// Candidates are de-duplicated (keeping first occurrence) and stripped of
/// the answer itself, shuffled, cut down to three, then the answer is
/// mixed in with a second shuffle. Callers provide at least three distinct
/// candidates besides the answer; bank validation enforces that for
/// author-supplied sets.
pub fn build_options<R, S>(answer: &str, candidates: &[S], rng: &mut R) -> Vec<String>
where
    R: Rng,
    S: AsRef<str>,
{
    let mut distractors: Vec<&str> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate != answer && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }

    distractors.shuffle(rng);
    distractors.truncate(OPTION_COUNT - 1);

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(answer.to_string());
    options.shuffle(rng);
    options
}
