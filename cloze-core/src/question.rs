//! Question records and the engine facade.

use crate::lexicon::WordBank;
use crate::{conjunction, passive};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The blank marker embedded in every question sentence.
pub const BLANK: &str = "____";

/// The kinds of question the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Passive,
    Conjunction,
}

impl QuestionType {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionType::Passive => "passive",
            QuestionType::Conjunction => "conjunction",
        }
    }

    /// Parse a request parameter; `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<QuestionType> {
        match name {
            "passive" => Some(QuestionType::Passive),
            "conjunction" => Some(QuestionType::Conjunction),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated multiple-choice cloze question.
///
/// The sentence contains exactly one [`BLANK`]; `options` holds exactly
/// four distinct strings, one of which is `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionRecord {
    /// Check the record invariants; generators uphold these by
    /// construction, tests assert them wholesale.
    pub fn is_well_formed(&self) -> bool {
        let distinct = self
            .options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b));
        self.options.len() == 4
            && distinct
            && self.options.iter().filter(|o| **o == self.answer).count() == 1
            && self.question.matches(BLANK).count() == 1
    }
}

/// The engine facade: selects a generator by question type and level.
///
/// Holds only a borrow of the word bank, so one bank can back any number
/// of engines (and threads) at once.
#[derive(Debug, Clone, Copy)]
pub struct QuestionEngine<'a> {
    bank: &'a WordBank,
}

impl<'a> QuestionEngine<'a> {
    pub fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &WordBank {
        self.bank
    }

    /// Generate one question using the thread-local RNG.
    pub fn generate(&self, kind: QuestionType, level: u32) -> QuestionRecord {
        self.generate_with_rng(kind, level, &mut rand::thread_rng())
    }

    /// Generate one question with a specific RNG.
    ///
    /// Conjunction requests draw fairly between the scenario-driven and
    /// template-driven variants when the bank carries both; otherwise the
    /// populated variant serves alone.
    pub fn generate_with_rng<R: Rng>(
        &self,
        kind: QuestionType,
        level: u32,
        rng: &mut R,
    ) -> QuestionRecord {
        match kind {
            QuestionType::Passive => passive::generate_with_rng(self.bank, level, rng),
            QuestionType::Conjunction => {
                let has_scenarios = !self.bank.scenarios().is_empty();
                let has_templates = !self.bank.templates().is_empty();
                if has_scenarios && (!has_templates || rng.gen_bool(0.5)) {
                    conjunction::generate_dynamic_with_rng(self.bank, level, rng)
                } else {
                    conjunction::generate_static_with_rng(self.bank, level, rng)
                }
            }
        }
    }
}
