//! Cloze question engine for English grammar practice.
//!
//! This crate provides:
//! - Passive-voice copula questions with person/number/tense agreement
//! - Clause-connector questions from cause/effect scenarios and from
//!   pre-authored templates
//! - Plausible distractor sets, always four distinct options per question
//! - A curated builtin word bank, or bring your own via [`WordBankBuilder`]
//!
//! # Quick Start
//!
//! ```
//! use cloze_core::{QuestionEngine, QuestionType};
//!
//! let engine = QuestionEngine::new(cloze_core::builtin_bank());
//! let record = engine.generate(QuestionType::Passive, 1);
//!
//! assert_eq!(record.options.len(), 4);
//! assert!(record.options.contains(&record.answer));
//! ```

pub mod builtin;
pub mod conjunction;
pub mod distractor;
pub mod grammar;
pub mod lexicon;
pub mod passive;
pub mod question;
pub mod testing;

// Primary public API
pub use builtin::bank as builtin_bank;
pub use lexicon::{LexiconError, WordBank, WordBankBuilder};
pub use question::{QuestionEngine, QuestionRecord, QuestionType, BLANK};

use rand::Rng;

/// Generate one question from the builtin bank with the thread-local RNG.
///
/// Convenience for callers that don't manage a bank or an engine of their
/// own.
pub fn generate(kind: QuestionType, level: u32) -> QuestionRecord {
    QuestionEngine::new(builtin_bank()).generate(kind, level)
}

/// Like [`generate`], with a caller-supplied RNG.
pub fn generate_with_rng<R: Rng>(kind: QuestionType, level: u32, rng: &mut R) -> QuestionRecord {
    QuestionEngine::new(builtin_bank()).generate_with_rng(kind, level, rng)
}
