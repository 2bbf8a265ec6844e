//! Testing utilities for the question engine.
//!
//! This module provides tools for integration testing:
//! - `seeded_rng` for pinning generation deterministically
//! - `assert_well_formed` for the record invariants
//! - `sample_bank` as a miniature validated lexicon

use crate::grammar::{Number, Person, WordClass};
use crate::lexicon::{
    Agent, Clause, ConjunctionTemplate, DifficultyTier, Scenario, Target, TargetCategory, Verb,
    WordBank,
};
use crate::question::QuestionRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A reproducible RNG for deterministic generation in tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Assert every record invariant: four distinct options, the answer among
/// them exactly once, exactly one blank in the sentence.
pub fn assert_well_formed(record: &QuestionRecord) {
    assert!(record.is_well_formed(), "malformed record: {record:?}");
}

/// A small validated bank covering both question types and both tiers.
pub fn sample_bank() -> WordBank {
    WordBank::builder()
        .agents(vec![
            Agent::new("He", Person::Third, Number::Singular, WordClass::Pronoun),
            Agent::new("the teacher", Person::Third, Number::Singular, WordClass::CommonNoun),
            Agent::new("Mary", Person::Third, Number::Singular, WordClass::ProperNoun),
        ])
        .verbs(vec![
            Verb::new("write", "written", TargetCategory::Text),
            Verb::new("eat", "eaten", TargetCategory::Food),
        ])
        .targets(vec![
            Target::new(
                "the book",
                Person::Third,
                Number::Singular,
                TargetCategory::Text,
                DifficultyTier::Basic,
            ),
            Target::new(
                "the letters",
                Person::Third,
                Number::Plural,
                TargetCategory::Text,
                DifficultyTier::Intermediate,
            ),
            Target::new(
                "the cake",
                Person::Third,
                Number::Singular,
                TargetCategory::Food,
                DifficultyTier::Basic,
            ),
        ])
        .past_markers(["yesterday", "last week"])
        .present_markers(["every day", "every week"])
        .scenarios(vec![Scenario::new("weather_bad", DifficultyTier::Basic)
            .with_subjects(["It"])
            .with_causes(["was raining hard"])
            .with_logical_effects(vec![Clause::full("we stayed at home")])
            .with_contrastive_effects(vec![Clause::full("we still went hiking")])])
        .templates(vec![ConjunctionTemplate::new(
            "I was tired",
            "I went to bed early",
            "so",
            ["but", "because", "although"],
            DifficultyTier::Basic,
        )])
        .build()
        .expect("sample bank must validate")
}
