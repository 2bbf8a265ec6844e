//! The curated default word bank.
//!
//! Content is partitioned by difficulty tier so level-1 requests stay on
//! early-learner vocabulary. The bank is built and validated once per
//! process; a malformed table here is a startup configuration error and
//! aborts before the first question is served.

use crate::grammar::Number::{Plural, Singular};
use crate::grammar::Person::{First, Third};
use crate::grammar::WordClass::{CommonNoun, Pronoun, ProperNoun};
use crate::lexicon::DifficultyTier::{Advanced, Basic, Intermediate};
use crate::lexicon::{
    Agent, Clause, ConjunctionTemplate, Scenario, Target, TargetCategory, Verb, WordBank,
};

lazy_static::lazy_static! {
    static ref BANK: WordBank = build_bank();
}

/// The process-wide default bank.
pub fn bank() -> &'static WordBank {
    &BANK
}

fn build_bank() -> WordBank {
    WordBank::builder()
        .agents(agents())
        .verbs(verbs())
        .targets(targets())
        .past_markers([
            "yesterday",
            "last night",
            "last week",
            "two days ago",
            "a month ago",
        ])
        .present_markers([
            "every day",
            "every week",
            "every morning",
            "once a month",
            "regularly",
        ])
        .scenarios(scenarios())
        .templates(templates())
        .build()
        .expect("builtin word bank must validate")
}

fn agents() -> Vec<Agent> {
    vec![
        Agent::new("I", First, Singular, Pronoun),
        Agent::new("He", Third, Singular, Pronoun),
        Agent::new("She", Third, Singular, Pronoun),
        Agent::new("We", First, Plural, Pronoun),
        Agent::new("They", Third, Plural, Pronoun),
        Agent::new("the teacher", Third, Singular, CommonNoun),
        Agent::new("my mother", Third, Singular, CommonNoun),
        Agent::new("a famous chef", Third, Singular, CommonNoun),
        Agent::new("the students", Third, Plural, CommonNoun),
        Agent::new("the workers", Third, Plural, CommonNoun),
        Agent::new("Tom", Third, Singular, ProperNoun),
        Agent::new("Mary", Third, Singular, ProperNoun),
        Agent::new("Mr. Smith", Third, Singular, ProperNoun),
    ]
}

fn verbs() -> Vec<Verb> {
    vec![
        Verb::new("write", "written", TargetCategory::Text),
        Verb::new("publish", "published", TargetCategory::Text),
        Verb::new("eat", "eaten", TargetCategory::Food),
        Verb::new("cook", "cooked", TargetCategory::Food),
        Verb::new("build", "built", TargetCategory::Structure),
        Verb::new("design", "designed", TargetCategory::Structure),
        Verb::new("sing", "sung", TargetCategory::Song),
        Verb::new("compose", "composed", TargetCategory::Song),
        Verb::new("paint", "painted", TargetCategory::Artwork),
        Verb::new("repair", "repaired", TargetCategory::Machine),
        Verb::new("invent", "invented", TargetCategory::Machine),
        Verb::new("clean", "cleaned", TargetCategory::Room),
    ]
}

fn targets() -> Vec<Target> {
    vec![
        Target::new("the book", Third, Singular, TargetCategory::Text, Basic),
        Target::new("the letters", Third, Plural, TargetCategory::Text, Basic),
        Target::new("the essay", Third, Singular, TargetCategory::Text, Intermediate),
        Target::new("the novels", Third, Plural, TargetCategory::Text, Intermediate),
        Target::new("the cake", Third, Singular, TargetCategory::Food, Basic),
        Target::new("the cookies", Third, Plural, TargetCategory::Food, Basic),
        Target::new("the houses", Third, Plural, TargetCategory::Structure, Basic),
        Target::new("the bridge", Third, Singular, TargetCategory::Structure, Intermediate),
        Target::new("the song", Third, Singular, TargetCategory::Song, Basic),
        Target::new("the symphonies", Third, Plural, TargetCategory::Song, Advanced),
        Target::new("the portrait", Third, Singular, TargetCategory::Artwork, Intermediate),
        Target::new("the murals", Third, Plural, TargetCategory::Artwork, Advanced),
        Target::new("the engine", Third, Singular, TargetCategory::Machine, Intermediate),
        Target::new("the computers", Third, Plural, TargetCategory::Machine, Intermediate),
        Target::new("the classroom", Third, Singular, TargetCategory::Room, Basic),
        Target::new("the windows", Third, Plural, TargetCategory::Room, Basic),
    ]
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("weather_bad", Basic)
            .with_subjects(["It"])
            .with_causes([
                "was raining hard",
                "was snowing heavily",
                "was too hot outside",
            ])
            .with_logical_effects(vec![
                Clause::full("we stayed at home"),
                Clause::full("the picnic was cancelled"),
                Clause::full("we watched a movie indoors"),
            ])
            .with_contrastive_effects(vec![
                Clause::full("we still went hiking"),
                Clause::full("the children kept playing outside"),
            ]),
        Scenario::new("exam_effort", Basic)
            .with_subjects(["Tom", "Mary", "My brother", "My sister"])
            .with_causes([
                "studied hard for the exam",
                "reviewed the notes every night",
            ])
            .with_logical_effects(vec![
                Clause::predicate("passed the test easily"),
                Clause::predicate("felt confident in class"),
            ])
            .with_contrastive_effects(vec![
                Clause::predicate("failed the listening section"),
                Clause::predicate("still made careless mistakes"),
            ]),
        Scenario::new("traffic_delay", Intermediate)
            .with_subjects(["The bus", "The train"])
            .with_causes(["was late this morning", "broke down on the highway"])
            .with_logical_effects(vec![
                Clause::full("we missed the first lesson"),
                Clause::full("everyone had to wait an hour"),
            ])
            .with_contrastive_effects(vec![
                Clause::full("we still arrived on time"),
                Clause::full("nobody complained"),
            ]),
        Scenario::new("restaurant_food", Intermediate)
            .with_subjects(["The soup", "The steak"])
            .with_causes(["was too salty", "was served cold"])
            .with_logical_effects(vec![
                Clause::full("we sent it back to the kitchen"),
                Clause::full("my father refused to eat it"),
            ])
            .with_contrastive_effects(vec![
                Clause::full("my mother finished every bite"),
                Clause::full("the restaurant was still crowded"),
            ]),
    ]
}

fn templates() -> Vec<ConjunctionTemplate> {
    vec![
        ConjunctionTemplate::new(
            "I was tired",
            "I went to bed early",
            "so",
            ["but", "because", "although"],
            Basic,
        ),
        ConjunctionTemplate::new(
            "He practiced every day",
            "he won the competition",
            "so",
            ["but", "because", "although"],
            Basic,
        ),
        ConjunctionTemplate::new(
            "She likes coffee",
            "she never drinks it at night",
            "but",
            ["so", "because", "although"],
            Basic,
        ),
        ConjunctionTemplate::new(
            "We took a taxi",
            "we were running late",
            "because",
            ["so", "but", "although"],
            Intermediate,
        ),
        ConjunctionTemplate::new(
            "it was very expensive",
            "he bought the watch anyway",
            "Although",
            ["Because", "So", "But"],
            Intermediate,
        ),
        ConjunctionTemplate::new(
            "the forecast promised sunshine",
            "the storm lasted all afternoon",
            "Although",
            ["Because", "So", "But"],
            Advanced,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_validates() {
        // Exercise the fallible path directly so a data mistake fails a
        // test before it can abort a process.
        let bank = build_bank();
        assert!(!bank.agents().is_empty());
        assert!(!bank.scenarios().is_empty());
        assert!(!bank.templates().is_empty());
    }

    #[test]
    fn test_every_verb_category_has_targets() {
        let bank = bank();
        for verb in bank.verbs() {
            assert!(
                bank.targets()
                    .iter()
                    .any(|t| t.category == verb.object_category),
                "verb {} has no matching targets",
                verb.base_form
            );
        }
    }

    #[test]
    fn test_both_tiers_are_populated() {
        let bank = bank();
        assert!(bank.targets().iter().any(|t| t.tier.matches_level(1)));
        assert!(bank.targets().iter().any(|t| t.tier.matches_level(2)));
        assert!(bank.scenarios().iter().any(|s| s.tier.matches_level(1)));
        assert!(bank.scenarios().iter().any(|s| s.tier.matches_level(2)));
    }

    #[test]
    fn test_scenario_subjects_have_pronouns() {
        // Every builtin subject should resolve through the lookup table
        // rather than the masculine default.
        let known = |s: &str| crate::conjunction::subject_pronoun(s) != "he" || s == "Tom" || s == "My brother";
        for scenario in bank().scenarios() {
            for subject in &scenario.subjects {
                assert!(known(subject), "subject {subject} falls back to the default pronoun");
            }
        }
    }
}
