//! Clause-connector cloze questions.
//!
//! Two variants share the option machinery: the dynamic variant synthesizes
//! sentences from cause/effect scenarios, the static variant fills
//! pre-authored two-clause templates. Each is total for a validated bank;
//! if its own pool is missing it hands the request to the other variant.

use crate::distractor;
use crate::grammar;
use crate::lexicon::{pick, Clause, ConjunctionTemplate, Scenario, WordBank};
use crate::question::{QuestionRecord, BLANK};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Connector patterns the dynamic generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorPattern {
    /// Additive result: "<cause>, so <effect>".
    So,
    /// Causal, mid-sentence: "<effect> because <cause>".
    Because,
    /// Contrastive: "<cause>, but <effect>".
    But,
    /// Concessive, sentence-initial: "Although <cause>, <effect>".
    Although,
}

impl ConnectorPattern {
    pub fn all() -> [ConnectorPattern; 4] {
        [
            ConnectorPattern::So,
            ConnectorPattern::Because,
            ConnectorPattern::But,
            ConnectorPattern::Although,
        ]
    }

    /// The connector filling the blank; capitalized when sentence-initial.
    pub fn connector(&self) -> &'static str {
        match self {
            ConnectorPattern::So => "so",
            ConnectorPattern::Because => "because",
            ConnectorPattern::But => "but",
            ConnectorPattern::Although => "Although",
        }
    }

    /// Fixed confusable connectors presented alongside the answer.
    pub fn confusables(&self) -> [&'static str; 3] {
        match self {
            ConnectorPattern::So => ["but", "because", "although"],
            ConnectorPattern::Because => ["so", "but", "although"],
            ConnectorPattern::But => ["so", "because", "although"],
            ConnectorPattern::Although => ["But", "Because", "So"],
        }
    }
}

/// Derive the anaphoric pronoun for a scenario subject.
///
/// Exact string lookup against the subject tokens the scenarios use;
/// unknown subjects fall back to "he" (the original behavior, kept as a
/// documented limitation).
pub fn subject_pronoun(subject: &str) -> &'static str {
    match subject {
        "It" | "The weather" | "The bus" | "The train" | "The soup" | "The steak" => "it",
        "Tom" | "My brother" | "My father" => "he",
        "Mary" | "My sister" | "My mother" => "she",
        "We" => "we",
        "They" | "The students" | "My parents" => "they",
        _ => "he",
    }
}

/// Render an effect clause, prepending the derived pronoun when the author
/// marked the clause as a bare predicate.
pub fn render_effect(clause: &Clause, pronoun: &str) -> String {
    if clause.needs_subject {
        format!("{pronoun} {}", clause.text)
    } else {
        clause.text.clone()
    }
}

/// Assemble a connector question from fixed selections.
///
/// `effect` must already be rendered (see [`render_effect`]). The blank is
/// sentence-initial only for the concessive pattern.
pub fn assemble(
    pattern: ConnectorPattern,
    subject: &str,
    pronoun: &str,
    cause: &str,
    effect: &str,
) -> String {
    match pattern {
        ConnectorPattern::So | ConnectorPattern::But => {
            format!("{subject} {cause}, {BLANK} {effect}.")
        }
        ConnectorPattern::Because => {
            format!("{} {BLANK} {pronoun} {cause}.", grammar::capitalize_first(effect))
        }
        ConnectorPattern::Although => format!("{BLANK} {subject} {cause}, {effect}."),
    }
}

/// Generate a scenario-driven connector question using the thread-local RNG.
pub fn generate_dynamic(bank: &WordBank, level: u32) -> QuestionRecord {
    generate_dynamic_with_rng(bank, level, &mut rand::thread_rng())
}

/// Scenario-driven generation with a specific RNG.
pub fn generate_dynamic_with_rng<R: Rng>(bank: &WordBank, level: u32, rng: &mut R) -> QuestionRecord {
    if bank.scenarios().is_empty() {
        debug!("no scenarios in bank, serving a template question instead");
        return generate_static_with_rng(bank, level, rng);
    }

    let pool: Vec<&Scenario> = bank
        .scenarios()
        .iter()
        .filter(|s| s.tier.matches_level(level))
        .collect();
    let pool = if pool.is_empty() {
        debug!(level, "no scenarios in requested tier, widening to full pool");
        bank.scenarios().iter().collect()
    } else {
        pool
    };
    let scenario = *pick(&pool, rng);

    let subject = pick(&scenario.subjects, rng);
    let pronoun = subject_pronoun(subject);
    let pattern = *pick(&ConnectorPattern::all(), rng);
    let cause = pick(&scenario.causes, rng);
    let effect_clause = match pattern {
        ConnectorPattern::So | ConnectorPattern::Because => pick(&scenario.effects_logical, rng),
        ConnectorPattern::But | ConnectorPattern::Although => {
            pick(&scenario.effects_contrastive, rng)
        }
    };
    let effect = render_effect(effect_clause, pronoun);

    let question = assemble(pattern, subject, pronoun, cause, &effect);
    let answer = pattern.connector();
    let options = distractor::build_options(answer, &pattern.confusables(), rng);

    QuestionRecord {
        question,
        options,
        answer: answer.to_string(),
    }
}

/// Generate a template-driven connector question using the thread-local RNG.
pub fn generate_static(bank: &WordBank, level: u32) -> QuestionRecord {
    generate_static_with_rng(bank, level, &mut rand::thread_rng())
}

/// Template-driven generation with a specific RNG.
pub fn generate_static_with_rng<R: Rng>(bank: &WordBank, level: u32, rng: &mut R) -> QuestionRecord {
    if bank.templates().is_empty() {
        debug!("no templates in bank, serving a scenario question instead");
        return generate_dynamic_with_rng(bank, level, rng);
    }

    let pool: Vec<&ConjunctionTemplate> = bank
        .templates()
        .iter()
        .filter(|t| t.tier.matches_level(level))
        .collect();
    let pool = if pool.is_empty() {
        debug!(level, "no templates in requested tier, widening to full pool");
        bank.templates().iter().collect()
    } else {
        pool
    };
    let template = *pick(&pool, rng);

    let question = if template.sentence_initial() {
        format!("{BLANK} {}, {}.", template.clause1, template.clause2)
    } else {
        format!("{}, {BLANK} {}.", template.clause1, template.clause2)
    };
    let options =
        distractor::build_options(&template.correct_connector, &template.distractor_connectors, rng);

    QuestionRecord {
        question,
        options,
        answer: template.correct_connector.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Number, Person, WordClass};
    use crate::lexicon::{Agent, DifficultyTier, Target, TargetCategory, Verb, WordBank};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assemble_so_fixed_example() {
        let effect = render_effect(&Clause::full("we stayed at home"), "it");
        assert_eq!(
            assemble(ConnectorPattern::So, "It", "it", "was raining hard", &effect),
            "It was raining hard, ____ we stayed at home."
        );
    }

    #[test]
    fn test_assemble_because_capitalizes_effect() {
        let effect = render_effect(&Clause::predicate("passed the test easily"), "he");
        assert_eq!(
            assemble(
                ConnectorPattern::Because,
                "Tom",
                "he",
                "studied hard for the exam",
                &effect
            ),
            "He passed the test easily ____ he studied hard for the exam."
        );
    }

    #[test]
    fn test_assemble_but() {
        let effect = render_effect(&Clause::full("we still went hiking"), "it");
        assert_eq!(
            assemble(ConnectorPattern::But, "It", "it", "was raining hard", &effect),
            "It was raining hard, ____ we still went hiking."
        );
    }

    #[test]
    fn test_assemble_although_blank_first() {
        let effect = render_effect(&Clause::predicate("failed the test"), "he");
        let question = assemble(
            ConnectorPattern::Although,
            "Tom",
            "he",
            "studied hard for the exam",
            &effect,
        );
        assert_eq!(question, "____ Tom studied hard for the exam, he failed the test.");
        assert!(question.starts_with(BLANK));
    }

    #[test]
    fn test_render_effect_flag() {
        assert_eq!(
            render_effect(&Clause::full("we stayed at home"), "she"),
            "we stayed at home"
        );
        assert_eq!(
            render_effect(&Clause::predicate("felt very tired"), "she"),
            "she felt very tired"
        );
    }

    #[test]
    fn test_subject_pronoun_lookup_and_default() {
        assert_eq!(subject_pronoun("It"), "it");
        assert_eq!(subject_pronoun("The bus"), "it");
        assert_eq!(subject_pronoun("Mary"), "she");
        assert_eq!(subject_pronoun("The students"), "they");
        // Unknown subjects take the masculine default.
        assert_eq!(subject_pronoun("Alex"), "he");
    }

    fn scenario_bank() -> WordBank {
        WordBank::builder()
            .agents(vec![Agent::new(
                "He",
                Person::Third,
                Number::Singular,
                WordClass::Pronoun,
            )])
            .verbs(vec![Verb::new("write", "written", TargetCategory::Text)])
            .targets(vec![Target::new(
                "the book",
                Person::Third,
                Number::Singular,
                TargetCategory::Text,
                DifficultyTier::Basic,
            )])
            .past_markers(["yesterday"])
            .present_markers(["every day"])
            .scenarios(vec![Scenario::new("weather_bad", DifficultyTier::Basic)
                .with_subjects(["It"])
                .with_causes(["was raining hard"])
                .with_logical_effects(vec![Clause::full("we stayed at home")])
                .with_contrastive_effects(vec![Clause::full("we still went hiking")])])
            .build()
            .expect("scenario bank should validate")
    }

    #[test]
    fn test_dynamic_records_are_well_formed() {
        let bank = scenario_bank();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let record = generate_dynamic_with_rng(&bank, 1, &mut rng);
            assert_eq!(record.options.len(), 4);
            assert_eq!(
                record
                    .options
                    .iter()
                    .filter(|o| **o == record.answer)
                    .count(),
                1
            );
            assert_eq!(record.question.matches(BLANK).count(), 1);
        }
    }

    #[test]
    fn test_dynamic_blank_placement_per_pattern() {
        let bank = scenario_bank();
        let mut rng = StdRng::seed_from_u64(33);
        let mut saw_although = false;
        for _ in 0..200 {
            let record = generate_dynamic_with_rng(&bank, 1, &mut rng);
            if record.answer == "Although" {
                saw_although = true;
                assert!(record.question.starts_with(BLANK));
            } else {
                assert!(!record.question.starts_with(BLANK));
            }
        }
        assert!(saw_although, "although pattern never drawn in 200 tries");
    }

    #[test]
    fn test_dynamic_options_come_from_confusable_set() {
        let bank = scenario_bank();
        let mut rng = StdRng::seed_from_u64(45);
        for _ in 0..100 {
            let record = generate_dynamic_with_rng(&bank, 1, &mut rng);
            if record.answer == "so" {
                for option in &record.options {
                    assert!(["so", "but", "because", "although"].contains(&option.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_static_blank_placement() {
        let bank = WordBank::builder()
            .agents(vec![Agent::new(
                "He",
                Person::Third,
                Number::Singular,
                WordClass::Pronoun,
            )])
            .verbs(vec![Verb::new("write", "written", TargetCategory::Text)])
            .targets(vec![Target::new(
                "the book",
                Person::Third,
                Number::Singular,
                TargetCategory::Text,
                DifficultyTier::Basic,
            )])
            .past_markers(["yesterday"])
            .present_markers(["every day"])
            .templates(vec![
                ConjunctionTemplate::new(
                    "I was tired",
                    "I went to bed early",
                    "so",
                    ["but", "because", "although"],
                    DifficultyTier::Basic,
                ),
                ConjunctionTemplate::new(
                    "it was very expensive",
                    "he bought the watch anyway",
                    "Although",
                    ["Because", "So", "But"],
                    DifficultyTier::Basic,
                ),
            ])
            .build()
            .expect("template bank should validate");

        let mut rng = StdRng::seed_from_u64(57);
        let mut saw_initial = false;
        let mut saw_mid = false;
        for _ in 0..100 {
            let record = generate_static_with_rng(&bank, 1, &mut rng);
            if record.answer == "Although" {
                saw_initial = true;
                assert_eq!(
                    record.question,
                    "____ it was very expensive, he bought the watch anyway."
                );
            } else {
                saw_mid = true;
                assert_eq!(record.question, "I was tired, ____ I went to bed early.");
            }
            assert_eq!(record.options.len(), 4);
        }
        assert!(saw_initial && saw_mid);
    }

    #[test]
    fn test_static_falls_back_to_dynamic_without_templates() {
        let bank = scenario_bank();
        let mut rng = StdRng::seed_from_u64(69);
        let record = generate_static_with_rng(&bank, 1, &mut rng);
        assert_eq!(record.question.matches(BLANK).count(), 1);
        assert_eq!(record.options.len(), 4);
    }
}
