//! The word bank: closed, curated lexical tables the generators draw from.
//!
//! A [`WordBank`] is constructed once at startup through
//! [`WordBankBuilder`], validated, and never mutated afterwards. Generators
//! borrow it immutably, so any number of threads can share one bank without
//! locking. Validation failures are configuration errors and surface at
//! construction time; question generation itself never fails.

use crate::grammar::{Number, Person, Tense, WordClass};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Uniform draw from a non-empty slice.
///
/// Bank tables are validated non-empty at construction, and the generators
/// only call this after widening any empty filtered pool back to a full
/// table, so the index is always in range.
pub(crate) fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Errors raised while constructing a word bank.
///
/// These surface at startup, never during question generation.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("empty table: {0}")]
    EmptyTable(&'static str),

    #[error("{table} entry \"{entry}\" has an empty {field}")]
    EmptyField {
        table: &'static str,
        field: &'static str,
        entry: String,
    },

    #[error("no time markers for the {} tense", .0.name())]
    NoTimeMarkers(Tense),

    #[error("scenario \"{scenario}\" has an empty {pool} pool")]
    EmptyPool {
        scenario: String,
        pool: &'static str,
    },

    #[error("connector template \"{0}\" needs at least 3 distinct distractors")]
    TooFewDistractors(String),

    #[error("connector template \"{0}\" lists its answer among the distractors")]
    AnswerInDistractors(String),

    #[error("no fallback targets: at least one target of category \"text\" is required")]
    NoFallbackTargets,

    #[error("no conjunction material: provide at least one scenario or template")]
    NoConjunctionMaterial,
}

/// Difficulty tier partitioning lexical data into easier and harder pools.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub fn rank(&self) -> u8 {
        match self {
            DifficultyTier::Basic => 1,
            DifficultyTier::Intermediate => 2,
            DifficultyTier::Advanced => 3,
        }
    }

    /// Whether entries of this tier serve a request at `level`.
    ///
    /// Level 1 draws from the basic tier only; level 2 and above draw from
    /// the intermediate and advanced tiers.
    pub fn matches_level(&self, level: u32) -> bool {
        if level <= 1 {
            self.rank() == 1
        } else {
            self.rank() >= 2
        }
    }
}

/// Semantic category linking verbs to the targets they can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCategory {
    Text,
    Food,
    Structure,
    Song,
    Artwork,
    Machine,
    Room,
}

impl TargetCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TargetCategory::Text => "text",
            TargetCategory::Food => "food",
            TargetCategory::Structure => "structure",
            TargetCategory::Song => "song",
            TargetCategory::Artwork => "artwork",
            TargetCategory::Machine => "machine",
            TargetCategory::Room => "room",
        }
    }
}

/// The doer of a passive sentence ("by ...").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub word: String,
    pub person: Person,
    pub number: Number,
    pub class: WordClass,
}

impl Agent {
    pub fn new(word: impl Into<String>, person: Person, number: Number, class: WordClass) -> Self {
        Self {
            word: word.into(),
            person,
            number,
            class,
        }
    }
}

/// A transitive verb with its pre-stored past participle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub base_form: String,
    pub past_participle: String,
    /// Category of targets this verb can act on.
    pub object_category: TargetCategory,
}

impl Verb {
    pub fn new(
        base_form: impl Into<String>,
        past_participle: impl Into<String>,
        object_category: TargetCategory,
    ) -> Self {
        Self {
            base_form: base_form.into(),
            past_participle: past_participle.into(),
            object_category,
        }
    }
}

/// The patient of a passive sentence; becomes its grammatical subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub word: String,
    pub person: Person,
    pub number: Number,
    pub category: TargetCategory,
    pub tier: DifficultyTier,
}

impl Target {
    pub fn new(
        word: impl Into<String>,
        person: Person,
        number: Number,
        category: TargetCategory,
        tier: DifficultyTier,
    ) -> Self {
        Self {
            word: word.into(),
            person,
            number,
            category,
            tier,
        }
    }
}

/// Tense-scoped adverbial time expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMarkers {
    pub past: Vec<String>,
    pub present: Vec<String>,
}

impl TimeMarkers {
    pub fn for_tense(&self, tense: Tense) -> &[String] {
        match tense {
            Tense::Past => &self.past,
            Tense::Present => &self.present,
        }
    }
}

/// An effect clause of a scenario.
///
/// `needs_subject` is stated by the template author: `true` means the
/// clause is a bare predicate and the generator prepends the derived
/// subject pronoun; `false` means the clause already names its subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub text: String,
    pub needs_subject: bool,
}

impl Clause {
    /// A clause that already carries its own subject.
    pub fn full(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            needs_subject: false,
        }
    }

    /// A bare predicate; the generator supplies the subject pronoun.
    pub fn predicate(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            needs_subject: true,
        }
    }
}

/// A cause/effect/contrast narrative skeleton for connector questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Sentence-initial subject phrases; any subject pairs with any cause.
    pub subjects: Vec<String>,
    /// Bare predicates that attach to a chosen subject.
    pub causes: Vec<String>,
    /// Effects that follow logically from the cause.
    pub effects_logical: Vec<Clause>,
    /// Effects that run against the cause.
    pub effects_contrastive: Vec<Clause>,
    pub tier: DifficultyTier,
}

impl Scenario {
    pub fn new(name: impl Into<String>, tier: DifficultyTier) -> Self {
        Self {
            name: name.into(),
            subjects: Vec::new(),
            causes: Vec::new(),
            effects_logical: Vec::new(),
            effects_contrastive: Vec::new(),
            tier,
        }
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_causes<I, S>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_logical_effects(mut self, effects: Vec<Clause>) -> Self {
        self.effects_logical = effects;
        self
    }

    pub fn with_contrastive_effects(mut self, effects: Vec<Clause>) -> Self {
        self.effects_contrastive = effects;
        self
    }
}

/// A pre-authored two-clause connector exercise.
///
/// Blank placement is encoded by the connector's case: a capitalized
/// connector sits sentence-initial, a lower-case one mid-sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjunctionTemplate {
    pub clause1: String,
    pub clause2: String,
    pub correct_connector: String,
    pub distractor_connectors: Vec<String>,
    pub tier: DifficultyTier,
}

impl ConjunctionTemplate {
    pub fn new<I, S>(
        clause1: impl Into<String>,
        clause2: impl Into<String>,
        correct_connector: impl Into<String>,
        distractor_connectors: I,
        tier: DifficultyTier,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clause1: clause1.into(),
            clause2: clause2.into(),
            correct_connector: correct_connector.into(),
            distractor_connectors: distractor_connectors.into_iter().map(Into::into).collect(),
            tier,
        }
    }

    /// Whether the blank sits at the start of the sentence.
    pub fn sentence_initial(&self) -> bool {
        self.correct_connector
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    }
}

/// The complete, immutable lexical configuration of the engine.
///
/// Fields are private so a `WordBank` in hand always satisfies the
/// invariants [`WordBankBuilder::build`] checked: the agent, verb and
/// target tables are non-empty, both time-marker sets are populated, a
/// `text`-category fallback target exists, and at least one of the
/// scenario/template pools is available. The bank serializes for
/// inspection but does not deserialize; reconstruction goes through the
/// validating builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordBank {
    agents: Vec<Agent>,
    verbs: Vec<Verb>,
    targets: Vec<Target>,
    time_markers: TimeMarkers,
    scenarios: Vec<Scenario>,
    templates: Vec<ConjunctionTemplate>,
}

impl WordBank {
    pub fn builder() -> WordBankBuilder {
        WordBankBuilder::default()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn time_markers(&self) -> &TimeMarkers {
        &self.time_markers
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn templates(&self) -> &[ConjunctionTemplate] {
        &self.templates
    }
}

/// Step-by-step construction of a [`WordBank`], validated on `build`.
#[derive(Debug, Clone, Default)]
pub struct WordBankBuilder {
    agents: Vec<Agent>,
    verbs: Vec<Verb>,
    targets: Vec<Target>,
    past_markers: Vec<String>,
    present_markers: Vec<String>,
    scenarios: Vec<Scenario>,
    templates: Vec<ConjunctionTemplate>,
}

impl WordBankBuilder {
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = agents;
        self
    }

    pub fn verbs(mut self, verbs: Vec<Verb>) -> Self {
        self.verbs = verbs;
        self
    }

    pub fn targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = targets;
        self
    }

    pub fn past_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.past_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn present_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.present_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn templates(mut self, templates: Vec<ConjunctionTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Validate the assembled tables and produce an immutable bank.
    pub fn build(self) -> Result<WordBank, LexiconError> {
        if self.agents.is_empty() {
            return Err(LexiconError::EmptyTable("agents"));
        }
        if self.verbs.is_empty() {
            return Err(LexiconError::EmptyTable("verbs"));
        }
        if self.targets.is_empty() {
            return Err(LexiconError::EmptyTable("targets"));
        }

        for agent in &self.agents {
            require("agents", "word", &agent.word, &agent.word)?;
        }
        for verb in &self.verbs {
            require("verbs", "base form", &verb.base_form, &verb.base_form)?;
            require("verbs", "past participle", &verb.past_participle, &verb.base_form)?;
        }
        for target in &self.targets {
            require("targets", "word", &target.word, &target.word)?;
        }

        if self.past_markers.is_empty() {
            return Err(LexiconError::NoTimeMarkers(Tense::Past));
        }
        if self.present_markers.is_empty() {
            return Err(LexiconError::NoTimeMarkers(Tense::Present));
        }
        for marker in self.past_markers.iter().chain(&self.present_markers) {
            require("time markers", "marker", marker, marker)?;
        }

        if !self
            .targets
            .iter()
            .any(|t| t.category == TargetCategory::Text)
        {
            return Err(LexiconError::NoFallbackTargets);
        }

        for scenario in &self.scenarios {
            require("scenarios", "name", &scenario.name, &scenario.name)?;
            let pools: [(&'static str, bool); 4] = [
                ("subject", scenario.subjects.is_empty()),
                ("cause", scenario.causes.is_empty()),
                ("logical effect", scenario.effects_logical.is_empty()),
                ("contrastive effect", scenario.effects_contrastive.is_empty()),
            ];
            for (pool, empty) in pools {
                if empty {
                    return Err(LexiconError::EmptyPool {
                        scenario: scenario.name.clone(),
                        pool,
                    });
                }
            }
            for subject in &scenario.subjects {
                require("scenarios", "subject", subject, &scenario.name)?;
            }
            for cause in &scenario.causes {
                require("scenarios", "cause", cause, &scenario.name)?;
            }
            for clause in scenario
                .effects_logical
                .iter()
                .chain(&scenario.effects_contrastive)
            {
                require("scenarios", "effect clause", &clause.text, &scenario.name)?;
            }
        }

        for template in &self.templates {
            let label = &template.correct_connector;
            require("templates", "first clause", &template.clause1, label)?;
            require("templates", "second clause", &template.clause2, label)?;
            require("templates", "connector", &template.correct_connector, label)?;

            let mut distinct: Vec<&str> = Vec::new();
            for distractor in &template.distractor_connectors {
                require("templates", "distractor", distractor, label)?;
                if distractor == &template.correct_connector {
                    return Err(LexiconError::AnswerInDistractors(label.clone()));
                }
                if !distinct.contains(&distractor.as_str()) {
                    distinct.push(distractor);
                }
            }
            if distinct.len() < 3 {
                return Err(LexiconError::TooFewDistractors(label.clone()));
            }
        }

        if self.scenarios.is_empty() && self.templates.is_empty() {
            return Err(LexiconError::NoConjunctionMaterial);
        }

        // A verb category without targets is recoverable at generation time
        // (default-verb fallback), so it only warrants a diagnostic here.
        for verb in &self.verbs {
            if !self
                .targets
                .iter()
                .any(|t| t.category == verb.object_category)
            {
                warn!(
                    verb = %verb.base_form,
                    category = verb.object_category.name(),
                    "verb category has no matching targets; generation will fall back"
                );
            }
        }

        Ok(WordBank {
            agents: self.agents,
            verbs: self.verbs,
            targets: self.targets,
            time_markers: TimeMarkers {
                past: self.past_markers,
                present: self.present_markers,
            },
            scenarios: self.scenarios,
            templates: self.templates,
        })
    }
}

fn require(
    table: &'static str,
    field: &'static str,
    value: &str,
    entry: &str,
) -> Result<(), LexiconError> {
    if value.trim().is_empty() {
        Err(LexiconError::EmptyField {
            table,
            field,
            entry: entry.to_string(),
        })
    } else {
        Ok(())
    }
}
