//! Grammatical primitives: person, number, tense, and the agreement and
//! surface-form rules built on top of them.
//!
//! Everything here is a total function over a closed domain. The copula
//! table and the pronoun case table are the whole of the "morphology" this
//! engine needs; all other inflected forms are pre-stored in the word bank.

use serde::{Deserialize, Serialize};

/// Grammatical person of a noun phrase.
///
/// Only first and third person occur in the lexicon. Second person agrees
/// like a plural for every copula form, so it never needs its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Third,
}

impl Person {
    pub fn all() -> [Person; 2] {
        [Person::First, Person::Third]
    }
}

/// Grammatical number of a noun phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn all() -> [Number; 2] {
        [Number::Singular, Number::Plural]
    }

    /// The other number. Distractor construction flips agreement along
    /// this axis.
    pub fn opposite(&self) -> Number {
        match self {
            Number::Singular => Number::Plural,
            Number::Plural => Number::Singular,
        }
    }
}

/// Tense of an assembled sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Past,
    Present,
}

impl Tense {
    pub fn all() -> [Tense; 2] {
        [Tense::Past, Tense::Present]
    }

    pub fn opposite(&self) -> Tense {
        match self {
            Tense::Past => Tense::Present,
            Tense::Present => Tense::Past,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
        }
    }
}

/// Word class of a lexicon entry, deciding how it is rendered in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Pronoun,
    CommonNoun,
    ProperNoun,
}

/// Syntactic role a word plays in an assembled sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Subject,
    Object,
}

/// Resolve the copula ("be") form agreeing with a subject's person and
/// number in the given tense.
pub fn copula(person: Person, number: Number, tense: Tense) -> &'static str {
    match (tense, number, person) {
        (Tense::Past, Number::Singular, _) => "was",
        (Tense::Past, Number::Plural, _) => "were",
        (Tense::Present, Number::Singular, Person::First) => "am",
        (Tense::Present, Number::Singular, Person::Third) => "is",
        (Tense::Present, Number::Plural, _) => "are",
    }
}

/// Object-case form for a subject pronoun, if it has one in the table.
fn object_case(pronoun: &str) -> Option<&'static str> {
    match pronoun {
        "I" => Some("me"),
        "He" => Some("him"),
        "She" => Some("her"),
        "It" => Some("it"),
        "We" => Some("us"),
        "They" => Some("them"),
        "You" => Some("you"),
        _ => None,
    }
}

/// Render a lexicon word into surface text for the given role.
///
/// Pronouns are case-mapped as objects and lower-cased as mid-sentence
/// subjects (except "I"); common nouns are lower-cased wholesale; proper
/// nouns pass through untouched. Pronouns absent from the case table also
/// pass through untouched.
pub fn surface_form(word: &str, class: WordClass, role: Role) -> String {
    match (class, role) {
        (WordClass::Pronoun, Role::Object) => object_case(word)
            .map(str::to_string)
            .unwrap_or_else(|| word.to_string()),
        (WordClass::Pronoun, Role::Subject) => {
            if word == "I" {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        }
        (WordClass::CommonNoun, _) => word.to_lowercase(),
        (WordClass::ProperNoun, _) => word.to_string(),
    }
}

/// Upper-case the first character of a phrase for sentence-initial position.
pub fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
