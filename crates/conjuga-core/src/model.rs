//! Core data model types for conjuga.
//!
//! Word senses, conjugation tables and the example records a quiz is drawn
//! from, plus the raw shapes providers hand over before validation. Nothing
//! in this module performs I/O.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::taxonomy::{Person, Tense, TenseGroup};

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Part of speech of a word sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Other,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartOfSpeech::Verb => write!(f, "verb"),
            PartOfSpeech::Noun => write!(f, "noun"),
            PartOfSpeech::Other => write!(f, "other"),
        }
    }
}

/// The meaning of a sense.
///
/// Inflected-form entries carry the glosses of their lemma as separate
/// constituents rather than one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Meaning {
    Text(String),
    Constituents(Vec<String>),
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meaning::Text(text) => f.write_str(text),
            Meaning::Constituents(parts) => f.write_str(&parts.join("; ")),
        }
    }
}

/// One sense of a word. Equal iff all five fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definition {
    pub meaning: Meaning,
    pub part_of_speech: PartOfSpeech,
    /// Lemma this form inflects, for conjugated forms.
    #[serde(default)]
    pub stem: Option<String>,
    #[serde(default)]
    pub person: Option<Person>,
    /// Tense name as reported by the provider (e.g. "Present").
    #[serde(default)]
    pub tense: Option<String>,
}

impl Definition {
    /// A plain gloss such as "to speak" or "house".
    pub fn gloss(meaning: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            meaning: Meaning::Text(meaning.into()),
            part_of_speech,
            stem: None,
            person: None,
            tense: None,
        }
    }

    /// A sense describing a conjugated form of `stem`.
    pub fn inflection(
        meanings: Vec<String>,
        stem: impl Into<String>,
        person: Option<Person>,
        tense: impl Into<String>,
    ) -> Self {
        Self {
            meaning: Meaning::Constituents(meanings),
            part_of_speech: PartOfSpeech::Verb,
            stem: Some(stem.into()),
            person,
            tense: Some(tense.into()),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.part_of_speech, self.meaning)?;
        if let Some(stem) = &self.stem {
            write!(f, " [")?;
            if let Some(tense) = &self.tense {
                write!(f, "{tense}, ")?;
            }
            if let Some(person) = &self.person {
                write!(f, "{person}, ")?;
            }
            write!(f, "of {stem}]")?;
        }
        Ok(())
    }
}

/// A looked-up word with its deduplicated senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub surface_form: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Word {
    pub fn new(surface_form: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            definitions: Vec::new(),
        }
    }

    /// Append a sense unless a structurally equal one is already present.
    pub fn push_definition(&mut self, definition: Definition) -> bool {
        if self.definitions.contains(&definition) {
            return false;
        }
        self.definitions.push(definition);
        true
    }

    /// Build a word from a provider's raw sense list, in order, without duplicates.
    pub fn from_raw(surface_form: impl Into<String>, senses: &[RawSense]) -> Self {
        let mut word = Word::new(surface_form);
        for sense in senses {
            word.push_definition(sense.to_definition());
        }
        word
    }
}

/// A sense as delivered by a provider, before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawSense {
    /// A dictionary gloss. Without an explicit `pos`, glosses starting with
    /// "to " are verbs and everything else is a noun.
    Gloss {
        text: String,
        #[serde(default)]
        pos: Option<String>,
    },
    /// "<tense> <person> conjugation of <stem>", with the lemma's glosses.
    Inflection {
        tense: String,
        person: String,
        stem: String,
        #[serde(default)]
        meanings: Vec<String>,
    },
}

impl RawSense {
    pub fn to_definition(&self) -> Definition {
        match self {
            RawSense::Gloss { text, pos } => {
                let text = text.trim();
                let part_of_speech = match pos.as_deref().map(str::to_lowercase) {
                    Some(p) if p == "verb" => PartOfSpeech::Verb,
                    Some(p) if p == "noun" => PartOfSpeech::Noun,
                    Some(_) => PartOfSpeech::Other,
                    None if text.starts_with("to ") => PartOfSpeech::Verb,
                    None => PartOfSpeech::Noun,
                };
                Definition::gloss(text, part_of_speech)
            }
            RawSense::Inflection {
                tense,
                person,
                stem,
                meanings,
            } => {
                let parsed = person.parse::<Person>().ok();
                if parsed.is_none() {
                    tracing::debug!("unrecognised person '{person}' in sense of '{stem}'");
                }
                Definition::inflection(
                    meanings.iter().map(|m| m.trim().to_string()).collect(),
                    stem.trim(),
                    parsed,
                    tense.trim(),
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Conjugation tables
// ---------------------------------------------------------------------------

/// Conjugated forms of one tense, keyed by person.
pub type PersonForms = BTreeMap<Person, String>;

/// Tenses of one group.
pub type TenseForms = BTreeMap<Tense, PersonForms>;

/// A verb's conjugations: tense group → tense → person → form.
///
/// Every group present is complete. Groups the provider did not supply are
/// absent rather than filled with placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConjugationTable {
    groups: BTreeMap<TenseGroup, TenseForms>,
}

/// A conjugation chart as delivered by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConjugations {
    #[serde(default)]
    pub groups: Vec<RawTenseGroup>,
}

/// One chart of a tense group: a row per person, a column per tense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTenseGroup {
    pub group: String,
    #[serde(default)]
    pub rows: Vec<RawPersonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPersonRow {
    pub person: String,
    #[serde(default)]
    pub forms: Vec<String>,
}

impl ConjugationTable {
    /// Validate a raw chart against the taxonomy and build the nested map.
    pub fn from_raw(raw: &RawConjugations) -> Result<Self, ProviderError> {
        let mut groups = BTreeMap::new();

        for raw_group in &raw.groups {
            let group: TenseGroup = raw_group
                .group
                .parse()
                .map_err(ProviderError::MalformedTable)?;
            if groups.contains_key(&group) {
                return Err(ProviderError::MalformedTable(format!(
                    "tense group {group} appears twice"
                )));
            }
            groups.insert(group, parse_group(group, &raw_group.rows)?);
        }

        Ok(Self { groups })
    }

    /// Forms of a single tense.
    pub fn get(&self, group: TenseGroup, tense: Tense) -> Option<&PersonForms> {
        self.groups.get(&group).and_then(|tenses| tenses.get(&tense))
    }

    /// A single conjugated form.
    pub fn form(&self, group: TenseGroup, tense: Tense, person: Person) -> Option<&str> {
        self.get(group, tense)
            .and_then(|forms| forms.get(&person))
            .map(String::as_str)
    }

    /// The first tense of `group` in chart order, if the group is present.
    pub fn first_tense(&self, group: TenseGroup) -> Option<(Tense, &PersonForms)> {
        let tenses = self.groups.get(&group)?;
        group
            .tenses()
            .iter()
            .find_map(|tense| tenses.get(tense).map(|forms| (*tense, forms)))
    }

    pub fn group(&self, group: TenseGroup) -> Option<&TenseForms> {
        self.groups.get(&group)
    }

    pub fn contains_group(&self, group: TenseGroup) -> bool {
        self.groups.contains_key(&group)
    }

    /// Groups present, in taxonomy order.
    pub fn groups(&self) -> impl Iterator<Item = TenseGroup> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn parse_group(group: TenseGroup, rows: &[RawPersonRow]) -> Result<TenseForms, ProviderError> {
    let tenses = group.tenses();
    if rows.len() != Person::ALL.len() {
        return Err(ProviderError::MalformedTable(format!(
            "{group}: expected {} person rows, got {}",
            Person::ALL.len(),
            rows.len()
        )));
    }

    let mut forms: TenseForms = BTreeMap::new();
    for row in rows {
        let person: Person = row.person.parse().map_err(ProviderError::MalformedTable)?;
        if row.forms.len() != tenses.len() {
            return Err(ProviderError::MalformedTable(format!(
                "{group}: row '{}' has {} forms, expected {}",
                row.person,
                row.forms.len(),
                tenses.len()
            )));
        }
        for (tense, form) in tenses.iter().zip(&row.forms) {
            let previous = forms
                .entry(*tense)
                .or_default()
                .insert(person, form.trim().to_string());
            if previous.is_some() {
                return Err(ProviderError::MalformedTable(format!(
                    "{group}: person {person} appears twice"
                )));
            }
        }
    }

    Ok(forms)
}

// ---------------------------------------------------------------------------
// Example sentences
// ---------------------------------------------------------------------------

/// A sentence and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// Sentence in the language being learned.
    pub source: String,
    /// Translation shown as the hint.
    pub target: String,
}

impl SentencePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// One cloze exercise: a sentence pair and the form to blank out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub source_sentence: String,
    pub target_sentence: String,
    pub word_to_mask: String,
}

impl ExampleRecord {
    pub fn new(pair: SentencePair, word_to_mask: impl Into<String>) -> Self {
        Self {
            source_sentence: pair.source,
            target_sentence: pair.target,
            word_to_mask: word_to_mask.into(),
        }
    }

    /// Whether `word_to_mask` occurs verbatim in the source sentence.
    pub fn is_maskable(&self) -> bool {
        self.source_sentence.contains(&self.word_to_mask)
    }
}
