//! Offline provider backed by a JSON lexicon file.
//!
//! The file holds the same shapes the HTTP service returns, keyed by word:
//!
//! ```json
//! {
//!   "conjugations": { "hablar": { "groups": [ ... ] } },
//!   "definitions":  { "hablo": [ { "kind": "gloss", "text": "I speak" } ] },
//!   "examples":     { "hablo": [ { "source": "...", "target": "..." } ] }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use conjuga_core::error::ProviderError;
use conjuga_core::model::{ConjugationTable, RawConjugations, RawSense, SentencePair, Word};
use conjuga_core::traits::LexicalProvider;

#[derive(Debug, Default, Deserialize)]
struct Lexicon {
    #[serde(default)]
    conjugations: HashMap<String, RawConjugations>,
    #[serde(default)]
    definitions: HashMap<String, Vec<RawSense>>,
    #[serde(default)]
    examples: HashMap<String, Vec<SentencePair>>,
}

/// Serves lexical data from a JSON file loaded up front.
#[derive(Debug)]
pub struct FixtureProvider {
    lexicon: Lexicon,
}

impl FixtureProvider {
    /// Load a lexicon file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read lexicon: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse lexicon: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        tracing::debug!(
            "lexicon has {} verbs, {} words, {} example forms",
            lexicon.conjugations.len(),
            lexicon.definitions.len(),
            lexicon.examples.len()
        );
        Ok(Self { lexicon })
    }
}

#[async_trait]
impl LexicalProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_definitions(&self, word: &str) -> Result<Word, ProviderError> {
        let senses = self
            .lexicon
            .definitions
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(Word::from_raw(word, senses))
    }

    async fn fetch_conjugations(&self, word: &str) -> Result<ConjugationTable, ProviderError> {
        match self.lexicon.conjugations.get(word) {
            Some(raw) => ConjugationTable::from_raw(raw),
            None => Ok(ConjugationTable::default()),
        }
    }

    async fn fetch_example_sentences(
        &self,
        word_form: &str,
    ) -> Result<Vec<SentencePair>, ProviderError> {
        Ok(self
            .lexicon
            .examples
            .get(word_form)
            .cloned()
            .unwrap_or_default())
    }
}
