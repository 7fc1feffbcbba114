//! Mock provider for testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use conjuga_core::error::ProviderError;
use conjuga_core::model::{ConjugationTable, SentencePair, Word};
use conjuga_core::traits::LexicalProvider;

/// A mock lexical provider for exercising the corpus builder and quiz
/// without a network.
///
/// Unknown words yield empty results. Words registered with
/// [`MockProvider::failing`] return [`ProviderError::Unavailable`] from
/// every method.
#[derive(Default)]
pub struct MockProvider {
    tables: HashMap<String, ConjugationTable>,
    words: HashMap<String, Word>,
    examples: HashMap<String, Vec<SentencePair>>,
    /// Generate a sentence for forms without explicit examples.
    one_example_per_form: bool,
    failing: HashSet<String>,
    call_count: AtomicU32,
    requested_forms: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, verb: &str, table: ConjugationTable) -> Self {
        self.tables.insert(verb.to_string(), table);
        self
    }

    pub fn with_word(mut self, word: Word) -> Self {
        self.words.insert(word.surface_form.clone(), word);
        self
    }

    pub fn with_examples(mut self, form: &str, examples: Vec<SentencePair>) -> Self {
        self.examples.insert(form.to_string(), examples);
        self
    }

    /// Answer every example request with one sentence containing the form.
    pub fn with_one_example_per_form(mut self) -> Self {
        self.one_example_per_form = true;
        self
    }

    pub fn failing(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    /// Get the number of calls made to this provider.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Forms passed to `fetch_example_sentences`, in call order.
    pub fn requested_forms(&self) -> Vec<String> {
        self.requested_forms
            .lock()
            .map(|forms| forms.clone())
            .unwrap_or_default()
    }

    fn check(&self, word: &str) -> Result<(), ProviderError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(word) {
            return Err(ProviderError::Unavailable(format!("mock failure for '{word}'")));
        }
        Ok(())
    }
}

#[async_trait]
impl LexicalProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_definitions(&self, word: &str) -> Result<Word, ProviderError> {
        self.check(word)?;
        Ok(self
            .words
            .get(word)
            .cloned()
            .unwrap_or_else(|| Word::new(word)))
    }

    async fn fetch_conjugations(&self, word: &str) -> Result<ConjugationTable, ProviderError> {
        self.check(word)?;
        Ok(self.tables.get(word).cloned().unwrap_or_default())
    }

    async fn fetch_example_sentences(
        &self,
        word_form: &str,
    ) -> Result<Vec<SentencePair>, ProviderError> {
        self.check(word_form)?;
        if let Ok(mut forms) = self.requested_forms.lock() {
            forms.push(word_form.to_string());
        }

        if let Some(examples) = self.examples.get(word_form) {
            return Ok(examples.clone());
        }
        if !self.one_example_per_form {
            return Ok(Vec::new());
        }
        Ok(vec![SentencePair::new(
            format!("Ellos dicen que {word_form} siempre."),
            format!("They say that ({word_form}) always."),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conjuga_core::model::{Definition, PartOfSpeech};

    #[tokio::test]
    async fn unknown_words_are_empty() {
        let provider = MockProvider::new();
        assert!(provider.fetch_conjugations("ser").await.unwrap().is_empty());
        assert!(provider
            .fetch_example_sentences("soy")
            .await
            .unwrap()
            .is_empty());
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.requested_forms(), vec!["soy".to_string()]);
    }

    #[tokio::test]
    async fn registered_data_and_failures() {
        let mut word = Word::new("casa");
        word.push_definition(Definition::gloss("house", PartOfSpeech::Noun));
        let provider = MockProvider::new()
            .with_word(word.clone())
            .with_examples("casa", vec![SentencePair::new("Mi casa.", "My house.")])
            .failing("roto");

        assert_eq!(provider.fetch_definitions("casa").await.unwrap(), word);
        assert_eq!(
            provider.fetch_example_sentences("casa").await.unwrap().len(),
            1
        );
        assert!(matches!(
            provider.fetch_conjugations("roto").await,
            Err(ProviderError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn one_example_per_form_contains_the_form() {
        let provider = MockProvider::new().with_one_example_per_form();
        let examples = provider.fetch_example_sentences("hablamos").await.unwrap();
        assert_eq!(examples.len(), 1);
        assert!(examples[0].source.contains("hablamos"));
    }
}
