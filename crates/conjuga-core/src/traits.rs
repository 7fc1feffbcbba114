//! Core trait definitions for lexical data providers and interactive prompts.
//!
//! Providers are implemented by the `conjuga-providers` crate; the console
//! prompter lives in the CLI.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::{ConjugationTable, SentencePair, Word};

// ---------------------------------------------------------------------------
// Lexical provider trait
// ---------------------------------------------------------------------------

/// Source of definitions, conjugation tables and example sentences.
#[async_trait]
pub trait LexicalProvider: Send + Sync {
    /// Human-readable provider name (e.g. "http").
    fn name(&self) -> &str;

    /// Look up the senses of a word. Unknown words yield an empty definition list.
    async fn fetch_definitions(&self, word: &str) -> Result<Word, ProviderError>;

    /// Look up a verb's conjugation table. The table may be partial or empty.
    async fn fetch_conjugations(&self, word: &str) -> Result<ConjugationTable, ProviderError>;

    /// Example sentences containing this exact word form. May be empty.
    async fn fetch_example_sentences(
        &self,
        word_form: &str,
    ) -> Result<Vec<SentencePair>, ProviderError>;
}

// ---------------------------------------------------------------------------
// Prompter trait
// ---------------------------------------------------------------------------

/// Text prompt/response transport used by the quiz.
#[async_trait]
pub trait Prompter: Send {
    /// Display a block of text.
    async fn show(&mut self, text: &str) -> anyhow::Result<()>;

    /// Ask a question and wait for one line of input.
    ///
    /// Returns `None` when the input is exhausted.
    async fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>>;
}
