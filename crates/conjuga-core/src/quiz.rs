//! Cloze quiz session.
//!
//! The session alternates between drawing a record and grading an answer
//! until the learner types `end`.

use rand::Rng;

use crate::corpus::Corpus;
use crate::model::ExampleRecord;
use crate::traits::{LexicalProvider, Prompter};

/// Placeholder substituted for the masked word.
pub const BLANK: &str = " ___ ";

/// Raw answer that ends the session.
pub const END_COMMAND: &str = "end";

/// Characters deleted from answers before grading.
pub const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', ':', '!', '?', ';', '¿', '¡'];

/// Delete every stripped punctuation character. Whitespace is left alone.
pub fn clean_answer(answer: &str) -> String {
    answer
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Replace the first case-sensitive occurrence of `word` with [`BLANK`].
pub fn mask_first(sentence: &str, word: &str) -> Option<String> {
    if word.is_empty() || !sentence.contains(word) {
        return None;
    }
    Some(sentence.replacen(word, BLANK, 1))
}

/// Case-insensitive comparison of a cleaned answer with the expected form.
pub fn grade(answer: &str, expected: &str) -> bool {
    clean_answer(answer).to_lowercase() == expected.to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Ended,
}

/// A record ready to be shown to the learner.
#[derive(Debug, Clone)]
pub struct QuizPrompt<'c> {
    pub record: &'c ExampleRecord,
    /// The source sentence with the word blanked, or unchanged when the word
    /// was not found.
    pub masked_sentence: String,
    pub masked: bool,
}

impl QuizPrompt<'_> {
    /// Text presented before asking for an answer.
    pub fn render(&self) -> String {
        format!(
            "\n\n{}\n{}",
            self.record.target_sentence, self.masked_sentence
        )
    }
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Ended,
    Graded { correct: bool, expected: String },
}

impl TurnOutcome {
    /// Feedback line shown to the learner, if any.
    pub fn feedback(&self) -> Option<String> {
        match self {
            TurnOutcome::Ended => None,
            TurnOutcome::Graded { correct: true, .. } => Some("CORRECT!".to_string()),
            TurnOutcome::Graded {
                correct: false,
                expected,
            } => Some(format!("INCORRECT! the answer was {expected}")),
        }
    }
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub answered: u32,
    pub correct: u32,
}

/// Quiz over a corpus, sampling records with replacement.
pub struct QuizSession<'c, R> {
    corpus: &'c Corpus,
    rng: R,
    state: SessionState,
    summary: SessionSummary,
}

impl<'c, R: Rng> QuizSession<'c, R> {
    pub fn new(corpus: &'c Corpus, rng: R) -> Self {
        Self {
            corpus,
            rng,
            state: SessionState::Prompting,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Draw the next record. Returns `None` once the session has ended.
    pub fn next_prompt(&mut self) -> Option<QuizPrompt<'c>> {
        if self.state == SessionState::Ended {
            return None;
        }

        let corpus: &'c Corpus = self.corpus;
        let record = corpus.choose(&mut self.rng);
        let (masked_sentence, masked) =
            match mask_first(&record.source_sentence, &record.word_to_mask) {
                Some(sentence) => (sentence, true),
                None => {
                    tracing::warn!(
                        word = %record.word_to_mask,
                        sentence = %record.source_sentence,
                        "masked word not found in example sentence"
                    );
                    (record.source_sentence.clone(), false)
                }
            };

        Some(QuizPrompt {
            record,
            masked_sentence,
            masked,
        })
    }

    /// Grade an answer, or end the session on the literal `end`.
    pub fn submit(&mut self, prompt: &QuizPrompt<'_>, answer: &str) -> TurnOutcome {
        if answer == END_COMMAND {
            self.state = SessionState::Ended;
            return TurnOutcome::Ended;
        }

        let expected = &prompt.record.word_to_mask;
        let correct = grade(answer, expected);
        self.summary.answered += 1;
        if correct {
            self.summary.correct += 1;
        }
        TurnOutcome::Graded {
            correct,
            expected: expected.clone(),
        }
    }

    /// End the session without an answer (e.g. input closed).
    pub fn end(&mut self) {
        self.state = SessionState::Ended;
    }

    /// Run the prompt/answer loop until the learner ends it.
    ///
    /// When `word_info` is given, the masked word is looked up after grading
    /// and its definitions are displayed. Lookup failures never end the turn.
    pub async fn run(
        &mut self,
        prompter: &mut dyn Prompter,
        word_info: Option<&dyn LexicalProvider>,
    ) -> anyhow::Result<SessionSummary> {
        while let Some(prompt) = self.next_prompt() {
            prompter.show(&prompt.render()).await?;

            let Some(answer) = prompter.ask("Your answer: ").await? else {
                self.end();
                break;
            };

            let outcome = self.submit(&prompt, &answer);
            let Some(feedback) = outcome.feedback() else {
                break;
            };
            prompter.show(&feedback).await?;

            if let Some(provider) = word_info {
                show_word_info(prompter, provider, &prompt.record.word_to_mask).await?;
            }
        }

        Ok(self.summary)
    }
}

async fn show_word_info(
    prompter: &mut dyn Prompter,
    provider: &dyn LexicalProvider,
    word: &str,
) -> anyhow::Result<()> {
    match provider.fetch_definitions(word).await {
        Ok(info) if !info.definitions.is_empty() => {
            let mut text = format!("{}:", info.surface_form);
            for definition in &info.definitions {
                text.push_str(&format!("\n  - {definition}"));
            }
            prompter.show(&text).await
        }
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::warn!("word info lookup for '{word}' failed: {e}");
            Ok(())
        }
    }
}
