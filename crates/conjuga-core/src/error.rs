//! Error types.
//!
//! `ProviderError` covers failures when talking to a lexical data provider.
//! It is defined here rather than in `conjuga-providers` so the corpus
//! builder can record why a verb was skipped without string matching.
//! `DrillError` covers caller mistakes and conditions that must stop a drill.

use thiserror::Error;

/// Errors that can occur when fetching lexical data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The provider returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A conjugation table violated the taxonomy shape.
    #[error("malformed conjugation table: {0}")]
    MalformedTable(String),
}

impl ProviderError {
    /// Returns `true` if the provider answered but the data was unusable.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            ProviderError::MalformedResponse(_) | ProviderError::MalformedTable(_)
        )
    }
}

/// Errors that abort a drill instead of skipping a single verb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// No example records were produced, so there is nothing to quiz.
    #[error("no example sentences were found for the selected verbs and tenses")]
    EmptyCorpus,

    /// A numeric selection fell outside its allowed range.
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRangeSelection {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A selection could not be parsed at all.
    #[error("invalid selection: '{0}'")]
    InvalidSelection(String),

    /// The vocabulary has fewer than two verbs, leaving no index to clamp into.
    #[error("vocabulary must contain at least 2 verbs, found {0}")]
    VocabularyTooSmall(usize),
}
