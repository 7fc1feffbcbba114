//! HTTP lexical service provider.
//!
//! Talks to a JSON service exposing three read-only resources:
//! `GET /conjugate/{word}`, `GET /translate/{word}` and `GET /examples/{form}`.
//! A 404 means the service has no data for the word.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use conjuga_core::error::ProviderError;
use conjuga_core::model::{ConjugationTable, RawConjugations, RawSense, SentencePair, Word};
use conjuga_core::traits::LexicalProvider;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Provider backed by a JSON lexical service.
pub struct HttpProvider {
    base_url: reqwest::Url,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        let base_url = reqwest::Url::parse(base)
            .map_err(|e| anyhow::anyhow!("invalid provider base_url '{base}': {e}"))?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "provider base_url '{base}' cannot carry a path"
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, resource: &str, word: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(resource).push(word.trim());
        }
        url
    }

    /// GET a resource; `Ok(None)` when the service has nothing for the word.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        word: &str,
    ) -> Result<Option<T>, ProviderError> {
        let url = self.endpoint(resource, word);
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                ProviderError::Unavailable(format!(
                    "lexical service not reachable at {}",
                    self.base_url
                ))
            } else {
                ProviderError::Unavailable(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status,
                message: body,
            });
        }

        let parsed = response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("{resource}/{word}: {e}")))?;
        Ok(Some(parsed))
    }
}

#[async_trait]
impl LexicalProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self))]
    async fn fetch_definitions(&self, word: &str) -> Result<Word, ProviderError> {
        let senses: Vec<RawSense> = self
            .get_json("translate", word)
            .await?
            .unwrap_or_default();
        Ok(Word::from_raw(word, &senses))
    }

    #[instrument(skip(self))]
    async fn fetch_conjugations(&self, word: &str) -> Result<ConjugationTable, ProviderError> {
        match self.get_json::<RawConjugations>("conjugate", word).await? {
            Some(raw) => ConjugationTable::from_raw(&raw),
            None => Ok(ConjugationTable::default()),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_example_sentences(
        &self,
        word_form: &str,
    ) -> Result<Vec<SentencePair>, ProviderError> {
        Ok(self
            .get_json("examples", word_form)
            .await?
            .unwrap_or_default())
    }
}
