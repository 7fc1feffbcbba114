//! Example corpus builder.
//!
//! Walks the sampled verbs one at a time, fetches each verb's conjugation
//! table and collects example sentences for every person of the first tense
//! in each requested group. A failing verb is skipped; it never aborts the
//! build.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DrillError, ProviderError};
use crate::model::ExampleRecord;
use crate::taxonomy::TenseGroup;
use crate::traits::LexicalProvider;
use crate::vocabulary::Vocabulary;

/// Why a sampled verb contributed nothing further to the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The sampled index is not in the vocabulary.
    UnknownVerbIndex(usize),
    /// The provider failed or returned unusable data.
    Provider(ProviderError),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnknownVerbIndex(index) => write!(f, "no verb at index {index}"),
            SkipReason::Provider(e) => write!(f, "{e}"),
        }
    }
}

/// A sampled verb whose processing stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedVerb {
    /// The verb, or its index when it could not be resolved.
    pub verb: String,
    pub reason: SkipReason,
}

/// Progress reporting trait.
pub trait BuildProgress: Send + Sync {
    fn on_verb_start(&self, verb: &str);
    fn on_verb_complete(&self, verb: &str, records: usize);
    fn on_verb_skipped(&self, skipped: &SkippedVerb);
    fn on_build_complete(&self, verbs: usize, records: usize, skipped: usize, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopProgress;

impl BuildProgress for NoopProgress {
    fn on_verb_start(&self, _: &str) {}
    fn on_verb_complete(&self, _: &str, _: usize) {}
    fn on_verb_skipped(&self, _: &SkippedVerb) {}
    fn on_build_complete(&self, _: usize, _: usize, _: usize, _: Duration) {}
}

/// Everything a build produced, including the verbs it had to skip.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    pub records: Vec<ExampleRecord>,
    pub skipped: Vec<SkippedVerb>,
}

impl CorpusReport {
    /// Turn the records into a quiz corpus, failing if there are none.
    pub fn into_corpus(self) -> Result<Corpus, DrillError> {
        Corpus::new(self.records)
    }
}

/// A non-empty set of example records.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<ExampleRecord>,
}

impl Corpus {
    pub fn new(records: Vec<ExampleRecord>) -> Result<Self, DrillError> {
        if records.is_empty() {
            return Err(DrillError::EmptyCorpus);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ExampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Uniformly pick one record, with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &ExampleRecord {
        // Never empty, so the fallback is unreachable.
        self.records.choose(rng).unwrap_or(&self.records[0])
    }
}

/// Assembles example records from sampled verbs.
pub struct CorpusBuilder<'a> {
    provider: &'a dyn LexicalProvider,
    progress: &'a dyn BuildProgress,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(provider: &'a dyn LexicalProvider) -> Self {
        Self {
            provider,
            progress: &NoopProgress,
        }
    }

    pub fn with_progress(mut self, progress: &'a dyn BuildProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Build records for the sampled verbs and requested tense groups.
    ///
    /// Verbs are processed strictly in order. Duplicated indices are
    /// processed again.
    pub async fn build(
        &self,
        verb_indices: &[usize],
        tense_groups: &[TenseGroup],
        vocabulary: &Vocabulary,
    ) -> CorpusReport {
        let start = Instant::now();
        let mut report = CorpusReport::default();

        for &index in verb_indices {
            let Some(verb) = vocabulary.get(index) else {
                self.skip(
                    &mut report,
                    SkippedVerb {
                        verb: format!("#{index}"),
                        reason: SkipReason::UnknownVerbIndex(index),
                    },
                );
                continue;
            };

            self.progress.on_verb_start(verb);
            let before = report.records.len();
            match self
                .collect_verb(verb, tense_groups, &mut report.records)
                .await
            {
                Ok(()) => {
                    let added = report.records.len() - before;
                    tracing::info!("collected {added} sentences for '{verb}'");
                    self.progress.on_verb_complete(verb, added);
                }
                Err(e) => self.skip(
                    &mut report,
                    SkippedVerb {
                        verb: verb.to_string(),
                        reason: SkipReason::Provider(e),
                    },
                ),
            }
        }

        self.progress.on_build_complete(
            verb_indices.len(),
            report.records.len(),
            report.skipped.len(),
            start.elapsed(),
        );
        report
    }

    /// Append records for one verb. Records pushed before a failure are kept.
    async fn collect_verb(
        &self,
        verb: &str,
        tense_groups: &[TenseGroup],
        records: &mut Vec<ExampleRecord>,
    ) -> Result<(), ProviderError> {
        let table = self.provider.fetch_conjugations(verb).await?;

        for &group in tense_groups {
            let Some((tense, forms)) = table.first_tense(group) else {
                tracing::debug!("'{verb}' has no {group} conjugations, skipping group");
                continue;
            };

            for (person, form) in forms {
                tracing::debug!("fetching examples for '{form}' ({group} {tense}, {person})");
                let pairs = self.provider.fetch_example_sentences(form).await?;
                records.extend(
                    pairs
                        .into_iter()
                        .map(|pair| ExampleRecord::new(pair, form.as_str())),
                );
            }
        }

        Ok(())
    }

    fn skip(&self, report: &mut CorpusReport, skipped: SkippedVerb) {
        tracing::warn!("skipping verb {}: {}", skipped.verb, skipped.reason);
        self.progress.on_verb_skipped(&skipped);
        report.skipped.push(skipped);
    }
}
