//! Ranked vocabulary loader.
//!
//! The word list is ordered easiest first. Each line holds one verb; when a
//! line has comma-separated columns only the first is used.

use std::path::Path;

use anyhow::{Context, Result};

/// Verbs ranked easy → hard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    verbs: Vec<String>,
}

impl Vocabulary {
    pub fn new(verbs: Vec<String>) -> Self {
        Self { verbs }
    }

    /// Load a vocabulary file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read vocabulary: {}", path.display()))?;
        let vocabulary = Self::parse(&content);
        tracing::debug!(
            "loaded {} verbs from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Parse vocabulary text. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        let verbs = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let first = line.split(',').next().unwrap_or_default();
                let verb = first.trim().trim_matches('"').trim();
                (!verb.is_empty()).then(|| verb.to_string())
            })
            .collect();
        Self { verbs }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.verbs.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            verbs: iter.into_iter().map(Into::into).collect(),
        }
    }
}
