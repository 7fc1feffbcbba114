//! Configuration loading and provider factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use conjuga_core::traits::LexicalProvider;

use crate::fixture::FixtureProvider;
use crate::http::{HttpProvider, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Which lexical data source to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    Http {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
    Fixture {
        path: PathBuf,
    },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Http {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Top-level conjuga configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjugaConfig {
    /// Lexical data source.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Ranked verb list, easiest first.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: PathBuf,
    /// Look up and display the answer's definitions after each turn.
    #[serde(default = "default_true")]
    pub show_word_info: bool,
    /// Fixed RNG seed for reproducible drills.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_vocabulary() -> PathBuf {
    PathBuf::from("verbs.csv")
}

fn default_true() -> bool {
    true
}

impl Default for ConjugaConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            vocabulary: default_vocabulary(),
            show_word_info: true,
            seed: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `conjuga.toml` in the current directory
/// 2. `~/.config/conjuga/config.toml`
///
/// Environment variable override: `CONJUGA_BASE_URL` (HTTP provider only).
pub fn load_config() -> Result<ConjugaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ConjugaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("conjuga.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ConjugaConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ConjugaConfig::default(),
    };
    tracing::debug!("using config {:?}", config_path);

    if let Ok(url) = std::env::var("CONJUGA_BASE_URL") {
        if let ProviderConfig::Http { base_url, .. } = &mut config.provider {
            *base_url = url;
        }
    }

    config.provider = match &config.provider {
        ProviderConfig::Http {
            base_url,
            timeout_secs,
        } => ProviderConfig::Http {
            base_url: resolve_env_vars(base_url),
            timeout_secs: *timeout_secs,
        },
        ProviderConfig::Fixture { path } => ProviderConfig::Fixture {
            path: resolve_path(path),
        },
    };
    config.vocabulary = resolve_path(&config.vocabulary);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("conjuga"))
}

/// Create a provider instance from its configuration.
pub async fn create_provider(config: &ProviderConfig) -> Result<Box<dyn LexicalProvider>> {
    match config {
        ProviderConfig::Http {
            base_url,
            timeout_secs,
        } => Ok(Box::new(HttpProvider::new(base_url, *timeout_secs)?)),
        ProviderConfig::Fixture { path } => Ok(Box::new(FixtureProvider::load(path).await?)),
    }
}
