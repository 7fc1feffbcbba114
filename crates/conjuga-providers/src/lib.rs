//! conjuga-providers: Lexical data providers.
//!
//! Implements the `LexicalProvider` trait for a JSON HTTP service, an offline
//! JSON lexicon file and an in-memory mock, and loads the conjuga config.

pub mod config;
pub mod fixture;
pub mod http;
pub mod mock;

pub use config::{create_provider, load_config, load_config_from, ConjugaConfig, ProviderConfig};
pub use fixture::FixtureProvider;
pub use http::HttpProvider;
pub use mock::MockProvider;
