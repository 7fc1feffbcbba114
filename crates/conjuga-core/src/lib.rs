//! conjuga-core: Conjugation model, sampling, corpus building and quizzing.
//!
//! This crate defines the verb taxonomy, the conjugation and definition data
//! model, and the logic that turns a ranked vocabulary into cloze exercises.

pub mod corpus;
pub mod error;
pub mod model;
pub mod quiz;
pub mod sampler;
pub mod taxonomy;
pub mod traits;
pub mod vocabulary;
