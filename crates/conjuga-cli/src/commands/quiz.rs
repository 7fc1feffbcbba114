//! The `conjuga quiz` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use conjuga_core::corpus::{BuildProgress, CorpusBuilder, SkippedVerb};
use conjuga_core::sampler::{
    parse_tense_selection, tense_group_menu, Difficulty, DifficultySampler,
};
use conjuga_core::taxonomy::TenseGroup;
use conjuga_core::traits::{LexicalProvider, Prompter};
use conjuga_core::vocabulary::Vocabulary;
use conjuga_providers::config::load_config_from;
use conjuga_providers::create_provider;

use crate::console::ConsolePrompter;

/// Verbs sampled when the count prompt is left empty.
const DEFAULT_VERB_COUNT: usize = 10;

pub struct QuizArgs {
    pub difficulty: Option<i64>,
    pub count: Option<usize>,
    pub tenses: Option<String>,
    pub vocabulary: Option<PathBuf>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

/// Console progress reporter.
struct ConsoleProgress;

impl BuildProgress for ConsoleProgress {
    fn on_verb_start(&self, verb: &str) {
        eprintln!("Getting sentences for verb {verb}");
    }

    fn on_verb_complete(&self, verb: &str, records: usize) {
        tracing::debug!("{verb}: {records} sentences");
    }

    fn on_verb_skipped(&self, skipped: &SkippedVerb) {
        eprintln!("  Skipped {}: {}", skipped.verb, skipped.reason);
    }

    fn on_build_complete(&self, verbs: usize, records: usize, skipped: usize, elapsed: Duration) {
        eprintln!(
            "\nCollected {records} sentences from {verbs} verbs, {skipped} skipped ({:.1}s)",
            elapsed.as_secs_f64()
        );
    }
}

pub async fn execute(args: QuizArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let vocabulary_path = args.vocabulary.unwrap_or_else(|| config.vocabulary.clone());
    let seed = args.seed.or(config.seed);

    let vocabulary = Vocabulary::load(&vocabulary_path)?;
    tracing::info!(
        "loaded {} verbs from {}",
        vocabulary.len(),
        vocabulary_path.display()
    );

    let provider = create_provider(&config.provider).await?;
    let mut prompter = ConsolePrompter::stdio();

    let difficulty = match args.difficulty {
        Some(level) => Difficulty::new(level)?,
        None => {
            let level = ask_number(&mut prompter, "Difficulty: easy->hard 1-10: ", None).await?;
            Difficulty::new(level)?
        }
    };
    let count = match args.count {
        Some(count) => count,
        None => {
            let question = format!("Number of verbs to sample [{DEFAULT_VERB_COUNT}]: ");
            let count =
                ask_number(&mut prompter, &question, Some(DEFAULT_VERB_COUNT as i64)).await?;
            usize::try_from(count).context("number of verbs must not be negative")?
        }
    };
    let tense_groups = match args.tenses {
        Some(selection) => parse_tense_selection(&selection)?,
        None => ask_tense_groups(&mut prompter).await?,
    };
    anyhow::ensure!(!tense_groups.is_empty(), "select at least one tense group");

    let mut sampler = match seed {
        Some(seed) => DifficultySampler::with_seed(seed),
        None => DifficultySampler::new(),
    };
    let indices = sampler.sample(difficulty, count, vocabulary.len())?;
    tracing::debug!("sampled verb indices: {indices:?}");

    let report = CorpusBuilder::new(provider.as_ref())
        .with_progress(&ConsoleProgress)
        .build(&indices, &tense_groups, &vocabulary)
        .await;
    let corpus = report.into_corpus()?;

    prompter
        .show(&format!(
            "\nType the missing verb form. Type '{}' to finish.",
            conjuga_core::quiz::END_COMMAND
        ))
        .await?;

    let rng = match seed {
        // Separate stream from the sampler's.
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_entropy(),
    };
    let word_info: Option<&dyn LexicalProvider> = if config.show_word_info {
        Some(provider.as_ref())
    } else {
        None
    };

    let mut session = conjuga_core::quiz::QuizSession::new(&corpus, rng);
    let summary = session.run(&mut prompter, word_info).await?;

    println!("\nScore: {}/{} correct", summary.correct, summary.answered);

    Ok(())
}

/// Ask for an integer, re-asking on unparseable input. An empty answer
/// yields `default` when one is given.
async fn ask_number(
    prompter: &mut dyn Prompter,
    question: &str,
    default: Option<i64>,
) -> Result<i64> {
    loop {
        let answer = prompter
            .ask(question)
            .await?
            .context("input closed before the quiz was configured")?;
        let answer = answer.trim();
        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
        }
        match answer.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => prompter.show(&format!("'{answer}' is not a number")).await?,
        }
    }
}

async fn ask_tense_groups(prompter: &mut dyn Prompter) -> Result<Vec<TenseGroup>> {
    let question = format!(
        "Select tenses, separated by spaces ({}): ",
        tense_group_menu()
    );
    let answer = prompter
        .ask(&question)
        .await?
        .context("input closed before the quiz was configured")?;
    Ok(parse_tense_selection(&answer)?)
}
