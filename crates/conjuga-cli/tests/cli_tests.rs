//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn conjuga() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("conjuga").unwrap();
    cmd.env_remove("CONJUGA_BASE_URL").env_remove("RUST_LOG");
    cmd
}

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Write a config pointing at the fixture lexicon and return its path.
fn fixture_config(dir: &TempDir, vocabulary: &Path, show_word_info: bool) -> PathBuf {
    let config = format!(
        "vocabulary = {:?}\nshow_word_info = {show_word_info}\n\n[provider]\ntype = \"fixture\"\npath = {:?}\n",
        vocabulary.display().to_string(),
        fixtures().join("lexicon.json").display().to_string(),
    );
    let path = dir.path().join("conjuga.toml");
    std::fs::write(&path, config).unwrap();
    path
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    conjuga()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created conjuga.toml"))
        .stdout(predicate::str::contains("Created verbs.csv"));

    assert!(dir.path().join("conjuga.toml").exists());
    let verbs = std::fs::read_to_string(dir.path().join("verbs.csv")).unwrap();
    assert!(verbs.lines().any(|l| l == "hablar"));
}

#[test]
fn init_skips_existing_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("verbs.csv"), "ser\nestar\n").unwrap();

    conjuga()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("verbs.csv already exists, skipping."));

    let verbs = std::fs::read_to_string(dir.path().join("verbs.csv")).unwrap();
    assert_eq!(verbs, "ser\nestar\n");
}

#[test]
fn conjugate_prints_table() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), true);

    conjuga()
        .arg("conjugate")
        .arg("hablar")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Indicative"))
        .stdout(predicate::str::contains("Preterite"))
        .stdout(predicate::str::contains("hablaremos"));
}

#[test]
fn conjugate_unknown_verb() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), true);

    conjuga()
        .args(["conjugate", "zzz", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No conjugations found for 'zzz'."));
}

#[test]
fn define_prints_definitions() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), true);

    conjuga()
        .args(["define", "hablo", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("hablo:"))
        .stdout(predicate::str::contains("to speak; to talk"));
}

#[test]
fn quiz_ends_on_end_command() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), false);

    conjuga()
        .args(["quiz", "--difficulty", "5", "--count", "2", "--tenses", "0"])
        .args(["--seed", "7", "--config"])
        .arg(&config)
        .write_stdin("end\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Getting sentences for verb hablar"))
        .stdout(predicate::str::contains(" ___ "))
        .stdout(predicate::str::contains("Score: 0/0 correct"));
}

#[test]
fn quiz_grades_answers() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), false);

    conjuga()
        .args(["quiz", "--difficulty", "1", "--count", "1", "--tenses", "0"])
        .args(["--seed", "3", "--config"])
        .arg(&config)
        .write_stdin("hablaré\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("INCORRECT! the answer was"))
        .stdout(predicate::str::contains("Score: 0/1 correct"));
}

#[test]
fn quiz_shows_word_info_after_answer() {
    let dir = TempDir::new().unwrap();
    let vocabulary = dir.path().join("verbs.csv");
    std::fs::write(&vocabulary, "ser\nhablar\n").unwrap();
    let config = fixture_config(&dir, &vocabulary, true);

    // Every example form in the lexicon has definitions.
    conjuga()
        .args(["quiz", "--difficulty", "1", "--count", "1", "--tenses", "0"])
        .args(["--seed", "11", "--config"])
        .arg(&config)
        .write_stdin("x\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(verb) to speak; to talk [present, "))
        .stdout(predicate::str::contains("Score: 0/1 correct"));
}

#[test]
fn quiz_prompts_for_settings() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), false);

    conjuga()
        .args(["quiz", "--seed", "5", "--config"])
        .arg(&config)
        .write_stdin("abc\n4\n\n0\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Difficulty: easy->hard 1-10:"))
        .stdout(predicate::str::contains("'abc' is not a number"))
        .stdout(predicate::str::contains("0='Indicative'"))
        .stdout(predicate::str::contains("Score: 0/0 correct"));
}

#[test]
fn quiz_rejects_out_of_range_difficulty() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), false);

    conjuga()
        .args(["quiz", "--difficulty", "11", "--count", "1", "--tenses", "0"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn quiz_fails_when_no_sentences_found() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, &fixtures().join("verbs.csv"), false);

    // The lexicon has no subjunctive chart for any verb.
    conjuga()
        .args(["quiz", "--difficulty", "3", "--count", "2", "--tenses", "1"])
        .arg("--config")
        .arg(&config)
        .write_stdin("end\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no example sentences were found"));
}

#[test]
fn quiz_rejects_tiny_vocabulary() {
    let dir = TempDir::new().unwrap();
    let vocabulary = dir.path().join("verbs.csv");
    std::fs::write(&vocabulary, "hablar\n").unwrap();
    let config = fixture_config(&dir, &vocabulary, false);

    conjuga()
        .args(["quiz", "--difficulty", "3", "--count", "1", "--tenses", "0"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 verbs"));
}

#[test]
fn missing_config_file_fails() {
    conjuga()
        .args(["define", "hablo", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
