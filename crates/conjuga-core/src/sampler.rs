//! Difficulty-weighted verb sampling and tense-group selection.
//!
//! Difficulty maps to a position in a vocabulary ranked easy → hard. Indices
//! are drawn from a normal distribution centred on that position so that an
//! easy drill still surfaces the occasional harder verb.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::DrillError;
use crate::taxonomy::TenseGroup;

/// Spread of the draw as a fraction of the vocabulary size.
const SPREAD: f64 = 0.2;

/// Guards `ln(0)` in the Box-Muller transform.
const EPSILON: f64 = 1e-10;

/// Drill difficulty from 1 (easiest) to 10 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: i64) -> Result<Self, DrillError> {
        if !(Self::MIN as i64..=Self::MAX as i64).contains(&level) {
            return Err(DrillError::OutOfRangeSelection {
                what: "difficulty",
                value: level,
                min: Self::MIN as i64,
                max: Self::MAX as i64,
            });
        }
        Ok(Self(level as u8))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Centre of the draw for a vocabulary of `len` verbs.
    pub fn mean_position(&self, len: usize) -> f64 {
        (self.0 as f64 / Self::MAX as f64) * len as f64
    }
}

/// Draws verb indices for a drill.
pub struct DifficultySampler {
    rng: ChaCha8Rng,
}

impl Default for DifficultySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultySampler {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a sampler with a fixed seed (for reproducible drills and tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw `count` indices into a vocabulary of `vocabulary_len` verbs.
    ///
    /// Each index lies in `[1, vocabulary_len - 1]`. Duplicates are possible.
    pub fn sample(
        &mut self,
        difficulty: Difficulty,
        count: usize,
        vocabulary_len: usize,
    ) -> Result<Vec<usize>, DrillError> {
        if count == 0 {
            return Err(DrillError::OutOfRangeSelection {
                what: "example count",
                value: 0,
                min: 1,
                max: i64::MAX,
            });
        }
        if vocabulary_len < 2 {
            return Err(DrillError::VocabularyTooSmall(vocabulary_len));
        }

        let mean = difficulty.mean_position(vocabulary_len);
        let std_dev = SPREAD * vocabulary_len as f64;
        let upper = (vocabulary_len - 1) as f64;

        let indices = (0..count)
            .map(|_| {
                let draw = mean + std_dev * self.sample_standard_normal();
                draw.clamp(1.0, upper).round() as usize
            })
            .collect();
        Ok(indices)
    }

    /// Box-Muller transform.
    fn sample_standard_normal(&mut self) -> f64 {
        let u1: f64 = self.rng.gen::<f64>().max(EPSILON);
        let u2: f64 = self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

/// Map selection indices onto the tense-group taxonomy.
pub fn select_tense_groups(selection: &[usize]) -> Result<Vec<TenseGroup>, DrillError> {
    selection
        .iter()
        .map(|&index| {
            TenseGroup::ALL
                .get(index)
                .copied()
                .ok_or(DrillError::OutOfRangeSelection {
                    what: "tense group",
                    value: index as i64,
                    min: 0,
                    max: TenseGroup::ALL.len() as i64 - 1,
                })
        })
        .collect()
}

/// Parse a space-separated list of tense-group indices such as `"0 3"`.
pub fn parse_tense_selection(input: &str) -> Result<Vec<TenseGroup>, DrillError> {
    let indices = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| DrillError::InvalidSelection(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    select_tense_groups(&indices)
}

/// The prompt text listing tense groups with their selection index.
pub fn tense_group_menu() -> String {
    TenseGroup::ALL
        .iter()
        .enumerate()
        .map(|(i, group)| format!("{i}='{group}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(indices: &[usize]) -> f64 {
        indices.iter().sum::<usize>() as f64 / indices.len() as f64
    }

    #[test]
    fn difficulty_bounds() {
        assert!(Difficulty::new(1).is_ok());
        assert!(Difficulty::new(10).is_ok());
        assert!(matches!(
            Difficulty::new(0),
            Err(DrillError::OutOfRangeSelection { value: 0, .. })
        ));
        assert!(Difficulty::new(11).is_err());
    }

    #[test]
    fn samples_stay_within_clamp_range() {
        let mut sampler = DifficultySampler::with_seed(7);
        for level in 1..=10 {
            let difficulty = Difficulty::new(level).unwrap();
            for n in [2usize, 3, 10, 250] {
                let indices = sampler.sample(difficulty, 200, n).unwrap();
                assert_eq!(indices.len(), 200);
                assert!(
                    indices.iter().all(|&i| (1..=n - 1).contains(&i)),
                    "index out of [1, {}] at difficulty {level}",
                    n - 1
                );
            }
        }
    }

    #[test]
    fn harder_difficulty_shifts_mean_upward() {
        let mut sampler = DifficultySampler::with_seed(42);
        let mut previous = 0.0;
        for level in [2, 5, 8] {
            let indices = sampler
                .sample(Difficulty::new(level).unwrap(), 2000, 1000)
                .unwrap();
            let m = mean(&indices);
            assert!(m > previous, "mean {m} at difficulty {level} not above {previous}");
            previous = m;
        }
    }

    #[test]
    fn max_difficulty_on_tiny_vocabulary_hits_last_index() {
        let mut sampler = DifficultySampler::with_seed(3);
        let hardest = Difficulty::new(10).unwrap();
        assert_eq!(sampler.sample(hardest, 1, 3).unwrap().len(), 1);

        // Mean 3.0 with sd 0.6 only rounds below 2 for draws under -2.5 sd.
        let indices = sampler.sample(hardest, 1000, 3).unwrap();
        let at_last = indices.iter().filter(|&&i| i == 2).count();
        assert!(at_last >= 950, "only {at_last}/1000 draws hit index 2");
    }

    #[test]
    fn seeded_samplers_agree() {
        let d = Difficulty::new(4).unwrap();
        let a = DifficultySampler::with_seed(9).sample(d, 20, 500).unwrap();
        let b = DifficultySampler::with_seed(9).sample(d, 20, 500).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_and_tiny_vocabulary_are_rejected() {
        let mut sampler = DifficultySampler::with_seed(1);
        let d = Difficulty::new(5).unwrap();
        assert!(matches!(
            sampler.sample(d, 0, 100),
            Err(DrillError::OutOfRangeSelection { .. })
        ));
        assert_eq!(
            sampler.sample(d, 1, 1),
            Err(DrillError::VocabularyTooSmall(1))
        );
    }

    #[test]
    fn tense_group_selection() {
        assert_eq!(
            select_tense_groups(&[0, 5, 0]).unwrap(),
            vec![
                TenseGroup::Indicative,
                TenseGroup::PerfectSubjunctive,
                TenseGroup::Indicative
            ]
        );
        assert!(matches!(
            select_tense_groups(&[6]),
            Err(DrillError::OutOfRangeSelection { value: 6, .. })
        ));
    }

    #[test]
    fn parse_selection_string() {
        assert_eq!(
            parse_tense_selection(" 1  3 ").unwrap(),
            vec![TenseGroup::Subjunctive, TenseGroup::Progressive]
        );
        assert!(parse_tense_selection("").unwrap().is_empty());
        assert_eq!(
            parse_tense_selection("1 x"),
            Err(DrillError::InvalidSelection("x".into()))
        );
        assert!(parse_tense_selection("9").is_err());
    }

    #[test]
    fn menu_lists_every_group() {
        let menu = tense_group_menu();
        assert!(menu.starts_with("0='Indicative'"));
        assert!(menu.ends_with("5='Perfect Subjunctive'"));
    }
}
