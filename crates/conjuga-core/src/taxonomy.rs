//! The fixed conjugation taxonomy: grammatical persons, tense groups and tenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical person a conjugated form agrees with, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The subject pronoun printed in conjugation charts.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Person::FirstSingular => "yo",
            Person::SecondSingular => "tú",
            Person::ThirdSingular => "él/ella/usted",
            Person::FirstPlural => "nosotros",
            Person::SecondPlural => "vosotros",
            Person::ThirdPlural => "ellos/ellas/ustedes",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pronoun())
    }
}

impl FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yo" | "1s" | "first-singular" => Ok(Person::FirstSingular),
            "tú" | "tu" | "2s" | "second-singular" => Ok(Person::SecondSingular),
            "él/ella/usted" | "él/ella/ud." | "el/ella/usted" | "3s" | "third-singular" => {
                Ok(Person::ThirdSingular)
            }
            "nosotros" | "1p" | "first-plural" => Ok(Person::FirstPlural),
            "vosotros" | "2p" | "second-plural" => Ok(Person::SecondPlural),
            "ellos/ellas/ustedes" | "ellos/ellas/uds." | "3p" | "third-plural" => {
                Ok(Person::ThirdPlural)
            }
            other => Err(format!("unknown grammatical person: {other}")),
        }
    }
}

/// A named tense. The same name can appear in several tense groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Preterite,
    Imperfect,
    Conditional,
    Future,
    Past,
    Affirmative,
    Negative,
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tense::Present => "Present",
            Tense::Preterite => "Preterite",
            Tense::Imperfect => "Imperfect",
            Tense::Conditional => "Conditional",
            Tense::Future => "Future",
            Tense::Past => "Past",
            Tense::Affirmative => "Affirmative",
            Tense::Negative => "Negative",
        };
        f.write_str(name)
    }
}

/// Top-level conjugation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenseGroup {
    Indicative,
    Subjunctive,
    Imperative,
    Progressive,
    Perfect,
    PerfectSubjunctive,
}

impl TenseGroup {
    /// All groups, indexed the way the interactive selection numbers them.
    pub const ALL: [TenseGroup; 6] = [
        TenseGroup::Indicative,
        TenseGroup::Subjunctive,
        TenseGroup::Imperative,
        TenseGroup::Progressive,
        TenseGroup::Perfect,
        TenseGroup::PerfectSubjunctive,
    ];

    /// Tenses of this group, in chart column order.
    pub fn tenses(&self) -> &'static [Tense] {
        use Tense::*;
        match self {
            TenseGroup::Indicative => &[Present, Preterite, Imperfect, Conditional, Future],
            TenseGroup::Subjunctive => &[Present, Imperfect, Future],
            TenseGroup::Imperative => &[Affirmative, Negative],
            TenseGroup::Progressive => &[Present, Preterite, Imperfect, Conditional, Future],
            TenseGroup::Perfect => &[Present, Preterite, Past, Conditional, Future],
            TenseGroup::PerfectSubjunctive => &[Present, Past, Future],
        }
    }

    /// Position of this group in [`TenseGroup::ALL`].
    pub fn index(&self) -> usize {
        TenseGroup::ALL
            .iter()
            .position(|g| g == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for TenseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TenseGroup::Indicative => "Indicative",
            TenseGroup::Subjunctive => "Subjunctive",
            TenseGroup::Imperative => "Imperative",
            TenseGroup::Progressive => "Progressive",
            TenseGroup::Perfect => "Perfect",
            TenseGroup::PerfectSubjunctive => "Perfect Subjunctive",
        };
        f.write_str(name)
    }
}

impl FromStr for TenseGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "indicative" => Ok(TenseGroup::Indicative),
            "subjunctive" => Ok(TenseGroup::Subjunctive),
            "imperative" => Ok(TenseGroup::Imperative),
            "progressive" | "continuous" => Ok(TenseGroup::Progressive),
            "perfect" => Ok(TenseGroup::Perfect),
            "perfect subjunctive" => Ok(TenseGroup::PerfectSubjunctive),
            other => Err(format!("unknown tense group: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_parse_pronouns_and_descriptors() {
        assert_eq!("yo".parse::<Person>().unwrap(), Person::FirstSingular);
        assert_eq!("Tú".parse::<Person>().unwrap(), Person::SecondSingular);
        assert_eq!(
            "él/ella/usted".parse::<Person>().unwrap(),
            Person::ThirdSingular
        );
        assert_eq!(
            "third-plural".parse::<Person>().unwrap(),
            Person::ThirdPlural
        );
        assert!("they".parse::<Person>().is_err());
    }

    #[test]
    fn tense_group_display_and_parse() {
        assert_eq!(
            TenseGroup::PerfectSubjunctive.to_string(),
            "Perfect Subjunctive"
        );
        assert_eq!(
            "perfect-subjunctive".parse::<TenseGroup>().unwrap(),
            TenseGroup::PerfectSubjunctive
        );
        assert_eq!(
            "Perfect Subjunctive".parse::<TenseGroup>().unwrap(),
            TenseGroup::PerfectSubjunctive
        );
        assert_eq!(
            "INDICATIVE".parse::<TenseGroup>().unwrap(),
            TenseGroup::Indicative
        );
        assert!("pluperfect".parse::<TenseGroup>().is_err());
    }

    #[test]
    fn taxonomy_shape() {
        let counts: Vec<usize> = TenseGroup::ALL.iter().map(|g| g.tenses().len()).collect();
        assert_eq!(counts, vec![5, 3, 2, 5, 5, 3]);
        assert_eq!(TenseGroup::Imperative.tenses()[0], Tense::Affirmative);
        assert_eq!(TenseGroup::Perfect.index(), 4);
    }
}
