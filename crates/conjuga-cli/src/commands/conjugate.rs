//! The `conjuga conjugate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use conjuga_core::model::ConjugationTable;
use conjuga_core::taxonomy::{Person, TenseGroup};
use conjuga_providers::config::load_config_from;
use conjuga_providers::create_provider;

pub async fn execute(verb: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let provider = create_provider(&config.provider).await?;

    let table = provider.fetch_conjugations(&verb).await?;
    if table.is_empty() {
        println!("No conjugations found for '{verb}'.");
        return Ok(());
    }

    for group in table.groups() {
        println!("\n{group}");
        println!("{}", render_group(&table, group));
    }

    Ok(())
}

/// One row per person, one column per tense of the group.
fn render_group(conjugations: &ConjugationTable, group: TenseGroup) -> Table {
    let tenses = group.tenses();

    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend(tenses.iter().map(|tense| Cell::new(tense)));
    table.set_header(header);

    for person in Person::ALL {
        let mut row = vec![Cell::new(person.pronoun())];
        row.extend(tenses.iter().map(|&tense| {
            Cell::new(conjugations.form(group, tense, person).unwrap_or("-"))
        }));
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use conjuga_core::model::{RawConjugations, RawPersonRow, RawTenseGroup};

    #[test]
    fn renders_every_person_and_tense() {
        let rows = Person::ALL
            .iter()
            .map(|person| RawPersonRow {
                person: person.pronoun().to_string(),
                forms: vec![
                    format!("{}-presente", person.pronoun()),
                    "x".into(),
                    "x".into(),
                    "x".into(),
                    "x".into(),
                ],
            })
            .collect();
        let raw = RawConjugations {
            groups: vec![RawTenseGroup {
                group: "indicative".into(),
                rows,
            }],
        };
        let table = ConjugationTable::from_raw(&raw).unwrap();

        let rendered = render_group(&table, TenseGroup::Indicative).to_string();
        assert!(rendered.contains("Present"));
        assert!(rendered.contains("Future"));
        assert!(rendered.contains("nosotros-presente"));
    }
}
