//! The `conjuga define` command.

use std::path::PathBuf;

use anyhow::Result;

use conjuga_providers::config::load_config_from;
use conjuga_providers::create_provider;

pub async fn execute(word: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let provider = create_provider(&config.provider).await?;

    let info = provider.fetch_definitions(&word).await?;
    if info.definitions.is_empty() {
        println!("No definitions found for '{word}'.");
        return Ok(());
    }

    println!("{}:", info.surface_form);
    for definition in &info.definitions {
        println!("  - {definition}");
    }

    Ok(())
}
