//! The `conjuga init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("conjuga.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("verbs.csv"), STARTER_VOCABULARY)?;

    println!("\nNext steps:");
    println!("  1. Point [provider] in conjuga.toml at your lexical service or a lexicon file");
    println!("  2. Run: conjuga conjugate hablar");
    println!("  3. Run: conjuga quiz");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# conjuga configuration

# Ranked verb list, one verb per line, easiest first.
vocabulary = "verbs.csv"

# Look up the answer's definitions after each turn.
show_word_info = true

# Uncomment for reproducible drills.
# seed = 42

[provider]
type = "http"
base_url = "http://localhost:8080"
timeout_secs = 30
# CONJUGA_BASE_URL overrides base_url when set.

# Offline alternative:
# [provider]
# type = "fixture"
# path = "lexicon.json"
"#;

const STARTER_VOCABULARY: &str = "\
# Spanish verbs ranked by frequency
ser
estar
haber
tener
hacer
poder
decir
ir
ver
dar
saber
querer
llegar
pasar
deber
poner
parecer
quedar
creer
hablar
llevar
dejar
seguir
encontrar
llamar
venir
pensar
salir
volver
tomar
conocer
vivir
sentir
tratar
mirar
contar
empezar
esperar
buscar
existir
entrar
trabajar
escribir
perder
producir
ocurrir
entender
pedir
recibir
recordar
";
