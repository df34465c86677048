//! Init command - scaffold a dictionary directory
//!
//! Creates a small starter set of word lists so detection works out of
//! the box, plus a langscout.toml pointing at them. Existing files are
//! never overwritten.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const ENGLISH_WORDS: &str = "the
be
to
of
and
a
in
that
have
i
it
for
not
on
with
he
as
you
do
at
this
but
his
by
from
they
we
say
her
she
or
an
will
my
one
all
would
there
their
what
so
up
out
if
about
who
get
which
go
me
hello
world
good
morning
thanks
";

const FRENCH_WORDS: &str = "le
la
les
de
des
du
un
une
et
est
en
que
qui
ne
pas
pour
dans
ce
il
elle
nous
vous
ils
je
tu
au
aux
avec
sur
son
sa
ses
mais
ou
où
si
plus
tout
bien
être
avoir
faire
bonjour
monde
merci
oui
non
jour
nuit
maison
";

const GERMAN_WORDS: &str = "der
die
das
und
ist
in
den
von
zu
mit
sich
des
auf
für
nicht
ein
eine
als
auch
es
an
werden
aus
er
hat
dass
sie
nach
wird
bei
einer
um
am
sind
noch
wie
einem
über
einen
so
zum
haben
nur
oder
aber
hallo
welt
danke
guten
morgen
";

const SPANISH_WORDS: &str = "el
la
los
las
de
del
un
una
y
es
en
que
no
por
para
con
se
su
al
lo
como
más
pero
sus
ya
o
este
sí
porque
esta
entre
cuando
muy
sin
sobre
también
me
hasta
hay
donde
quien
desde
todo
nos
hola
mundo
gracias
buenos
días
";

const STARTER_DICTIONARIES: &[(&str, &str)] = &[
    ("english", ENGLISH_WORDS),
    ("french", FRENCH_WORDS),
    ("german", GERMAN_WORDS),
    ("spanish", SPANISH_WORDS),
];

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    println!("\n{} Initializing Langscout\n", style("🗺").bold());

    if dir.exists() && !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    if dir.exists() {
        println!(
            "{} Dictionary directory exists at {}",
            style("✓").green(),
            style(dir.display()).cyan()
        );
    } else {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        println!(
            "{} Created {}",
            style("✓").green(),
            style(dir.display()).cyan()
        );
    }

    for (language, words) in STARTER_DICTIONARIES {
        let path = dir.join(format!("{language}.txt"));
        if path.exists() {
            println!(
                "{} Kept existing {}",
                style("✓").green(),
                style(format!("{language}.txt")).cyan()
            );
            continue;
        }
        std::fs::write(&path, words)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{} Created {} ({} words)",
            style("✓").green(),
            style(format!("{language}.txt")).cyan(),
            words.lines().count()
        );
    }

    // Project config pointing at the scaffolded directory
    let config_path = Path::new("langscout.toml");
    if config_path.exists() {
        println!(
            "{} Kept existing {}",
            style("✓").green(),
            style("langscout.toml").cyan()
        );
    } else {
        let default_config = format!(
            r#"# Langscout Configuration

[dictionaries]
# Directory of word lists (one .txt file per language, one word per line)
dir = "{}"

[defaults]
# Default output format (text, json)
format = "text"

# Show the full score table after each detection
scores = false

# Disable emoji in CLI output
no_emoji = false
"#,
            dir.display()
        );
        std::fs::write(config_path, default_config)
            .with_context(|| "Failed to create langscout.toml")?;
        println!(
            "{} Created {}",
            style("✓").green(),
            style("langscout.toml").cyan()
        );
    }

    println!("\n{} Ready to detect!", style("✨").bold());
    println!("\nNext steps:");
    println!(
        "  {} Detect a sentence",
        style("langscout \"Bonjour le monde\"").cyan()
    );
    println!("  {} List loaded dictionaries", style("langscout languages").cyan());
    println!("  {} Open the interactive form", style("langscout tui").cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_dictionaries_are_lowercase_and_nonempty() {
        for (language, words) in STARTER_DICTIONARIES {
            let count = words.lines().filter(|l| !l.trim().is_empty()).count();
            assert!(count >= 40, "{language} starter list is too small");
            for line in words.lines() {
                assert_eq!(
                    line,
                    line.trim().to_lowercase(),
                    "{language} entry '{line}' should be trimmed and lowercase"
                );
            }
        }
    }

    #[test]
    fn test_french_starter_covers_the_canonical_sample() {
        let french = STARTER_DICTIONARIES
            .iter()
            .find(|(language, _)| *language == "french")
            .map(|(_, words)| *words)
            .unwrap();
        for word in ["bonjour", "le", "monde"] {
            assert!(
                french.lines().any(|l| l == word),
                "french starter list should contain '{word}'"
            );
        }
    }
}
