//! Embeds the word lists under `data/` as `&[&str]` consts

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// (source file, generated file, const name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/solutions.txt",
        "solutions.rs",
        "SOLUTIONS",
        "Candidate target words",
    ),
    (
        "data/admissible.txt",
        "admissible.rs",
        "ADMISSIBLE",
        "Words accepted as guesses",
    ),
];

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or(io::ErrorKind::NotFound)?);

    for (source, generated, name, doc) in LISTS {
        println!("cargo:rerun-if-changed={source}");
        let content = fs::read_to_string(source)?;
        fs::write(out_dir.join(generated), render_list(&content, name, doc))?;
    }

    Ok(())
}

/// Trimmed, non-blank lines of `content` as a const array plus its length
fn render_list(content: &str, name: &str, doc: &str) -> String {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();
    let entries = words
        .iter()
        .map(|word| format!("    {word:?},"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "/// {doc} ({count} words)\n\
         pub const {name}: &[&str] = &[\n{entries}\n];\n\n\
         /// Number of words in {name}\n\
         pub const {name}_COUNT: usize = {count};\n"
    )
}
