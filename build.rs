//! Build script to generate embedded category word lists
//!
//! Reads the category data file and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_category_table(
        "data/categories.txt",
        &Path::new(&out_dir).join("categories.rs"),
        "CATEGORIES",
        "Built-in word search categories",
    );

    // Rebuild if the category data changes
    println!("cargo:rerun-if-changed=data/categories.txt");
}

fn generate_category_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut categories: Vec<(String, Vec<String>)> = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, words) = line
            .split_once(':')
            .unwrap_or_else(|| panic!("{input_path}:{}: expected `Name: words`", number + 1));

        let words: Vec<String> = words
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        categories.push((name.trim().to_string(), words));
    }

    let count = categories.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[&str])] = &[").unwrap();

    for (name, words) in &categories {
        let list = words
            .iter()
            .map(|w| format!("{w:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "    ({name:?}, &[{list}]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of categories in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
