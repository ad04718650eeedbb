// Bundles the German word lists under ../data and embeds them as JSON at
// compile time.

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Mirrors `LexiconSources` in src/lexicon.rs.
#[derive(Serialize)]
struct BundledSources {
    masculine: String,
    feminine: String,
    neuter: String,
    plural_only: String,
    infinitives: Option<String>,
    weak_masculine: Option<String>,
}

fn main() {
    let data_dir = Path::new("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("lexicon.json");

    let data = BundledSources {
        masculine: read_required(data_dir, "der.txt"),
        feminine: read_required(data_dir, "die.txt"),
        neuter: read_required(data_dir, "das.txt"),
        plural_only: read_required(data_dir, "plural-only.txt"),
        infinitives: read_optional(data_dir, "verbs.txt"),
        weak_masculine: read_optional(data_dir, "weak.txt"),
    };

    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write lexicon.json");

    println!("cargo:rerun-if-changed=build.rs");
}

fn read_required(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read word list {}: {e}", path.display()));
    normalize(&content)
}

fn read_optional(dir: &Path, name: &str) -> Option<String> {
    let path = dir.join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read word list {}: {e}", path.display()));
    Some(normalize(&content))
}

/// Strip a UTF-8 BOM and Windows line endings so the runtime parser only
/// ever sees `\n`-separated lines.
fn normalize(content: &str) -> String {
    content
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
}
