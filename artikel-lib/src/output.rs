// Output formatting for classification results.

use crate::types::*;

/// Render tags as their short codes, e.g. `["sn(G)", "pn(G)"]`.
pub fn to_codes(tags: &[GenderTag]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Render tags as a single bracketed list line: `['sn(G)', 'pn(G)']`.
pub fn to_list_line(tags: &[GenderTag]) -> String {
    let inner = tags
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Join syllables with hyphens: `Ka-nin-chen`.
pub fn to_hyphenated(syllables: &[String]) -> String {
    syllables.join("-")
}
