// crates/addrbook-core/src/text.rs

use deunicode::deunicode;

/// Normalizes a string for matching: accents stripped, lowercased, trimmed.
///
/// "Łódź" and "lodz" fold to the same key, as do "Zürich" and "ZURICH".
pub fn fold_key(s: &str) -> String {
    deunicode(s).to_lowercase().trim().to_string()
}
