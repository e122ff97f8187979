use std::collections::BTreeMap;

use serde::Deserialize;

use super::entry::PhonemeEntry;

#[derive(Deserialize)]
struct TableConfig {
    phonemes: BTreeMap<String, PhonemeEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("phoneme table is empty")]
    Empty,
    #[error("phoneme table keys form a sequential list, not a mapping")]
    NotAMapping,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty IPA value for key: {0}")]
    EmptyIpa(String),
}

/// Parse TOML text into a sorted `BTreeMap<token, PhonemeEntry>`.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, PhonemeEntry>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    validate(&config.phonemes)?;
    Ok(config.phonemes)
}

/// Precondition checks shared by TOML parsing and programmatic replacement.
pub(crate) fn validate(map: &BTreeMap<String, PhonemeEntry>) -> Result<(), TableError> {
    if map.is_empty() {
        return Err(TableError::Empty);
    }
    if looks_like_sequence(map) {
        return Err(TableError::NotAMapping);
    }
    for (key, entry) in map {
        if !key.is_ascii() {
            return Err(TableError::NonAsciiKey(key.clone()));
        }
        if entry.ipa.is_empty() {
            return Err(TableError::EmptyIpa(key.clone()));
        }
    }
    Ok(())
}

/// A key set of exactly "0".."n-1" is a plain list handed over as a mapping.
fn looks_like_sequence(map: &BTreeMap<String, PhonemeEntry>) -> bool {
    let mut seen = vec![false; map.len()];
    for key in map.keys() {
        match key.parse::<usize>() {
            Ok(n) if n < seen.len() && !seen[n] && *key == n.to_string() => seen[n] = true,
            _ => return false,
        }
    }
    true
}
