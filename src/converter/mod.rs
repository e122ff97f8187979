//! Arpabet-to-IPA conversion.
//!
//! Tokenizes a phrase, resolves every token through the phoneme table, runs
//! stress placement over the resolved sequence, and joins the IPA strings.
//! Resolution is all-or-nothing: the first unknown token aborts the whole
//! call with no partial output.

mod stress;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use tracing::debug;

use crate::table::{PhonemeClass, PhonemeEntry, PhonemeTable, TableError};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input phrase is empty")]
    EmptyInput,

    #[error("phoneme \"{0}\" was not found")]
    UnknownPhoneme(String),
}

/// Working state of the stress scan: one slot per input token, index-aligned
/// with the token sequence, discarded after the output string is built.
struct ResolvedPhoneme {
    class: PhonemeClass,
    ipa: String,
}

/// Arpabet-to-IPA converter over a replaceable phoneme table.
///
/// `convert` borrows the converter immutably and `set_table` exclusively, so
/// a table can never be swapped out from under an in-flight conversion.
pub struct Converter {
    table: PhonemeTable,
}

impl Converter {
    /// Converter over the default Arpabet table.
    pub fn new() -> Self {
        Converter {
            table: PhonemeTable::default(),
        }
    }

    pub fn with_table(table: PhonemeTable) -> Self {
        Converter { table }
    }

    pub fn table(&self) -> &PhonemeTable {
        &self.table
    }

    /// Replace the whole table. Replacement is all-or-nothing: on error the
    /// previous table stays active.
    pub fn set_table(
        &mut self,
        entries: BTreeMap<String, PhonemeEntry>,
    ) -> Result<(), TableError> {
        self.table = PhonemeTable::from_entries(entries)?;
        Ok(())
    }

    /// Convert a phrase of whitespace-separated Arpabet tokens to a single
    /// IPA string with no inter-phoneme separators.
    pub fn convert(&self, phrase: &str) -> Result<String, ConvertError> {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let mut resolved = Vec::with_capacity(tokens.len());
        for &token in &tokens {
            let entry = self
                .table
                .lookup(token)
                .ok_or_else(|| ConvertError::UnknownPhoneme(token.to_string()))?;
            resolved.push(ResolvedPhoneme {
                class: entry.class,
                ipa: entry.ipa.clone(),
            });
        }
        debug!(token_count = tokens.len(), "resolved phrase");

        stress::place_stress(&tokens, &mut resolved);

        Ok(resolved.into_iter().map(|p| p.ipa).collect())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
