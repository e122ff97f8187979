//! Arpabet phoneme table: exact token → descriptor lookup.
//!
//! The default table ships as embedded TOML and is parsed once on first use.
//! Callers may swap the whole table out but never edit single entries, so a
//! built table is immutable.

mod config;
mod entry;

pub use config::{parse_table_toml, TableError};
pub use entry::{PhonemeClass, PhonemeEntry};

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

#[derive(Debug)]
pub struct PhonemeTable {
    entries: HashMap<String, PhonemeEntry>,
}

impl PhonemeTable {
    /// Build a table from a token → entry mapping, rejecting empty,
    /// list-shaped, or malformed input.
    pub fn from_entries(entries: BTreeMap<String, PhonemeEntry>) -> Result<Self, TableError> {
        config::validate(&entries)?;
        Ok(PhonemeTable {
            entries: entries.into_iter().collect(),
        })
    }

    /// Exact, case-sensitive lookup. Stress digits are part of the key:
    /// `AO`, `AO0`, `AO1`, and `AO2` are four distinct entries.
    pub fn lookup(&self, token: &str) -> Option<&PhonemeEntry> {
        self.entries.get(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PhonemeTable {
    fn default() -> Self {
        PhonemeTable {
            entries: default_entries().clone(),
        }
    }
}

fn default_entries() -> &'static HashMap<String, PhonemeEntry> {
    static INSTANCE: OnceLock<HashMap<String, PhonemeEntry>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_table_toml(DEFAULT_TABLE_TOML)
            .expect("embedded phoneme table must be valid")
            .into_iter()
            .collect()
    })
}
