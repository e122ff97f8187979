use serde::{Deserialize, Serialize};

/// Phonological class of a table entry. Stress placement only distinguishes
/// vowels from consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    Vowel,
    Consonant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhonemeEntry {
    pub class: PhonemeClass,
    /// Descriptive subcategory ("monophthong", "fricative", ...). Never read
    /// by conversion logic.
    pub category: String,
    pub ipa: String,
}
