//! Stress diacritic placement over a resolved phoneme sequence.
//!
//! An Arpabet stress digit sits on the vowel token, but spoken English
//! carries the stress on the onset of that vowel's syllable. The scan
//! therefore decorates the consonant immediately preceding the stressed
//! vowel, or the very start of the word when the stressed vowel is the
//! word's first vowel, approximating IPA placement from a linear phoneme
//! stream without full syllabification.

use tracing::debug;

use super::ResolvedPhoneme;
use crate::table::PhonemeClass;

const PRIMARY: &str = "ˈ";
const SECONDARY: &str = "ˌ";

/// Stress digit of a token: its final character when numeric, else 0.
fn stress_digit(token: &str) -> u32 {
    token
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0)
}

/// Single forward pass over the sequence. `tokens` and `resolved` are
/// index-aligned; the original tokens carry the stress digits, `resolved`
/// receives the markers.
pub(super) fn place_stress(tokens: &[&str], resolved: &mut [ResolvedPhoneme]) {
    debug_assert_eq!(tokens.len(), resolved.len());

    let mut vowel_count = 0usize;
    let mut last_consonant: Option<usize> = None;

    for i in 0..resolved.len() {
        match resolved[i].class {
            PhonemeClass::Vowel => vowel_count += 1,
            PhonemeClass::Consonant => last_consonant = Some(i),
        }

        let marker = match stress_digit(tokens[i]) {
            1 => PRIMARY,
            2 => SECONDARY,
            _ => continue,
        };

        // First vowel of the word: the onset is the word start itself, no
        // matter how many consonants precede the vowel. After that, the
        // most recent consonant is the syllable onset. A later vowel with
        // no consonant anywhere before it keeps the marker on itself.
        let target = if vowel_count == 1 {
            0
        } else if let Some(c) = last_consonant {
            c
        } else {
            i
        };

        // Markers stack when two digits resolve to the same target; the
        // later one lands outermost. Kept as-is, no de-duplication.
        resolved[target].ipa.insert_str(0, marker);
        debug!(index = i, target, marker, "placed stress marker");
    }
}
