use std::collections::BTreeMap;

use crate::converter::{ConvertError, Converter};
use crate::table::{parse_table_toml, PhonemeClass, PhonemeEntry, DEFAULT_TABLE_TOML};

#[test]
fn test_empty_input() {
    let conv = Converter::new();
    let err = conv.convert("").unwrap_err();
    assert!(matches!(err, ConvertError::EmptyInput));
}

#[test]
fn test_whitespace_only_input() {
    let conv = Converter::new();
    let err = conv.convert("   ").unwrap_err();
    assert!(matches!(err, ConvertError::EmptyInput));
}

#[test]
fn test_unknown_phoneme() {
    let conv = Converter::new();
    match conv.convert("XYZ").unwrap_err() {
        ConvertError::UnknownPhoneme(token) => assert_eq!(token, "XYZ"),
        other => panic!("expected UnknownPhoneme, got {other:?}"),
    }
}

#[test]
fn test_unknown_phoneme_aborts_whole_phrase() {
    // The first miss aborts; no partial IPA comes back.
    let conv = Converter::new();
    match conv.convert("K AE1 QQ T").unwrap_err() {
        ConvertError::UnknownPhoneme(token) => assert_eq!(token, "QQ"),
        other => panic!("expected UnknownPhoneme, got {other:?}"),
    }
}

#[test]
fn test_single_consonant() {
    let conv = Converter::new();
    assert_eq!(conv.convert("P").unwrap(), "p");
}

#[test]
fn test_single_unstressed_vowel() {
    let conv = Converter::new();
    assert_eq!(conv.convert("AO").unwrap(), "ɔ");
    assert_eq!(conv.convert("AO0").unwrap(), "ɔ");
}

#[test]
fn test_plain_word_no_stress() {
    let conv = Converter::new();
    assert_eq!(conv.convert("K AA0 T").unwrap(), "kɑt");
}

#[test]
fn test_reduced_vowel() {
    // AH0 maps to the schwa, not ʌ: "the" = DH AH0.
    let conv = Converter::new();
    assert_eq!(conv.convert("DH AH0").unwrap(), "ðə");
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    let conv = Converter::new();
    assert_eq!(conv.convert("  HH AW1  ").unwrap(), "hˈaʊ");
    assert_eq!(conv.convert("HH \t AW1").unwrap(), "hˈaʊ");
}

#[test]
fn test_no_hidden_state_between_calls() {
    let conv = Converter::new();
    let first = conv.convert("B AH1 T ER0").unwrap();
    let second = conv.convert("B AH1 T ER0").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unstressed_tokens_pass_through_unmodified() {
    // Every table entry whose token carries no stress-1/2 digit converts to
    // exactly its ipa string.
    let conv = Converter::new();
    let map = parse_table_toml(DEFAULT_TABLE_TOML).unwrap();
    for (token, entry) in &map {
        if token.ends_with('1') || token.ends_with('2') {
            continue;
        }
        assert_eq!(
            conv.convert(token).unwrap(),
            entry.ipa,
            "pass-through mismatch for token={token}"
        );
    }
}

fn toy_table() -> BTreeMap<String, PhonemeEntry> {
    let mut map = BTreeMap::new();
    map.insert(
        "QA".to_string(),
        PhonemeEntry {
            class: PhonemeClass::Vowel,
            category: "monophthong".into(),
            ipa: "ɶ".into(),
        },
    );
    map.insert(
        "QK".to_string(),
        PhonemeEntry {
            class: PhonemeClass::Consonant,
            category: "stop".into(),
            ipa: "q".into(),
        },
    );
    map
}

#[test]
fn test_set_table_replaces_wholesale() {
    let mut conv = Converter::new();
    conv.set_table(toy_table()).unwrap();

    assert_eq!(conv.convert("QK QA").unwrap(), "qɶ");
    // No merging with the default table.
    assert!(matches!(
        conv.convert("K").unwrap_err(),
        ConvertError::UnknownPhoneme(_)
    ));
}

#[test]
fn test_set_table_empty_rejected_keeps_old_table() {
    let mut conv = Converter::new();
    let before = conv.convert("K AE1 T").unwrap();

    assert!(conv.set_table(BTreeMap::new()).is_err());

    assert_eq!(conv.convert("K AE1 T").unwrap(), before);
}

#[test]
fn test_set_table_sequential_keys_rejected_keeps_old_table() {
    let mut conv = Converter::new();
    let before = conv.convert("K AE1 T").unwrap();

    // A list-shaped mapping: keys "0".."2".
    let entry = PhonemeEntry {
        class: PhonemeClass::Consonant,
        category: "stop".into(),
        ipa: "k".into(),
    };
    let list: BTreeMap<String, PhonemeEntry> = (0..3)
        .map(|n| (n.to_string(), entry.clone()))
        .collect();
    assert!(conv.set_table(list).is_err());

    assert_eq!(conv.convert("K AE1 T").unwrap(), before);
}
