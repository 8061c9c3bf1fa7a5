//! End-to-end analyzer scenarios over small purpose-built rule sets.

use std::sync::Arc;

use stenolex::{Analysis, Connection, KeyLayout, RuleDatabase, StenoAnalyzer};

fn analyzer(rules_json: &str) -> StenoAnalyzer {
    let layout = Arc::new(KeyLayout::english());
    let db = RuleDatabase::parse(rules_json, &layout).unwrap();
    StenoAnalyzer::from_rules(layout, &db)
}

/// Flatten an analysis into (label, start, length) rows; unmatched spans
/// are labeled with their keys.
fn spans(analysis: &Analysis) -> Vec<(String, usize, usize)> {
    analysis
        .connections
        .iter()
        .map(|node| {
            let label = match &node.connection {
                Connection::Rule(rule) => rule.id.clone(),
                Connection::Unmatched { keys } => format!("?{keys}"),
            };
            (label, node.start, node.length)
        })
        .collect()
}

#[test]
fn hello_decomposes_completely() {
    let a = analyzer(r#"{"hel": ["HEL", "hel"], "lo": ["LOE", "lo"]}"#);
    let analysis = a.query("HEL/LOE", "hello", false);
    assert!(analysis.is_complete());

    // The matched letters tile the word exactly.
    let mut concat = String::new();
    for node in &analysis.connections {
        if let Connection::Rule(rule) = &node.connection {
            assert_eq!(
                &analysis.letters[node.start..node.start + node.length],
                rule.letters
            );
            concat.push_str(&rule.letters);
        }
    }
    assert_eq!(concat, "hello");
}

#[test]
fn stroke_rule_spans_the_word() {
    let a = analyzer(r#"{"test": ["TEFT", "test", "stroke"]}"#);
    let analysis = a.query("TEFT", "test", false);
    assert_eq!(spans(&analysis), [("test".to_string(), 0, 4)]);
}

#[test]
fn two_words_two_strokes() {
    let a = analyzer(
        r#"{
            "plover": ["PHROFR", "plover", "stroke"],
            "test": ["TEFT", "test", "stroke"]
        }"#,
    );
    let analysis = a.query("PHROFR/TEFT", "plover test", false);
    assert_eq!(
        spans(&analysis),
        [("plover".to_string(), 0, 6), ("test".to_string(), 7, 4)]
    );
}

#[test]
fn unknown_keys_come_back_unmatched() {
    let a = analyzer(r#"{"hel": ["HEL", "hel"]}"#);
    let analysis = a.query("XYZ", "hello", false);
    assert_eq!(spans(&analysis), [("?XYZ".to_string(), 0, 5)]);
}

#[test]
fn split_stroke_matches_in_insertion_order() {
    let a = analyzer(r#"{"f": ["TP", "f"], "n": ["-PB", "n"]}"#);
    let analysis = a.query("TP-PB", "fn", false);
    assert_eq!(
        spans(&analysis),
        [("f".to_string(), 0, 1), ("n".to_string(), 1, 1)]
    );
}

#[test]
fn best_translation_prefers_complete_matches() {
    let a = analyzer(
        r#"{
            "t": ["T", "t"],
            "e": ["E", "e"],
            "s": ["-S", "s"],
            "test": ["TEFT", "test", "stroke"]
        }"#,
    );
    let candidates = vec![
        ("TEFT".to_string(), "test".to_string()),
        ("TE*S".to_string(), "test".to_string()),
    ];
    let best = a.best_translation(&candidates).unwrap();
    assert_eq!(best.0, "TEFT");
}

#[test]
fn word_rule_requires_word_boundary() {
    let a = analyzer(
        r#"{
            "the": ["-T", "the", "word"],
            "o": ["O", "o"],
            "-ther": ["-T/ER", "ther"]
        }"#,
    );
    // "other" contains "the" but not at a word boundary.
    let analysis = a.query("O/-T/ER", "other", false);
    for node in &analysis.connections {
        if let Connection::Rule(rule) = &node.connection {
            assert_ne!(rule.id, "the");
        }
    }
}

#[test]
fn unexplained_star_falls_back_to_specials() {
    let a = analyzer(
        r#"{
            "~????": ["*", "", "special", "purpose unknown"],
            "t": ["T", "t"],
            "e": ["E", "e"],
            "s": ["-S", "s"]
        }"#,
    );
    let analysis = a.query("TE*S", "tes", false);
    assert!(analysis.is_complete());
    let ids: Vec<_> = spans(&analysis)
        .into_iter()
        .map(|(label, _, _)| label)
        .collect();
    assert!(ids.contains(&"~????".to_string()));
}

#[test]
fn fallback_rule_is_synthesized_for_ruleless_results() {
    let a = analyzer(
        r#"{
            "~????": ["*", "", "special", "purpose unknown"],
            "hel": ["HEL", "hel"]
        }"#,
    );
    // Valid keys, but nothing matches them against these letters.
    let analysis = a.query("TEFT", "zzzz", false);
    assert!(!analysis.is_complete());
    let labels: Vec<_> = spans(&analysis)
        .into_iter()
        .map(|(label, _, _)| label)
        .collect();
    assert!(labels.contains(&"~????".to_string()));
    assert!(labels.iter().any(|label| label.starts_with('?')));
}

#[test]
fn compound_reference_rule_wins_as_coarsest() {
    let a = analyzer(
        r#"{
            "re": ["RE", "re"],
            "test": ["TEFT", "test", "stroke"],
            "retest": ["RE/TEFT", "{re}{test}"]
        }"#,
    );
    let analysis = a.query("RE/TEFT", "retest", false);
    assert_eq!(spans(&analysis), [("retest".to_string(), 0, 6)]);
}
