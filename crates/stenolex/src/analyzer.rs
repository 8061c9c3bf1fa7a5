//! # Steno Analyzer
//!
//! Key-converting wrapper for the lexer: user-facing RTFCRE strings go in,
//! an annotated result tree comes out. Also the home of the plain-data query
//! variant used by batch index builds.

use std::sync::Arc;

use crate::keys::KeyLayout;
use crate::lexer::StenoLexer;
use crate::matchers::{
    special_kind, PrefixMatcher, SpecialKind, SpecialMatcher, StrokeMatcher, WordMatcher,
};
use crate::rules::{LexerRule, RuleDatabase};

/// What one child span of an [`Analysis`] points at.
#[derive(Debug, Clone)]
pub enum Connection {
    /// A matched rule.
    Rule(Arc<LexerRule>),
    /// Keys the lexer could not attribute, in RTFCRE form.
    Unmatched {
        /// The leftover keys.
        keys: String,
    },
}

/// One child of the analysis root: a connection over a letters span.
#[derive(Debug, Clone)]
pub struct AnalysisNode {
    /// What this span points at.
    pub connection: Connection,
    /// Byte offset of the span within the translation letters.
    pub start: usize,
    /// Byte length of the span.
    pub length: usize,
}

/// Result tree of one query. The root spans the whole translation; children
/// annotate the matched rules and, if keys were left over, one synthetic
/// unmatched span at the end.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The queried outline, in RTFCRE form.
    pub keys: String,
    /// The queried translation letters.
    pub letters: String,
    /// Child spans in letter order.
    pub connections: Vec<AnalysisNode>,
}

impl Analysis {
    /// True when every key was matched to a rule.
    pub fn is_complete(&self) -> bool {
        self.connections
            .iter()
            .all(|node| matches!(node.connection, Connection::Rule(_)))
    }
}

/// Key-converting wrapper for the lexer.
///
/// Construction distributes every database rule among the four matchers
/// according to its flags; the result is read-only and shareable across
/// threads.
pub struct StenoAnalyzer {
    layout: Arc<KeyLayout>,
    lexer: StenoLexer,
}

impl StenoAnalyzer {
    /// Distribute `rules` among the rule matchers and build the analyzer.
    pub fn from_rules(layout: Arc<KeyLayout>, rules: &RuleDatabase) -> Self {
        let sep = layout.sep();
        let unordered = layout.unordered_keys();
        let mut prefix = PrefixMatcher::new(sep, unordered);
        let mut stroke = StrokeMatcher::new(sep);
        let mut word = WordMatcher::new();
        let mut special = SpecialMatcher::new(sep, unordered);
        let mut fallback = None;

        for rule in rules.iter() {
            if rule.flags.special {
                // Special rules are ignored unless they carry a well-known id.
                if let Some(kind) = special_kind(&rule.id) {
                    if kind == SpecialKind::Fallback {
                        fallback = Some(rule.clone());
                    }
                    special.add(kind, rule.clone());
                }
                continue;
            }
            if rule.flags.reference || rule.skeys.is_empty() {
                continue;
            }
            if rule.flags.stroke {
                stroke.add(rule.clone());
            } else if rule.flags.word {
                word.add(rule.clone());
            } else {
                prefix.add(rule.clone());
            }
        }
        prefix.compile();

        let lexer = StenoLexer::new(sep, prefix, stroke, word, special, fallback);
        Self { layout, lexer }
    }

    /// The key layout in use.
    pub fn layout(&self) -> &Arc<KeyLayout> {
        &self.layout
    }

    /// Analyze one translation.
    ///
    /// With `match_all_keys`, a best result that still misses keys is
    /// discarded entirely and the whole outline is reported unmatched.
    /// Unconvertible key strings never fail: they come back as a single
    /// unmatched span carrying the original keys.
    pub fn query(&self, keys: &str, letters: &str, match_all_keys: bool) -> Analysis {
        let skeys = match self.layout.from_rtfcre(keys) {
            Ok(skeys) => skeys,
            Err(err) => {
                log::debug!("query {keys:?}: {err}");
                return Analysis {
                    keys: keys.to_string(),
                    letters: letters.to_string(),
                    connections: vec![AnalysisNode {
                        connection: Connection::Unmatched {
                            keys: keys.to_string(),
                        },
                        start: 0,
                        length: letters.len(),
                    }],
                };
            }
        };
        let result = self.lexer.query(&skeys, letters);

        let mut connections = Vec::with_capacity(result.rules.len() + 1);
        let mut last_match_end = 0;
        let mut unmatched_skeys = result.unmatched_skeys;
        if match_all_keys && !unmatched_skeys.is_empty() {
            unmatched_skeys = skeys;
        } else {
            for (rule, start) in result.rules.iter().zip(&result.positions) {
                let length = rule.letters.len();
                last_match_end = start + length;
                connections.push(AnalysisNode {
                    connection: Connection::Rule(rule.clone()),
                    start: *start,
                    length,
                });
            }
        }
        if !unmatched_skeys.is_empty() {
            connections.push(AnalysisNode {
                connection: Connection::Unmatched {
                    keys: self.layout.to_rtfcre(&unmatched_skeys),
                },
                start: last_match_end,
                length: letters.len().saturating_sub(last_match_end),
            });
        }
        Analysis {
            keys: keys.to_string(),
            letters: letters.to_string(),
            connections,
        }
    }

    /// The most accurate translation from a set of candidates sharing a
    /// word. Returns `None` only for an empty set.
    pub fn best_translation<'a>(
        &self,
        translations: &'a [(String, String)],
    ) -> Option<&'a (String, String)> {
        if translations.is_empty() {
            return None;
        }
        let converted: Vec<(String, String)> = translations
            .iter()
            .map(|(keys, letters)| {
                let skeys = self.layout.cleanse_from_rtfcre(keys).unwrap_or_default();
                (skeys, letters.clone())
            })
            .collect();
        let index = self.lexer.find_best_translation(&converted);
        translations.get(index)
    }

    /// Analyze one translation and return plain data that survives any
    /// execution boundary: `[keys, letters, rule_id...]`.
    ///
    /// Rule ids are included only for complete matches, and special rules
    /// are filtered out: an index of examples should only point at rules
    /// that genuinely explain their keys.
    pub fn parallel_query(&self, keys: &str, letters: &str) -> Vec<String> {
        let mut data = vec![keys.to_string(), letters.to_string()];
        let Ok(skeys) = self.layout.from_rtfcre(keys) else {
            return data;
        };
        let result = self.lexer.query(&skeys, letters);
        if result.is_complete() {
            for rule in &result.rules {
                if special_kind(&rule.id).is_none() {
                    data.push(rule.id.clone());
                }
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn analyzer(rules_json: &str) -> StenoAnalyzer {
        let layout = Arc::new(KeyLayout::english());
        let db = RuleDatabase::parse(rules_json, &layout).unwrap();
        StenoAnalyzer::from_rules(layout, &db)
    }

    const SMALL_RULES: &str = r#"{
        "t": ["T", "t"],
        "e": ["E", "e"],
        "s": ["-S", "s"],
        "test": ["TEFT", "test", "stroke"]
    }"#;

    #[test]
    fn test_query_complete() {
        let a = analyzer(SMALL_RULES);
        let analysis = a.query("TES", "tes", false);
        assert!(analysis.is_complete());
        assert_eq!(analysis.connections.len(), 3);
    }

    #[test]
    fn test_query_invalid_keys_never_fails() {
        let a = analyzer(SMALL_RULES);
        let analysis = a.query("XYZ", "hello", false);
        assert_eq!(analysis.connections.len(), 1);
        let node = &analysis.connections[0];
        assert!(
            matches!(&node.connection, Connection::Unmatched { keys } if keys == "XYZ")
        );
        assert_eq!((node.start, node.length), (0, 5));
    }

    #[test]
    fn test_query_match_all_keys() {
        let a = analyzer(SMALL_RULES);
        // "TEZ" matches t and e but leaves the z key over.
        let partial = a.query("TEZ", "te", false);
        assert!(!partial.is_complete());
        assert!(partial.connections.len() > 1);
        let all_or_nothing = a.query("TEZ", "te", true);
        assert_eq!(all_or_nothing.connections.len(), 1);
        assert!(matches!(
            &all_or_nothing.connections[0].connection,
            Connection::Unmatched { keys } if keys == "TEZ"
        ));
    }

    #[test]
    fn test_parallel_query_payload() {
        let a = analyzer(SMALL_RULES);
        let data = a.parallel_query("TEFT", "test");
        assert_eq!(data, ["TEFT", "test", "test"]);
        // Partial results carry no rule ids.
        let data = a.parallel_query("TEZ", "te");
        assert_eq!(data, ["TEZ", "te"]);
    }

    #[test]
    fn test_analyzer_is_shareable() {
        let a = analyzer(SMALL_RULES);
        check_is_send(&a);
        check_is_sync(&a);
    }
}
