//! # Rule Database Loader
//!
//! Loading is two-phase. The first pass parses every declaration row into
//! literal and `{reference}` pattern segments and validates fields; the
//! second flattens each pattern's letters depth-first, rejecting unknown ids
//! and reference cycles. Only then are the resolved rules converted to
//! s-keys and frozen.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::{SLResult, StenolexError};
use crate::keys::KeyLayout;
use crate::rules::{LexerRule, RuleFlags, BUILTIN_RULES_JSON};
use crate::types::{CommonHashMap, CommonHashSet};

/// Unresolved rule declarations: id -> [keys, pattern, flags?, description?].
pub type RawRulesMap = BTreeMap<String, Vec<String>>;

/// Remove full-line `#` and `//` comments so rule files can carry
/// commentary. Only whole-line comments are supported.
pub fn strip_line_comments(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.starts_with('#') && !trimmed.starts_with("//")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One pattern piece: literal letters, or a reference to another rule.
#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Reference(String),
}

/// A declaration row after field validation, before reference resolution.
struct ParsedRule {
    keys: String,
    segments: Vec<Segment>,
    flags: RuleFlags,
    description: String,
}

/// An immutable collection of fully resolved rules with deterministic
/// (sorted-id) iteration order.
#[derive(Debug)]
pub struct RuleDatabase {
    rules: Vec<Arc<LexerRule>>,
    by_id: CommonHashMap<String, Arc<LexerRule>>,
}

impl RuleDatabase {
    /// Parse a rules declaration from JSON text (full-line comments
    /// allowed) and resolve it against `layout`.
    pub fn parse(json: &str, layout: &KeyLayout) -> SLResult<Self> {
        let raw: RawRulesMap = serde_json::from_str(&strip_line_comments(json))?;
        Self::from_raw(&raw, layout)
    }

    /// The built-in demonstration rule set.
    pub fn builtin(layout: &KeyLayout) -> SLResult<Self> {
        Self::parse(BUILTIN_RULES_JSON, layout)
    }

    /// Resolve an unresolved declarations map against `layout`.
    pub fn from_raw(raw: &RawRulesMap, layout: &KeyLayout) -> SLResult<Self> {
        let mut parsed: BTreeMap<&str, ParsedRule> = BTreeMap::new();
        for (id, fields) in raw {
            if fields.len() < 2 || fields.len() > 4 {
                return Err(StenolexError::MalformedRule {
                    id: id.clone(),
                    fields: fields.len(),
                });
            }
            let flag_field = fields.get(2).map(String::as_str).unwrap_or("");
            let flags = RuleFlags::parse(flag_field).map_err(|_| StenolexError::BadFlags {
                id: id.clone(),
                flags: flag_field.to_string(),
            })?;
            parsed.insert(
                id,
                ParsedRule {
                    keys: fields[0].clone(),
                    segments: parse_pattern(id, &fields[1])?,
                    flags,
                    description: fields.get(3).cloned().unwrap_or_default(),
                },
            );
        }

        let mut memo: CommonHashMap<String, String> = CommonHashMap::default();
        let mut rules = Vec::with_capacity(parsed.len());
        let mut by_id: CommonHashMap<String, Arc<LexerRule>> = CommonHashMap::default();
        for (&id, rule) in &parsed {
            let mut visiting = CommonHashSet::default();
            let letters = flatten_letters(id, &parsed, &mut memo, &mut visiting)?;
            let references = rule
                .segments
                .iter()
                .filter_map(|seg| match seg {
                    Segment::Reference(name) => Some(name.clone()),
                    Segment::Literal(_) => None,
                })
                .collect();
            let skeys = layout.from_rtfcre(&rule.keys)?;
            let weight = LexerRule::derive_weight(&letters, &rule.flags);
            let resolved = Arc::new(LexerRule {
                id: id.to_string(),
                keys: rule.keys.clone(),
                skeys,
                letters,
                flags: rule.flags,
                description: rule.description.clone(),
                references,
                weight,
            });
            by_id.insert(id.to_string(), resolved.clone());
            rules.push(resolved);
        }

        Ok(Self { rules, by_id })
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&Arc<LexerRule>> {
        self.by_id.get(id)
    }

    /// Iterate rules in sorted-id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<LexerRule>> {
        self.rules.iter()
    }

    /// The number of rules in the database.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the database holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Split a pattern into literal spans and `{reference}` tokens.
fn parse_pattern(id: &str, pattern: &str) -> SLResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '{' {
            literal.push(c);
            continue;
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => name.push(c),
                None => {
                    return Err(StenolexError::BadPattern {
                        id: id.to_string(),
                        pattern: pattern.to_string(),
                    })
                }
            }
        }
        segments.push(Segment::Reference(name));
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Flatten a rule's letters, resolving references depth-first. `visiting`
/// holds the ids on the current resolution path; revisiting one is a cycle.
fn flatten_letters(
    id: &str,
    parsed: &BTreeMap<&str, ParsedRule>,
    memo: &mut CommonHashMap<String, String>,
    visiting: &mut CommonHashSet<String>,
) -> SLResult<String> {
    if let Some(done) = memo.get(id) {
        return Ok(done.clone());
    }
    if !visiting.insert(id.to_string()) {
        return Err(StenolexError::CircularReference { id: id.to_string() });
    }
    let rule = &parsed[id];
    let mut letters = String::new();
    for segment in &rule.segments {
        match segment {
            Segment::Literal(text) => letters.push_str(text),
            Segment::Reference(name) => {
                if !parsed.contains_key(name.as_str()) {
                    return Err(StenolexError::UnknownReference {
                        id: id.to_string(),
                        reference: name.clone(),
                    });
                }
                letters.push_str(&flatten_letters(name, parsed, memo, visiting)?)
            }
        }
    }
    visiting.remove(id);
    memo.insert(id.to_string(), letters.clone());
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SLResult<RuleDatabase> {
        RuleDatabase::parse(json, &KeyLayout::english())
    }

    #[test]
    fn test_load_and_derive() {
        let db = parse(
            r#"{
                "t": ["T", "t"],
                "test": ["TEFT", "test", "stroke", "the word test"]
            }"#,
        )
        .unwrap();
        assert_eq!(db.len(), 2);
        let rule = db.get("test").unwrap();
        assert_eq!(rule.keys, "TEFT");
        assert_eq!(rule.skeys, "TEft");
        assert_eq!(rule.letters, "test");
        assert!(rule.flags.stroke);
        assert_eq!(rule.weight, 40);
        assert_eq!(rule.description, "the word test");
    }

    #[test]
    fn test_rare_weight() {
        let db = parse(r#"{"x": ["KP", "x", "rare"]}"#).unwrap();
        assert_eq!(db.get("x").unwrap().weight, 9);
    }

    #[test]
    fn test_comments_stripped() {
        let db = parse("{\n// leading letters\n\"t\": [\"T\", \"t\"]\n# done\n}").unwrap();
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_references_flatten() {
        let db = parse(
            r#"{
                "un": ["UPB", "un"],
                "able": ["-BL", "able"],
                "unable": ["UPB/-BL", "{un}{able}"]
            }"#,
        )
        .unwrap();
        let rule = db.get("unable").unwrap();
        assert_eq!(rule.letters, "unable");
        assert_eq!(rule.references, ["un", "able"]);
        assert_eq!(db.get("un").unwrap().references, [] as [&str; 0]);
    }

    #[test]
    fn test_nested_references() {
        let db = parse(
            r#"{
                "a": ["A", "a"],
                "b": ["PW", "{a}b"],
                "c": ["KR", "{b}c"]
            }"#,
        )
        .unwrap();
        assert_eq!(db.get("c").unwrap().letters, "abc");
    }

    #[test]
    fn test_unknown_reference() {
        let err = parse(r#"{"a": ["A", "{ghost}"]}"#).unwrap_err();
        assert!(matches!(err, StenolexError::UnknownReference { .. }));
    }

    #[test]
    fn test_reference_cycle() {
        let err = parse(
            r#"{
                "a": ["A", "{b}"],
                "b": ["PW", "{a}"]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, StenolexError::CircularReference { .. }));
    }

    #[test]
    fn test_bad_flags() {
        let err = parse(r#"{"a": ["A", "a", "sneaky"]}"#).unwrap_err();
        assert!(matches!(err, StenolexError::BadFlags { .. }));
    }

    #[test]
    fn test_malformed_row() {
        let err = parse(r#"{"a": ["A"]}"#).unwrap_err();
        assert!(matches!(err, StenolexError::MalformedRule { fields: 1, .. }));
    }

    #[test]
    fn test_unterminated_reference() {
        let err = parse(r#"{"a": ["A", "{oops"]}"#).unwrap_err();
        assert!(matches!(err, StenolexError::BadPattern { .. }));
    }
}
