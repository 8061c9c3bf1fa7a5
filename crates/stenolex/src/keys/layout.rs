//! # Steno Key Layout

use crate::errors::{SLResult, StenolexError};
use crate::types::{CommonHashMap, CommonHashSet};

/// Declarative configuration for a [`KeyLayout`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct KeyLayoutConfig {
    /// Stroke delimiter between strokes of a multi-stroke outline.
    pub sep: char,
    /// RTFCRE split delimiter between the left+center and right banks.
    pub split: char,
    /// Left-bank keys in steno order.
    pub left: String,
    /// Center keys in steno order.
    pub center: String,
    /// Right-bank keys in steno order (declared uppercase; lowercased in
    /// s-keys).
    pub right: String,
    /// Shift keys, each with its alias table (alias char -> raw key char).
    ///
    /// The number key is the main example: when held, top-row keys become
    /// digits, and those digits are allowed to appear literally in RTFCRE
    /// strings.
    pub shift_table: Vec<(char, Vec<(char, char)>)>,
    /// Keys allowed to defy steno order within a stroke.
    pub unordered: String,
}

impl KeyLayoutConfig {
    /// The standard English steno layout.
    pub fn english() -> Self {
        Self {
            sep: '/',
            split: '-',
            left: "#STKPWHR".into(),
            center: "AO*EU".into(),
            right: "FRPBLGTSDZ".into(),
            shift_table: vec![(
                '#',
                vec![
                    ('0', 'O'),
                    ('1', 'S'),
                    ('2', 'T'),
                    ('3', 'P'),
                    ('4', 'H'),
                    ('5', 'A'),
                    ('6', 'F'),
                    ('7', 'P'),
                    ('8', 'L'),
                    ('9', 'T'),
                ],
            )],
            unordered: "*".into(),
        }
    }
}

impl Default for KeyLayoutConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Steno key alphabet with pre-computed tables for fast conversion between
/// the RTFCRE and s-keys formats.
///
/// Built once at startup and read-only thereafter.
pub struct KeyLayout {
    sep: char,
    split: char,
    center_set: CommonHashSet<char>,
    right_lower_set: CommonHashSet<char>,
    shift_table: Vec<(char, CommonHashMap<char, char>)>,
    unordered: Vec<char>,
    /// Every character allowed in an RTFCRE stroke (keys and aliases; the
    /// split mark is handled structurally).
    valid: CommonHashSet<char>,
}

impl KeyLayout {
    /// Build the conversion tables from a configuration.
    pub fn new(config: &KeyLayoutConfig) -> Self {
        let center_set: CommonHashSet<char> = config.center.chars().collect();
        let right_lower_set: CommonHashSet<char> = config
            .right
            .chars()
            .flat_map(|c| c.to_lowercase())
            .collect();

        let shift_table: Vec<(char, CommonHashMap<char, char>)> = config
            .shift_table
            .iter()
            .map(|(shift, aliases)| (*shift, aliases.iter().copied().collect()))
            .collect();

        let mut valid: CommonHashSet<char> = config
            .left
            .chars()
            .chain(config.center.chars())
            .chain(config.right.chars())
            .collect();
        valid.insert(config.split);
        for (shift, aliases) in &shift_table {
            valid.insert(*shift);
            valid.extend(aliases.keys().copied());
        }

        Self {
            sep: config.sep,
            split: config.split,
            center_set,
            right_lower_set,
            shift_table,
            unordered: config.unordered.chars().collect(),
            valid,
        }
    }

    /// The standard English layout.
    pub fn english() -> Self {
        Self::new(&KeyLayoutConfig::english())
    }

    /// The stroke delimiter.
    pub fn sep(&self) -> char {
        self.sep
    }

    /// Keys allowed to defy steno order within a stroke.
    pub fn unordered_keys(&self) -> &[char] {
        &self.unordered
    }

    /// Convert an RTFCRE outline to s-keys.
    ///
    /// Fails with [`StenolexError::InvalidKey`] if any character is outside
    /// the configured alphabet. Callers with untrusted input should either
    /// [`cleanse`](Self::cleanse) first or treat the failure as "nothing
    /// matched".
    pub fn from_rtfcre(&self, s: &str) -> SLResult<String> {
        self.map_strokes(s, |stroke| self.stroke_to_skeys(stroke))
    }

    /// Convert an s-keys outline back to RTFCRE.
    pub fn to_rtfcre(&self, skeys: &str) -> String {
        // s-keys produced by this layout always convert back.
        self.map_strokes(skeys, |stroke| Ok(self.stroke_to_rtfcre(stroke)))
            .unwrap_or_default()
    }

    /// Drop every character that is not valid in an RTFCRE steno string.
    pub fn cleanse(&self, s: &str) -> String {
        s.chars()
            .filter(|c| *c == self.sep || self.valid.contains(c))
            .collect()
    }

    /// [`cleanse`](Self::cleanse), then convert to s-keys.
    ///
    /// Input formatting cannot be trusted when it comes from the user; this
    /// removes anything invalid before parsing as usual.
    pub fn cleanse_from_rtfcre(&self, s: &str) -> SLResult<String> {
        self.from_rtfcre(&self.cleanse(s))
    }

    /// Split an outline on the stroke delimiter, convert every stroke, and
    /// join the results back together.
    fn map_strokes<F>(&self, s: &str, convert: F) -> SLResult<String>
    where
        F: Fn(&str) -> SLResult<String>,
    {
        let mut out = String::with_capacity(s.len());
        for (i, stroke) in s.split(self.sep).enumerate() {
            if i > 0 {
                out.push(self.sep);
            }
            out.push_str(&convert(stroke)?);
        }
        Ok(out)
    }

    /// Convert one RTFCRE stroke: expand shift aliases, validate, split into
    /// banks, and lowercase the right side.
    fn stroke_to_skeys(&self, stroke: &str) -> SLResult<String> {
        let mut keys: Vec<char> = stroke.chars().collect();

        // Translate literal aliases (e.g. digits) into their raw keys with
        // the shift key prepended.
        for (shift, table) in &self.shift_table {
            if keys.iter().any(|c| table.contains_key(c)) {
                for c in keys.iter_mut() {
                    if let Some(raw) = table.get(c) {
                        *c = *raw;
                    }
                }
                keys.insert(0, *shift);
            }
        }

        for &c in &keys {
            if !self.valid.contains(&c) {
                return Err(StenolexError::InvalidKey {
                    key: c,
                    stroke: stroke.to_string(),
                });
            }
        }

        // An explicit split mark wins; the last one is authoritative.
        if let Some(i) = keys.iter().rposition(|&c| c == self.split) {
            let right = keys.split_off(i + 1);
            keys.pop();
            return Ok(Self::join_lowercase_right(&keys, &right));
        }
        // Otherwise the split point sits after the last center key.
        // Allowable combinations up to here are L, LC, LCR, CR.
        if let Some(i) = keys.iter().rposition(|c| self.center_set.contains(c)) {
            let right = keys.split_off(i + 1);
            return Ok(Self::join_lowercase_right(&keys, &right));
        }
        // No center keys: the whole stroke is left-bank only.
        Ok(keys.into_iter().collect())
    }

    fn join_lowercase_right(left: &[char], right: &[char]) -> String {
        left.iter()
            .copied()
            .chain(right.iter().flat_map(|c| c.to_lowercase()))
            .collect()
    }

    /// Convert one s-keys stroke: find the first right-bank key, insert the
    /// split mark before it when a center key does not already disambiguate,
    /// and uppercase. Strokes without right-bank keys pass through unchanged.
    fn stroke_to_rtfcre(&self, stroke: &str) -> String {
        let keys: Vec<char> = stroke.chars().collect();
        for (i, c) in keys.iter().enumerate() {
            if self.right_lower_set.contains(c) {
                let mut out: Vec<char> = keys[..i].to_vec();
                if i == 0 || !self.center_set.contains(&keys[i - 1]) {
                    out.push(self.split);
                }
                out.extend_from_slice(&keys[i..]);
                return out
                    .into_iter()
                    .flat_map(|c| c.to_uppercase())
                    .collect();
            }
        }
        stroke.to_string()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn layout() -> KeyLayout {
        KeyLayout::english()
    }

    #[test]
    fn test_from_rtfcre_basic() {
        let kl = layout();
        assert_eq!(kl.from_rtfcre("TEFT").unwrap(), "TEft");
        assert_eq!(kl.from_rtfcre("TP-PB").unwrap(), "TPpb");
        assert_eq!(kl.from_rtfcre("HEL/LOE").unwrap(), "HEl/LOE");
        assert_eq!(kl.from_rtfcre("STKPW").unwrap(), "STKPW");
        assert_eq!(kl.from_rtfcre("").unwrap(), "");
    }

    #[test]
    fn test_from_rtfcre_split_mark() {
        let kl = layout();
        // Explicit split beats the center-key heuristic.
        assert_eq!(kl.from_rtfcre("-FR").unwrap(), "fr");
        assert_eq!(kl.from_rtfcre("S-S").unwrap(), "Ss");
    }

    #[test]
    fn test_from_rtfcre_aliases() {
        let kl = layout();
        // Digits expand to raw keys with the number key prepended.
        assert_eq!(kl.from_rtfcre("123").unwrap(), "#STP");
        assert_eq!(kl.from_rtfcre("1-9").unwrap(), "#St");
        // Already-shifted strokes pass through.
        assert_eq!(kl.from_rtfcre("#S").unwrap(), "#S");
    }

    #[test]
    fn test_from_rtfcre_invalid() {
        let kl = layout();
        let err = kl.from_rtfcre("XYZ").unwrap_err();
        assert!(matches!(
            err,
            StenolexError::InvalidKey { key: 'X', .. }
        ));
    }

    #[test]
    fn test_to_rtfcre_basic() {
        let kl = layout();
        assert_eq!(kl.to_rtfcre("TEft"), "TEFT");
        assert_eq!(kl.to_rtfcre("TPpb"), "TP-PB");
        assert_eq!(kl.to_rtfcre("fr"), "-FR");
        assert_eq!(kl.to_rtfcre("HEl/LOE"), "HEL/LOE");
        assert_eq!(kl.to_rtfcre("STKPW"), "STKPW");
    }

    #[test]
    fn test_cleanse() {
        let kl = layout();
        assert_eq!(kl.cleanse("XYZ"), "Z");
        assert_eq!(kl.cleanse("TE!FT"), "TEFT");
        assert_eq!(kl.cleanse_from_rtfcre("TE?FT").unwrap(), "TEft");
    }

    /// One well-formed s-keys stroke: an ordered subset of the left, center,
    /// and (lowercased) right banks, non-empty.
    fn skeys_stroke() -> impl Strategy<Value = String> {
        let subset = |bank: &'static str| {
            proptest::collection::vec(proptest::bool::ANY, bank.len())
                .prop_map(move |mask| -> String {
                    bank.chars()
                        .zip(mask)
                        .filter_map(|(c, keep)| keep.then_some(c))
                        .collect()
                })
        };
        (subset("#STKPWHR"), subset("AO*EU"), subset("frpblgtsdz"))
            .prop_map(|(l, c, r)| format!("{l}{c}{r}"))
            .prop_filter("stroke must be non-empty", |s| !s.is_empty())
    }

    proptest! {
        #[test]
        fn roundtrip_well_formed_outlines(
            strokes in proptest::collection::vec(skeys_stroke(), 1..4),
        ) {
            let kl = layout();
            let skeys = strokes.join("/");
            let rtfcre = kl.to_rtfcre(&skeys);
            prop_assert_eq!(kl.from_rtfcre(&rtfcre).unwrap(), skeys);
        }

        #[test]
        fn cleansed_conversion_never_fails(s in "\\PC{0,24}") {
            let kl = layout();
            kl.cleanse_from_rtfcre(&s).unwrap();
        }
    }
}
