//! # Rule Flags

use std::str::FromStr;

use strum::EnumString;

/// A single flag from a rule declaration's pipe-delimited flag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RuleFlag {
    /// Handled only by the special matcher, under a well-known id.
    Special,
    /// Matched only against one complete stroke.
    Stroke,
    /// Matched only against one whole whitespace-delimited word.
    Word,
    /// Uncommon in usage and/or prone to false positives; loses ranking
    /// tie-breaks.
    Rare,
    /// Only referenced from other rules' patterns; never matched directly.
    Reference,
}

/// The parsed flag set of one rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleFlags {
    /// See [`RuleFlag::Special`].
    pub special: bool,
    /// See [`RuleFlag::Stroke`].
    pub stroke: bool,
    /// See [`RuleFlag::Word`].
    pub word: bool,
    /// See [`RuleFlag::Rare`].
    pub rare: bool,
    /// See [`RuleFlag::Reference`].
    pub reference: bool,
}

impl RuleFlags {
    /// Parse a pipe-delimited flag field such as `"stroke|rare"`.
    ///
    /// Empty fields parse to no flags. The error value is the first unknown
    /// flag name.
    pub fn parse(field: &str) -> Result<Self, String> {
        let mut flags = Self::default();
        for name in field.split('|') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match RuleFlag::from_str(name) {
                Ok(RuleFlag::Special) => flags.special = true,
                Ok(RuleFlag::Stroke) => flags.stroke = true,
                Ok(RuleFlag::Word) => flags.word = true,
                Ok(RuleFlag::Rare) => flags.rare = true,
                Ok(RuleFlag::Reference) => flags.reference = true,
                Err(_) => return Err(name.to_string()),
            }
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(RuleFlags::parse("").unwrap(), RuleFlags::default());
        let flags = RuleFlags::parse("stroke|rare").unwrap();
        assert!(flags.stroke && flags.rare);
        assert!(!flags.special && !flags.word && !flags.reference);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(RuleFlags::parse("stroke|bogus").unwrap_err(), "bogus");
    }
}
