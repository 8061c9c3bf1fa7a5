//! # Translation Size Filter

use crate::types::TranslationsDict;

/// Threshold filter dropping long translations before index generation.
/// The size is relative: essentially the maximum string length kept.
#[derive(Debug, Clone, Copy)]
pub struct TranslationSizeFilter {
    size: usize,
}

impl TranslationSizeFilter {
    /// Below this size, the filter blocks everything (a dummy run).
    pub const SIZE_MINIMUM: usize = 1;
    /// A fast index with relatively simple words.
    pub const SIZE_SMALL: usize = 10;
    /// An average-sized index (the default).
    pub const SIZE_MEDIUM: usize = 12;
    /// A slower index with more advanced words.
    pub const SIZE_LARGE: usize = 15;
    /// At this size and above, filtering is disabled.
    pub const SIZE_MAXIMUM: usize = 20;

    /// A filter keeping translations of at most `size` characters.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Return a new dictionary with `translations` filtered down to the
    /// configured size.
    pub fn filter(&self, translations: &TranslationsDict) -> TranslationsDict {
        if self.size < Self::SIZE_MINIMUM {
            return TranslationsDict::new();
        }
        if self.size >= Self::SIZE_MAXIMUM {
            return translations.clone();
        }
        translations
            .iter()
            .filter(|(keys, letters)| {
                keys.chars().count() <= self.size && letters.chars().count() <= self.size
            })
            .map(|(keys, letters)| (keys.clone(), letters.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations() -> TranslationsDict {
        [
            ("TEFT", "test"),
            ("PHROFR", "plover"),
            ("PHROFR/TEFT", "plover test"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_below_minimum_blocks_everything() {
        let filter = TranslationSizeFilter::new(TranslationSizeFilter::SIZE_MINIMUM - 1);
        assert!(filter.filter(&translations()).is_empty());
    }

    #[test]
    fn test_maximum_keeps_everything() {
        let filter = TranslationSizeFilter::new(TranslationSizeFilter::SIZE_MAXIMUM);
        assert_eq!(filter.filter(&translations()), translations());
    }

    #[test]
    fn test_thresholds_apply_to_both_strings() {
        let filter = TranslationSizeFilter::new(6);
        let kept = filter.filter(&translations());
        assert_eq!(kept.len(), 2);
        assert!(!kept.contains_key("PHROFR/TEFT"));
        for (keys, letters) in &kept {
            assert!(keys.chars().count() <= 6);
            assert!(letters.chars().count() <= 6);
        }
    }
}
