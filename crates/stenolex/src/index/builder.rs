//! # Examples Index Builder

use crate::analyzer::StenoAnalyzer;
use crate::errors::SLResult;
use crate::index::TranslationSizeFilter;
use crate::parallel::ParallelMapper;
use crate::types::{ExamplesIndex, TranslationsDict};

/// Builds the inverted examples index by running the analyzer over a
/// filtered translations dictionary.
pub struct IndexBuilder<'a> {
    analyzer: &'a StenoAnalyzer,
    mapper: ParallelMapper,
}

impl<'a> IndexBuilder<'a> {
    /// A builder fanning analysis out through `mapper`.
    pub fn new(analyzer: &'a StenoAnalyzer, mapper: ParallelMapper) -> Self {
        Self { analyzer, mapper }
    }

    /// Build the index: filter `translations` by `size`, analyze every
    /// survivor, and invert the results into rule id -> translations.
    ///
    /// Rebuilding over the same input yields an equal index. Within one
    /// rule's bucket, later entries for the same outline overwrite earlier
    /// ones.
    pub fn compile_index(
        &self,
        translations: &TranslationsDict,
        size: usize,
    ) -> SLResult<ExamplesIndex> {
        let filtered = TranslationSizeFilter::new(size).filter(translations);
        log::info!(
            "Analyzing {} of {} translations...",
            filtered.len(),
            translations.len()
        );
        let items: Vec<(String, String)> = filtered.into_iter().collect();
        let results = self.mapper.starmap(
            |(keys, letters): &(String, String)| self.analyzer.parallel_query(keys, letters),
            items,
        )?;

        let mut index = ExamplesIndex::new();
        for row in results {
            let mut fields = row.into_iter();
            let (Some(keys), Some(letters)) = (fields.next(), fields.next()) else {
                continue;
            };
            for rule_id in fields {
                index
                    .entry(rule_id)
                    .or_default()
                    .insert(keys.clone(), letters.clone());
            }
        }
        Ok(index)
    }
}
