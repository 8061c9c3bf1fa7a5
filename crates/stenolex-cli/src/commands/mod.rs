//! # Subcommand Dispatch

mod index;
mod query;

pub use index::IndexArgs;
pub use query::QueryArgs;

use std::sync::Arc;

use stenolex::{KeyLayout, RuleDatabase, StenoAnalyzer};

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build an examples index from translations dictionaries.
    Index(IndexArgs),
    /// Analyze a single outline/translation pair.
    Query(QueryArgs),
}

impl Commands {
    /// Run the selected subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Index(args) => index::run_index(args),
            Commands::Query(args) => query::run_query(args),
        }
    }
}

/// Build an analyzer from a rules file, or from the built-in rule set.
pub fn build_analyzer(
    rules_path: &Option<String>,
) -> Result<StenoAnalyzer, Box<dyn std::error::Error>> {
    let layout = Arc::new(KeyLayout::english());
    let rules = match rules_path {
        Some(path) => {
            let raw = stenolex::io::load_raw_rules(&[path])?;
            RuleDatabase::from_raw(&raw, &layout)?
        }
        None => RuleDatabase::builtin(&layout)?,
    };
    log::debug!("Loaded {} rules.", rules.len());
    Ok(StenoAnalyzer::from_rules(layout, &rules))
}
