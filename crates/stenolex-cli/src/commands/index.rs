//! # Index Command

use std::time::Instant;

use stenolex::{IndexBuilder, ParallelMapper, TranslationSizeFilter};

use crate::commands::build_analyzer;

/// Args for the index command.
#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    /// Translations dictionaries (JSON) to analyze.
    #[clap(required = true)]
    pub translations: Vec<String>,

    /// Relative size of the generated index (1-20); essentially the maximum
    /// translation length kept.
    #[clap(long, default_value_t = TranslationSizeFilter::SIZE_MEDIUM as u64,
           value_parser = clap::value_parser!(u64).range(1..=TranslationSizeFilter::SIZE_MAXIMUM as u64))]
    pub size: u64,

    /// Worker processes for parallel execution (0 = one per CPU core).
    #[clap(long, default_value_t = 0)]
    pub processes: usize,

    /// Output path for the examples index.
    #[clap(long, default_value = "index.json")]
    pub output: String,

    /// Rules declaration file overriding the built-in set.
    #[clap(long)]
    pub rules: Option<String>,
}

pub fn run_index(args: &IndexArgs) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = build_analyzer(&args.rules)?;

    log::info!("Operation started...");
    let start = Instant::now();

    let translations = stenolex::io::load_json_translations(&args.translations)?;
    let mapper = ParallelMapper::new(args.processes, true);
    let builder = IndexBuilder::new(&analyzer, mapper);
    let index = builder.compile_index(&translations, args.size as usize)?;
    stenolex::io::save_json_index(&args.output, &index)?;

    log::info!("Operation done in {:.1} seconds.", start.elapsed().as_secs_f64());
    Ok(())
}
