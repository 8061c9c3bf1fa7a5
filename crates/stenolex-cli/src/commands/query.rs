//! # Query Command

use stenolex::Connection;

use crate::commands::build_analyzer;

/// Args for the query command.
#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Steno outline in RTFCRE form.
    pub keys: String,

    /// The text the outline writes.
    pub letters: String,

    /// Discard partial results: either every key matches, or the whole
    /// outline is reported unmatched.
    #[clap(long)]
    pub match_all_keys: bool,

    /// Rules declaration file overriding the built-in set.
    #[clap(long)]
    pub rules: Option<String>,
}

pub fn run_query(args: &QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = build_analyzer(&args.rules)?;
    let analysis = analyzer.query(&args.keys, &args.letters, args.match_all_keys);

    println!("{} -> {:?}", analysis.keys, analysis.letters);
    for node in &analysis.connections {
        match &node.connection {
            Connection::Rule(rule) => {
                let span = &analysis.letters[node.start..node.start + node.length];
                println!(
                    "  {:<12} {:<12} [{}..{})  {:?}",
                    rule.id,
                    rule.keys,
                    node.start,
                    node.start + node.length,
                    span,
                );
            }
            Connection::Unmatched { keys } => {
                println!(
                    "  {:<12} {:<12} [{}..{})  (unmatched)",
                    "?",
                    keys,
                    node.start,
                    node.start + node.length,
                );
            }
        }
    }
    if analysis.is_complete() {
        log::debug!("Every key was matched.");
    }
    Ok(())
}
