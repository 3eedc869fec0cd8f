//! Implementation of the `textnorm candidates` command.

use clap::Args;

use crate::commands::LocaleArgs;
use crate::output::table::format_candidates_table;

/// Arguments for the candidates command.
#[derive(Debug, Args)]
pub struct CandidatesArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Text to normalize
    pub text: String,

    /// Maximum number of candidates to show
    #[arg(long, default_value_t = 5)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the candidates command.
pub fn run_candidates(args: CandidatesArgs) -> miette::Result<i32> {
    let normalizer = args.locale.load()?;
    let candidates = normalizer
        .candidates(&args.text, args.limit)
        .map_err(|e| miette::miette!("{}", e))?;

    if candidates.is_empty() {
        eprintln!("No grammar covers the input: {}", args.text);
        return Ok(exitcode::DATAERR);
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&candidates)
                .expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_candidates_table(&candidates));
    }
    Ok(exitcode::OK)
}
