//! Implementation of the `textnorm plural` command.

use clap::Args;
use serde::Serialize;

use crate::commands::LocaleArgs;

/// Arguments for the plural command.
#[derive(Debug, Args)]
pub struct PluralArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Word to transform
    pub word: String,

    /// Singularize instead of pluralize
    #[arg(long)]
    pub singular: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for plural results.
#[derive(Serialize)]
pub struct PluralResult {
    pub word: String,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let normalizer = args.locale.load()?;
    let pluralizer = normalizer
        .pluralizer()
        .map_err(|e| miette::miette!("{}", e))?;

    let transformed = if args.singular {
        pluralizer.singularize(&args.word)
    } else {
        Some(pluralizer.pluralize(&args.word))
    };

    match transformed {
        Some(word) => {
            if args.json {
                let output = PluralResult { word };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", word);
            }
            Ok(exitcode::OK)
        }
        None => {
            eprintln!("'{}' does not look like a plural", args.word);
            Ok(exitcode::DATAERR)
        }
    }
}
