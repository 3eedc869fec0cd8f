//! Implementation of the `textnorm normalize` command.

use clap::Args;
use serde::Serialize;

use crate::commands::LocaleArgs;

/// Arguments for the normalize command.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Text to normalize
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for normalize results.
#[derive(Serialize)]
pub struct NormalizeResult {
    pub written: String,
}

/// Run the normalize command.
pub fn run_normalize(args: NormalizeArgs) -> miette::Result<i32> {
    let normalizer = args.locale.load()?;
    let written = normalizer
        .normalize(&args.text)
        .map_err(|e| miette::miette!("{}", e))?;

    match written {
        Some(written) => {
            if args.json {
                let output = NormalizeResult { written };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", written);
            }
            Ok(exitcode::OK)
        }
        None => {
            if args.json {
                let output = serde_json::json!({
                    "error": "input not covered by the loaded grammars"
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("No grammar covers the input: {}", args.text);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
