//! textnorm CLI entry point.
//!
//! Command-line tools for running text normalization grammars:
//! - `textnorm normalize` - Normalize text to its written form
//! - `textnorm tag` - Show the token records the tagger produces
//! - `textnorm candidates` - Rank alternative written forms
//! - `textnorm plural` - Apply the plural transform

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_candidates, run_normalize, run_plural, run_tag, CandidatesArgs, NormalizeArgs, PluralArgs,
    TagArgs,
};

/// Text normalization tools.
#[derive(Debug, Parser)]
#[command(name = "textnorm")]
#[command(about = "Text normalization tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize text to its written form
    Normalize(NormalizeArgs),
    /// Show the token records the tagger produces
    Tag(TagArgs),
    /// Rank alternative written forms
    Candidates(CandidatesArgs),
    /// Apply the plural transform to a word
    Plural(PluralArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Normalize(args) => run_normalize(args),
        Commands::Tag(args) => run_tag(args),
        Commands::Candidates(args) => run_candidates(args),
        Commands::Plural(args) => run_plural(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
