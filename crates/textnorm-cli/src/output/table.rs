//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use textnorm::Candidate;

/// Format ranked candidates as an ASCII table.
pub fn format_candidates_table(candidates: &[Candidate]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Written form", "Weight"]);

    for (rank, candidate) in candidates.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            candidate.output.clone(),
            format!("{:.4}", candidate.weight),
        ]);
    }

    table
}
