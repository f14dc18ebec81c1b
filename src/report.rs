use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use crate::pagerank::{Estimates, RankVector};

/// Renders `title` followed by one `  page: 0.1234` line per page, sorted by page.
pub fn format_ranks(title: &str, ranks: &RankVector) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for (page, rank) in ranks {
        let _ = writeln!(out, "  {}: {:.4}", page, rank);
    }
    out
}

/// Both result sections the way the CLI prints them
pub fn format_estimates(estimates: &Estimates) -> String {
    let sampled = format!("PageRank Results from Sampling (n = {})", estimates.config.samples);
    format!(
        "{}{}",
        format_ranks(&sampled, &estimates.sampled),
        format_ranks("PageRank Results from Iteration", &estimates.iterated)
    )
}

/// Writes the estimates and the parameters that produced them as pretty JSON.
pub fn write_json(path: &Path, estimates: &Estimates) -> Result<()> {
    let json = serde_json::to_string_pretty(estimates)?;
    std::fs::write(path, json)?;
    Ok(())
}
