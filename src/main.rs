use anyhow::Result;
use log2::*;
use std::time::Instant;

use PageRanker::{config, corpus, pagerank, report};

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("PageRanker")) // include only modules having this pattern
        .level(cfg.log_level.to_string())
        .start();

    let graph = corpus::crawl(&cfg.corpus)?;
    debug!("{} dangling pages", graph.dangling_pages().count());

    let estimates = match pagerank::estimate(&graph, &cfg.rank_config()) {
        Ok(estimates) => estimates,
        Err(e) => {
            error!("PageRank failed: {}", e);
            return Err(e.into());
        }
    };

    print!("{}", report::format_estimates(&estimates));

    if let Some(path) = &cfg.output_file {
        report::write_json(path, &estimates)?;
        info!("Report written to {:?}", path);
    }

    info!("Finished in {:?}", START_TIME.elapsed());
    Ok(())
}
