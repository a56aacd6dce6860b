//! `capitol stats` — sponsorship and missed-votes analysis.

use anyhow::{Context, Result};
use clap::Args;

use capitol_runner::scrapers;

use crate::IngestArgs;

/// Arguments for `capitol stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl StatsArgs {
    pub fn run(self) -> Result<()> {
        let _cfg = self.ingest.config();
        let congress = self.ingest.congress();

        if self.ingest.skip_scrape {
            println!("stats is all collaborator work; nothing to do with --skip-scrape");
            return Ok(());
        }

        scrapers::sponsorship_analysis(congress)
            .run()
            .context("sponsorship analysis failed")?;
        scrapers::missed_votes(congress)
            .run()
            .context("missed-votes analysis failed")?;

        Ok(())
    }
}
