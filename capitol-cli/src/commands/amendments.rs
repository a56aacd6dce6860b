//! `capitol amendments` — scrape, reconcile, and load amendment metadata.
//!
//! Amendments always load, regardless of the batch flag: amendment records
//! cross-reference bills and votes, so an unchanged file can still matter.

use anyhow::{Context, Result};
use clap::Args;

use capitol_runner::scrapers;
use capitol_sync::batch;

use crate::IngestArgs;

/// Arguments for `capitol amendments`.
#[derive(Args, Debug)]
pub struct AmendmentsArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl AmendmentsArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();

        if !self.ingest.skip_scrape {
            scrapers::scrape_amendments(&self.ingest.scraper_root, &cfg)
                .run()
                .context("amendment scrape failed")?;
        }

        let summary = batch::sync_amendments(
            &self.ingest.scraper_root,
            &self.ingest.data_root,
            congress,
        )
        .context("amendment reconciliation failed")?;
        super::print_batch(&format!("amendments {congress}"), &summary);

        if !self.ingest.skip_scrape {
            scrapers::load_congress_data(&cfg, "amendment")
                .run()
                .context("amendment load failed")?;
        }

        Ok(())
    }
}
