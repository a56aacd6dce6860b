//! `capitol bills` — scrape, reconcile, and load bill metadata.

use anyhow::{Context, Result};
use clap::Args;

use capitol_runner::scrapers;
use capitol_sync::batch::{self, LoadPolicy};
use capitol_sync::BatchSummary;

use crate::IngestArgs;

/// Arguments for `capitol bills`.
#[derive(Args, Debug)]
pub struct BillsArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl BillsArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();

        if !self.ingest.skip_scrape {
            scrapers::scrape_bills(&self.ingest.scraper_root, &cfg)
                .run()
                .context("bill scrape failed")?;
        }

        let summary: BatchSummary = batch::sync_bills(
            &cfg,
            &self.ingest.scraper_root,
            &self.ingest.data_root,
            congress,
        )
        .context("bill reconciliation failed")?;
        super::print_batch(&format!("bills {congress}"), &summary);

        if !self.ingest.skip_scrape {
            scrapers::generate_summaries(&self.ingest.sibling("gather"), congress)
                .run()
                .context("summary generation failed")?;

            if LoadPolicy::WhenChanged.should_load(&summary) {
                scrapers::load_congress_data(&cfg, "bill")
                    .run()
                    .context("bill load failed")?;
            } else {
                super::print_load_skipped("bill");
            }
        }

        Ok(())
    }
}
