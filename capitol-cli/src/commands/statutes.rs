//! `capitol statutes` — backfill statute-era bills from GPO's Statutes at
//! Large, congresses 82 through 92.

use anyhow::{Context, Result};
use clap::Args;

use capitol_core::types::Congress;
use capitol_runner::scrapers;
use capitol_sync::batch;

use crate::IngestArgs;

const STATUTE_CONGRESSES: std::ops::RangeInclusive<u16> = 82..=92;

/// Arguments for `capitol statutes`.
#[derive(Args, Debug)]
pub struct StatutesArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl StatutesArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();

        if !self.ingest.skip_scrape {
            scrapers::scrape_statute_mods(&self.ingest.scraper_root)
                .run()
                .context("STATUTE mods mirror failed")?;
            scrapers::scrape_statutes(&self.ingest.scraper_root, "65-86", false)
                .run()
                .context("statutes 65-86 scrape failed")?;
            scrapers::scrape_statutes(&self.ingest.scraper_root, "87-106", true)
                .run()
                .context("statutes 87-106 scrape failed")?;
        }

        // Text versions stay where the scraper put them; only the bill
        // metadata moves into the legacy tree, one congress at a time.
        for number in STATUTE_CONGRESSES {
            let congress = Congress(number);
            let summary = batch::sync_bills(
                &cfg,
                &self.ingest.scraper_root,
                &self.ingest.data_root,
                congress,
            )
            .with_context(|| format!("bill reconciliation failed for congress {congress}"))?;
            super::print_batch(&format!("bills {congress}"), &summary);

            if !self.ingest.skip_scrape {
                scrapers::load_statute_bills(congress)
                    .run()
                    .with_context(|| format!("bill load failed for congress {congress}"))?;
            }
        }

        Ok(())
    }
}
