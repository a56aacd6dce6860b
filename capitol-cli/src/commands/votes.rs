//! `capitol votes` — scrape, reconcile, and load roll-call votes.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;

use capitol_core::types::Session;
use capitol_runner::scrapers;
use capitol_sync::batch::{self, LoadPolicy};

use crate::IngestArgs;

/// Arguments for `capitol votes`.
#[derive(Args, Debug)]
pub struct VotesArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Gate the vote load on the batch change flag. By default votes load
    /// unconditionally, because amendments can mark votes as missing data
    /// without touching the vote files themselves.
    #[arg(long)]
    pub only_if_changed: bool,
}

impl VotesArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();
        let session = Session(chrono::Local::now().year() as u16);

        if !self.ingest.skip_scrape {
            scrapers::scrape_votes(&self.ingest.scraper_root, &cfg, session)
                .run()
                .context("vote scrape failed")?;
        }

        let summary = batch::sync_votes(
            &self.ingest.scraper_root,
            &self.ingest.data_root,
            congress,
        )
        .context("vote reconciliation failed")?;
        super::print_batch(&format!("votes {congress}"), &summary);

        let policy = if self.only_if_changed {
            LoadPolicy::WhenChanged
        } else {
            LoadPolicy::Always
        };
        if !self.ingest.skip_scrape {
            if policy.should_load(&summary) {
                scrapers::load_congress_data(&cfg, "vote")
                    .run()
                    .context("vote load failed")?;
            } else {
                super::print_load_skipped("vote");
            }
        }

        Ok(())
    }
}
