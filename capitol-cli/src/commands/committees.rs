//! `capitol committees` — refresh committee metadata and meetings.

use anyhow::{bail, Context, Result};
use clap::Args;

use capitol_core::IngestConfig;
use capitol_runner::scrapers;

use crate::IngestArgs;

/// Arguments for `capitol committees`.
#[derive(Args, Debug)]
pub struct CommitteesArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl CommitteesArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();

        // Committee rosters only describe the sitting congress.
        if congress != IngestConfig::CURRENT_CONGRESS {
            bail!(
                "committee ingestion only runs against the current congress ({})",
                IngestConfig::CURRENT_CONGRESS
            );
        }

        if self.ingest.skip_scrape {
            println!("committees is all collaborator work; nothing to do with --skip-scrape");
            return Ok(());
        }

        let legislators = self.ingest.legislators_dir();
        for command in scrapers::git_refresh(&legislators) {
            command.run().context("legislators checkout refresh failed")?;
        }

        let script = self
            .ingest
            .sibling("legacy-conversion")
            .join("convert_committees.py");
        let out = self
            .ingest
            .data_root
            .join("us")
            .join(congress.to_string())
            .join("committees.xml");
        scrapers::convert_committees(&script, &self.ingest.scraper_root, &legislators, &out)
            .run()
            .context("committee conversion failed")?;

        scrapers::scrape_committee_meetings(&self.ingest.scraper_root, &cfg)
            .run()
            .context("committee meetings scrape failed")?;

        scrapers::load_committees()
            .run()
            .context("committee load failed")?;

        Ok(())
    }
}
