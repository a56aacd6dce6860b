//! `capitol text` — mirror bill text into the legacy tree.
//!
//! Runs the FDSys and deepbills mirrors, hard-links every text version into
//! `bills.text/`, runs the legacy Perl gatherers, and then always loads
//! bills: text availability may have changed even when no metadata file did.

use anyhow::{Context, Result};
use clap::Args;

use capitol_runner::scrapers::{self, TextGatherStage};
use capitol_sync::text::link_bill_text;

use crate::IngestArgs;

/// Arguments for `capitol text`.
#[derive(Args, Debug)]
pub struct TextArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl TextArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();

        if !self.ingest.skip_scrape {
            scrapers::scrape_bill_text(&self.ingest.scraper_root, &cfg)
                .run()
                .context("FDSys bill-text mirror failed")?;
            scrapers::scrape_deepbills(&self.ingest.scraper_root, &cfg)
                .run()
                .context("deepbills mirror failed")?;
        }

        let tally = link_bill_text(
            &cfg,
            &self.ingest.scraper_root,
            &self.ingest.data_root,
            congress.0..=congress.0,
        )
        .context("bill-text link mirroring failed")?;
        super::print_tally("bill text", &tally);

        if !self.ingest.skip_scrape {
            let gather = self.ingest.sibling("gather");
            scrapers::fetch_bill_text(&gather, TextGatherStage::FullText, congress)
                .run()
                .context("legacy full-text fetch failed")?;
            scrapers::fetch_bill_text(&gather, TextGatherStage::Generate, congress)
                .run()
                .context("legacy text generation failed")?;

            scrapers::load_congress_data(&cfg, "bill")
                .run()
                .context("bill load failed")?;
        }

        Ok(())
    }
}
