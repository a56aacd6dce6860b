//! `capitol people` — refresh legislator data and publish it.

use anyhow::{bail, Context, Result};
use clap::Args;

use capitol_core::IngestConfig;
use capitol_runner::scrapers;
use capitol_sync::people::link_people_files;

use crate::IngestArgs;

/// Arguments for `capitol people`.
#[derive(Args, Debug)]
pub struct PeopleArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

impl PeopleArgs {
    pub fn run(self) -> Result<()> {
        let _cfg = self.ingest.config();
        let congress = self.ingest.congress();

        // Legislator rosters only describe the sitting congress.
        if congress != IngestConfig::CURRENT_CONGRESS {
            bail!(
                "people ingestion only runs against the current congress ({})",
                IngestConfig::CURRENT_CONGRESS
            );
        }

        let legislators = self.ingest.legislators_dir();
        if !self.ingest.skip_scrape {
            for command in scrapers::git_refresh(&legislators) {
                command.run().context("legislators checkout refresh failed")?;
            }

            let us_dir = self.ingest.data_root.join("us");
            std::fs::create_dir_all(us_dir.join(congress.to_string()))
                .with_context(|| format!("creating {}", us_dir.display()))?;

            let script = self.ingest.sibling("legacy-conversion").join("convert_people.py");
            scrapers::convert_people(
                &script,
                &legislators,
                &us_dir.join("people_legacy.xml"),
                &us_dir.join("people.xml"),
                false,
            )
            .run()
            .context("people conversion failed")?;
            scrapers::convert_people(
                &script,
                &legislators,
                &us_dir.join("people_legacy.xml"),
                &us_dir.join(congress.to_string()).join("people.xml"),
                true,
            )
            .run()
            .context("current-congress people conversion failed")?;
            scrapers::alternate_bulk_formats(&legislators)
                .run()
                .context("alternate-format generation failed")?;
        }

        let tally = link_people_files(
            &legislators,
            &self.ingest.data_root.join("congress-legislators"),
        )
        .context("publishing legislator files failed")?;
        super::print_tally("congress-legislators", &tally);

        if !self.ingest.skip_scrape {
            scrapers::load_people().run().context("person load failed")?;
            scrapers::update_person_index()
                .run()
                .context("person index refresh failed")?;
            scrapers::dump_person_fixture(
                &self.ingest.data_root.join("db/django-fixture-people.json"),
            )
            .run()
            .context("person fixture dump failed")?;
        }

        Ok(())
    }
}
