//! `capitol photos` — import legislator photos from the congress-images
//! checkout and regenerate resized renditions for real changes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use capitol_runner::scrapers;
use capitol_sync::photos::{import_photos, resize_height, PhotoSubject, RESIZE_WIDTHS};

use crate::IngestArgs;

/// Arguments for `capitol photos`.
#[derive(Args, Debug)]
pub struct PhotosArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// YAML file listing the photos to import, entries of
    /// `{govtrack_id, bioguide_id}`. Only sitting members belong here.
    #[arg(long)]
    pub subjects: PathBuf,
}

impl PhotosArgs {
    pub fn run(self) -> Result<()> {
        let _cfg = self.ingest.config();

        let images = self.ingest.sibling("congress-images");
        if !self.ingest.skip_scrape {
            scrapers::git_pull_rebase(&images)
                .run()
                .context("images checkout refresh failed")?;
        }

        let raw = std::fs::read_to_string(&self.subjects)
            .with_context(|| format!("reading {}", self.subjects.display()))?;
        let subjects: Vec<PhotoSubject> = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing {}", self.subjects.display()))?;

        let imported = import_photos(
            &images.join("congress/original"),
            &self.ingest.data_root.join("photos"),
            &subjects,
        )
        .context("photo import failed")?;
        println!(
            "{} photos — {} imported of {} candidates",
            "✓".green().bold(),
            imported.len(),
            subjects.len()
        );

        if !self.ingest.skip_scrape {
            for photo in &imported {
                for width in RESIZE_WIDTHS {
                    scrapers::resize_photo(
                        &photo.path,
                        &photo.resized_path(width),
                        width,
                        resize_height(width),
                    )
                    .run()
                    .with_context(|| {
                        format!("resizing {} to {width}px", photo.path.display())
                    })?;
                }
            }
        }

        Ok(())
    }
}
