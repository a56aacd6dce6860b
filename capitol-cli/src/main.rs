//! Capitol — legislative-data ingestion orchestrator.
//!
//! # Usage
//!
//! ```text
//! capitol bills        [--congress N] [--scraper-root DIR] [--data-root DIR]
//! capitol amendments   [shared flags]
//! capitol votes        [shared flags] [--only-if-changed]
//! capitol text         [shared flags]
//! capitol people       [shared flags]
//! capitol committees   [shared flags]
//! capitol statutes     [shared flags]
//! capitol photos       [shared flags] --subjects FILE
//! capitol stats        [shared flags]
//! capitol plan         <bills|amendments|votes> [shared flags] [--json]
//! ```
//!
//! Shared flags: `--congress` (env `CONGRESS`), `--scraper-root`,
//! `--data-root`, `--full-scan`, `--cache`, `--debug` (env `DEBUG`),
//! `--skip-scrape` (reconcile files only, no collaborator processes).

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use capitol_core::config::{FetchMode, LogLevel};
use capitol_core::types::Congress;
use capitol_core::IngestConfig;

use commands::{
    amendments::AmendmentsArgs, bills::BillsArgs, committees::CommitteesArgs,
    people::PeopleArgs, photos::PhotosArgs, plan::PlanArgs, statutes::StatutesArgs,
    stats::StatsArgs, text::TextArgs, votes::VotesArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "capitol",
    version,
    about = "Orchestrate legislative-data ingestion into the legacy data tree",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape bill metadata, reconcile it, and load changed batches.
    Bills(BillsArgs),

    /// Scrape amendment metadata, reconcile it, and load.
    Amendments(AmendmentsArgs),

    /// Scrape roll-call votes, reconcile them, and load.
    Votes(VotesArgs),

    /// Mirror bill text into the legacy tree and refresh text-derived data.
    Text(TextArgs),

    /// Refresh legislator files and publish them to the public tree.
    People(PeopleArgs),

    /// Refresh committee metadata and scrape committee meetings.
    Committees(CommitteesArgs),

    /// Backfill statute-era bills (82nd through 92nd congresses).
    Statutes(StatutesArgs),

    /// Import legislator photos and regenerate resized renditions.
    Photos(PhotosArgs),

    /// Run sponsorship and missed-votes analysis.
    Stats(StatsArgs),

    /// Show what a sync would copy, without writing anything.
    Plan(PlanArgs),
}

// ---------------------------------------------------------------------------
// Shared ingest flags
// ---------------------------------------------------------------------------

/// Flags every batch command shares; flattened into each subcommand.
#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    /// Congress to process.
    #[arg(long, env = "CONGRESS", default_value_t = 113)]
    pub congress: u16,

    /// Congress scraper checkout whose data/ tree is read.
    #[arg(long, default_value = "../scripts/congress")]
    pub scraper_root: PathBuf,

    /// Legacy data tree written by reconciliation.
    #[arg(long, default_value = "data")]
    pub data_root: PathBuf,

    /// Full re-download scan instead of the fast incremental fetch.
    #[arg(long)]
    pub full_scan: bool,

    /// Allow cached fetches of recent documents.
    #[arg(long, conflicts_with = "full_scan")]
    pub cache: bool,

    /// Debug logging, here and in collaborator --log flags.
    #[arg(long, env = "DEBUG")]
    pub debug: bool,

    /// Reconcile files only; run no collaborator processes.
    #[arg(long)]
    pub skip_scrape: bool,
}

impl IngestArgs {
    /// Build the immutable run configuration and install the log subscriber.
    pub fn config(&self) -> IngestConfig {
        init_tracing(self.debug);

        let fetch_mode = if self.cache {
            FetchMode::Fast
        } else if self.full_scan {
            FetchMode::Force
        } else {
            FetchMode::ForceFast
        };
        let log_level = if self.debug {
            LogLevel::Info
        } else {
            LogLevel::Error
        };

        IngestConfig {
            congress: Congress(self.congress),
            fetch_mode,
            log_level,
            ..IngestConfig::new(Congress(self.congress))
        }
    }

    pub fn congress(&self) -> Congress {
        Congress(self.congress)
    }

    /// A checkout that deploys beside the congress scraper
    /// (`gather`, `legacy-conversion`, `congress-images`).
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.scraper_root
            .parent()
            .unwrap_or(Path::new("."))
            .join(name)
    }

    /// The congress-legislators checkout inside the scraper tree.
    pub fn legislators_dir(&self) -> PathBuf {
        self.scraper_root.join("congress-legislators")
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Bills(args) => args.run(),
        Commands::Amendments(args) => args.run(),
        Commands::Votes(args) => args.run(),
        Commands::Text(args) => args.run(),
        Commands::People(args) => args.run(),
        Commands::Committees(args) => args.run(),
        Commands::Statutes(args) => args.run(),
        Commands::Photos(args) => args.run(),
        Commands::Stats(args) => args.run(),
        Commands::Plan(args) => args.run(),
    }
}
