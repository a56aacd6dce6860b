//! `capitol plan` — the reconciliation plan, without writing anything.
//!
//! Discovery, path grammar, and fingerprint comparison run exactly as a
//! sync would; the filesystem is never touched. Useful for inspecting what
//! a batch would do before letting the scrapers and loaders loose.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use capitol_core::types::Congress;
use capitol_core::ValidationError;
use capitol_discover::{listing, PathGrammar};
use capitol_sync::{fingerprint, Mask};

use crate::IngestArgs;

/// Arguments for `capitol plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Which batch to plan.
    #[arg(value_enum)]
    pub kind: PlanKind,

    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PlanKind {
    Bills,
    Amendments,
    Votes,
}

/// What one reconciliation would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum PlanAction {
    /// Destination missing; the file would be created.
    Create,
    /// Real content differs; the file would be overwritten.
    Update,
    /// Masked fingerprints match; nothing would be written.
    Unchanged,
}

impl PlanAction {
    fn label(self) -> &'static str {
        match self {
            PlanAction::Create => "create",
            PlanAction::Update => "update",
            PlanAction::Unchanged => "unchanged",
        }
    }
}

#[derive(Serialize)]
struct PlanRow {
    source: PathBuf,
    destination: PathBuf,
    action: PlanAction,
}

#[derive(Tabled)]
struct PlanTableRow {
    #[tabled(rename = "source")]
    source: String,
    #[tabled(rename = "destination")]
    destination: String,
    #[tabled(rename = "action")]
    action: &'static str,
}

impl PlanArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.ingest.config();
        let congress = self.ingest.congress();
        let grammar = PathGrammar::new().context("path grammar failed to compile")?;
        let mask = Mask::updated_attribute().context("mask failed to compile")?;

        let scraper_root = &self.ingest.scraper_root;
        let data_root = &self.ingest.data_root;

        let mut rows = Vec::new();
        match self.kind {
            PlanKind::Bills => {
                for source in listing::bill_data_files(scraper_root, congress)? {
                    let bill = grammar.parse_bill(&source, &cfg.type_codes)?;
                    ensure_congress(bill.congress, congress, &source)?;
                    rows.push(plan_row(source, bill.legacy_path(data_root), &mask)?);
                }
            }
            PlanKind::Amendments => {
                for source in listing::amendment_data_files(scraper_root, congress)? {
                    let amdt = grammar.parse_amendment(&source)?;
                    ensure_congress(amdt.congress, congress, &source)?;
                    rows.push(plan_row(source, amdt.legacy_path(data_root), &mask)?);
                }
            }
            PlanKind::Votes => {
                for source in listing::vote_data_files(scraper_root, congress)? {
                    let vote = grammar.parse_vote(&source)?;
                    ensure_congress(vote.congress, congress, &source)?;
                    rows.push(plan_row(source, vote.legacy_path(data_root), &mask)?);
                }
            }
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize plan JSON")?
            );
            return Ok(());
        }

        print_table(rows);
        Ok(())
    }
}

fn plan_row(source: PathBuf, destination: PathBuf, mask: &Mask) -> Result<PlanRow> {
    let action = if !destination.exists() {
        PlanAction::Create
    } else if fingerprint(&source, Some(mask))? == fingerprint(&destination, Some(mask))? {
        PlanAction::Unchanged
    } else {
        PlanAction::Update
    };
    Ok(PlanRow {
        source,
        destination,
        action,
    })
}

fn ensure_congress(found: Congress, expected: Congress, path: &Path) -> Result<()> {
    if found != expected {
        return Err(ValidationError::CongressMismatch {
            expected,
            found,
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

fn print_table(rows: Vec<PlanRow>) {
    if rows.is_empty() {
        println!("Nothing discovered; the plan is empty.");
        return;
    }

    let to_write = rows
        .iter()
        .filter(|row| row.action != PlanAction::Unchanged)
        .count();
    let table_rows: Vec<PlanTableRow> = rows
        .iter()
        .map(|row| PlanTableRow {
            source: row.source.display().to_string(),
            destination: row.destination.display().to_string(),
            action: row.action.label(),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} of {} files would be written", to_write, rows.len());
}
