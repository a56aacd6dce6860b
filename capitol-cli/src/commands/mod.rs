//! One module per subcommand, plus shared summary printing.

pub mod amendments;
pub mod bills;
pub mod committees;
pub mod people;
pub mod photos;
pub mod plan;
pub mod statutes;
pub mod stats;
pub mod text;
pub mod votes;

use colored::Colorize;

use capitol_sync::{BatchSummary, LinkTally};

/// `✓ bills 113 — 2 copied, 5 unchanged`
pub(crate) fn print_batch(label: &str, summary: &BatchSummary) {
    println!(
        "{} {label} — {} copied, {} unchanged",
        "✓".green().bold(),
        summary.copied,
        summary.unchanged
    );
}

/// `✓ bill text — 3 linked, 12 current, 1 replaced, 0 squashed`
pub(crate) fn print_tally(label: &str, tally: &LinkTally) {
    println!(
        "{} {label} — {} linked, {} current, {} replaced, {} squashed",
        "✓".green().bold(),
        tally.linked,
        tally.already_linked,
        tally.replaced,
        tally.squashed
    );
}

/// Note printed whenever a gated loader is skipped.
pub(crate) fn print_load_skipped(kind: &str) {
    println!("{} no real changes; skipping {kind} load", "·".dimmed());
}
