//! Ingest configuration.
//!
//! One immutable [`IngestConfig`] is built at process start and passed into
//! every batch driver. Nothing here is global or mutable at runtime.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{BillType, Congress};

// ---------------------------------------------------------------------------
// Scraper knobs
// ---------------------------------------------------------------------------

/// How aggressively the upstream scrapers re-fetch.
///
/// Rendered into the collaborator command line via [`FetchMode::flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FetchMode {
    /// `--force --fast`: re-parse everything, but only re-download recent
    /// documents. The normal cron mode.
    #[default]
    ForceFast,
    /// `--force`: full re-download scan.
    Force,
    /// `--fast`: recent documents only, cached pages allowed.
    Fast,
}

impl FetchMode {
    /// Scraper command-line flags for this mode.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            FetchMode::ForceFast => &["--force", "--fast"],
            FetchMode::Force => &["--force"],
            FetchMode::Fast => &["--fast"],
        }
    }
}

/// Log verbosity forwarded to collaborators via `--log=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
}

impl LogLevel {
    /// The `--log=` value collaborators expect.
    pub fn flag(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
        }
    }
}

// ---------------------------------------------------------------------------
// Type-code table
// ---------------------------------------------------------------------------

/// Lookup table from long-form bill type codes to [`BillType`].
///
/// The table governs which codes a batch *accepts*; an entry outside it is
/// [`ValidationError::UnknownTypeCode`] and aborts the batch. The default
/// table holds exactly the eight codes Congress produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCodeTable {
    entries: Vec<(String, BillType)>,
}

impl TypeCodeTable {
    /// The standard eight-entry table.
    pub fn standard() -> Self {
        Self {
            entries: BillType::all()
                .iter()
                .map(|bt| (bt.long_code().to_string(), *bt))
                .collect(),
        }
    }

    /// Build a table from explicit entries.
    pub fn new(entries: Vec<(String, BillType)>) -> Self {
        Self { entries }
    }

    /// Resolve a long-form code, or fail the batch.
    pub fn resolve(&self, code: &str) -> Result<BillType, ValidationError> {
        self.entries
            .iter()
            .find(|(long, _)| long == code)
            .map(|(_, bt)| *bt)
            .ok_or_else(|| ValidationError::UnknownTypeCode {
                code: code.to_string(),
            })
    }
}

impl Default for TypeCodeTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// IngestConfig
// ---------------------------------------------------------------------------

/// Immutable configuration for one ingest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// The congress a run targets.
    pub congress: Congress,
    /// Scraper re-fetch aggressiveness.
    pub fetch_mode: FetchMode,
    /// Verbosity forwarded to collaborators.
    pub log_level: LogLevel,
    /// Accepted bill type codes.
    pub type_codes: TypeCodeTable,
}

impl IngestConfig {
    /// The congress currently in session. People and committee ingestion
    /// only make sense against it.
    pub const CURRENT_CONGRESS: Congress = Congress(113);

    /// Config with defaults for everything but the target congress.
    pub fn new(congress: Congress) -> Self {
        Self {
            congress,
            fetch_mode: FetchMode::default(),
            log_level: LogLevel::default(),
            type_codes: TypeCodeTable::standard(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
