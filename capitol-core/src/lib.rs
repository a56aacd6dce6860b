//! Capitol core library — domain types, ingest configuration, errors.
//!
//! Public API surface:
//! - [`types`] — congress/chamber/session newtypes and the bill-type enum
//! - [`config`] — [`IngestConfig`] and its pieces
//! - [`error`] — [`ValidationError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{FetchMode, IngestConfig, LogLevel, TypeCodeTable};
pub use error::ValidationError;
pub use types::{BillType, Chamber, Congress, Session};
