//! Source-artifact discovery for the Capitol ingest pipeline.
//!
//! The upstream scraper writes into a fixed directory grammar:
//!
//! ```text
//! {scraper_root}/data/{congress}/bills/{type}/{type}{number}/data.xml
//! {scraper_root}/data/{congress}/bills/{type}/{type}{number}/text-versions/{version}/mods.xml
//! {scraper_root}/data/{congress}/amendments/{h|s}amdt/{h|s}amdt{number}/data.xml
//! {scraper_root}/data/{congress}/votes/{session}/{chamber}{number}/data.xml
//! ```
//!
//! [`listing`] enumerates those files deterministically, [`PathGrammar`]
//! parses them into strongly-typed refs, and the refs know their stable
//! legacy destination paths. An unmatched path is an error, never silently
//! skipped.

pub mod artifact;
pub mod error;
pub mod grammar;
pub mod listing;

pub use artifact::{AmendmentRef, BillRef, TextVersionRef, VoteRef};
pub use error::DiscoverError;
pub use grammar::PathGrammar;
