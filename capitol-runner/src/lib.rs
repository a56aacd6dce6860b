//! External process invocation for the Capitol ingest pipeline.
//!
//! Scrapers, loaders, converters, and analysis scripts are collaborators
//! this system drives but does not implement. [`CommandSpec`] models one
//! invocation with captured exit status; [`scrapers`] holds the builders
//! for every collaborator command line.

pub mod command;
pub mod error;
pub mod scrapers;

pub use command::CommandSpec;
pub use error::RunnerError;
