//! Svcinspect - deployed web service version inventory.
//!
//! Svcinspect reconciles a CouchDB-backed service registry against the
//! services actually present on this host. For every registered web
//! service it runs a per-subtype version-check script inside the
//! service's directory and writes the collected versions back as a
//! single per-host document, or prints them in dry-run mode.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and title lookup
//! - [`couch`] - Minimal blocking CouchDB client
//! - [`error`] - Error types and result alias
//! - [`inventory`] - Item fetching, directory probing, script execution,
//!   and reconciliation
//! - [`report`] - Dry-run output formatting
//! - [`run`] - Pipeline orchestration
//! - [`store`] - Revision-aware persistence of inspection results

pub mod cli;
pub mod config;
pub mod couch;
pub mod error;
pub mod inventory;
pub mod report;
pub mod run;
pub mod store;

pub use error::{InspectError, Result};
