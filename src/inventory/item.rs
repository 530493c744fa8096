//! Inventory data types.
//!
//! The serialized shapes here are a wire contract with the registry
//! database: field names match what downstream consumers of the
//! `inspector-*` documents already expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One deployed service instance from the registry view.
///
/// Transient: built fresh each run, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: String,
    pub kind: String,
    pub sub_kind: String,
    /// Filesystem location of the deployed service, whitespace-trimmed.
    pub path: String,
}

/// A successfully probed service with its reported version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub path: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_versions: Option<String>,
}

/// A service whose on-disk location could not be probed this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundRecord {
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

/// The per-host snapshot document written back to the registry.
///
/// One document per host, fully replaced on every persisted run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub sub_type: String,
    pub hostname: String,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<VersionRecord>,
    pub items_not_found: Vec<NotFoundRecord>,
}

impl ResultDocument {
    pub const DOC_TYPE: &'static str = "inspector";
    pub const SUB_TYPE: &'static str = "web";

    /// Stable document id for a host.
    pub fn doc_id(hostname: &str) -> String {
        format!("{}-{}", Self::DOC_TYPE, hostname)
    }

    /// Build a fresh snapshot for `hostname`, reusing `rev` when the
    /// document already exists in the store.
    pub fn new(
        hostname: &str,
        rev: Option<String>,
        items: Vec<VersionRecord>,
        items_not_found: Vec<NotFoundRecord>,
    ) -> Self {
        Self {
            id: Self::doc_id(hostname),
            rev,
            doc_type: Self::DOC_TYPE.to_string(),
            sub_type: Self::SUB_TYPE.to_string(),
            hostname: hostname.to_string(),
            updated_at: Utc::now(),
            items,
            items_not_found,
        }
    }
}
