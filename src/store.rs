//! Revision-aware persistence of inspection results.
//!
//! One document per host, id `inspector-{hostname}`. A run fully
//! replaces the previous snapshot: the existing revision token is
//! looked up and reused so the write lands as an update instead of a
//! conflict. No merge, no history beyond what CouchDB itself keeps.

use crate::couch::CouchClient;
use crate::error::Result;
use crate::inventory::item::{NotFoundRecord, ResultDocument, VersionRecord};

/// Writes per-host result documents into the registry database.
pub struct ResultStore<'a> {
    client: &'a CouchClient,
}

impl<'a> ResultStore<'a> {
    pub fn new(client: &'a CouchClient) -> Self {
        Self { client }
    }

    /// Insert or update the result document for `hostname`.
    ///
    /// Last write wins; rerunning after a service changed overwrites
    /// the previous snapshot. Lookup errors other than not-found and
    /// all write errors are fatal.
    pub fn upsert(
        &self,
        hostname: &str,
        items: Vec<VersionRecord>,
        items_not_found: Vec<NotFoundRecord>,
    ) -> Result<()> {
        let id = ResultDocument::doc_id(hostname);
        let rev = self.client.doc_rev(&id)?;

        tracing::debug!(
            id = %id,
            existing_rev = rev.as_deref().unwrap_or("<none>"),
            items = items.len(),
            not_found = items_not_found.len(),
            "writing result document"
        );

        let doc = ResultDocument::new(hostname, rev, items, items_not_found);
        self.client.put_doc(&id, &doc)
    }
}
