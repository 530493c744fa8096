//! Fetching service items from the registry view.
//!
//! The registry view emits one row per service document; each document
//! embeds a list of included service items. Every included item that
//! carries both a subtype and a sub-location becomes one [`ServiceItem`]
//! to probe. Entries missing either field are configuration noise, not
//! deployable services, and are dropped without a record.

use crate::config::CouchSection;
use crate::couch::{CouchClient, ViewRow};
use crate::error::Result;
use crate::inventory::item::ServiceItem;
use serde::Deserialize;

/// Value shape emitted by the service view.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDocValue {
    #[serde(default)]
    pub included_service_items: Vec<IncludedItem>,
}

/// One entry of a service document's included item list.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludedItem {
    #[serde(default)]
    pub itemid: String,
    #[serde(default, rename = "itemType")]
    pub item_type: String,
    #[serde(default, rename = "itemSubType")]
    pub item_sub_type: String,
    #[serde(default, rename = "itemSubLoc")]
    pub item_sub_loc: String,
}

/// Query the registry for all service items in `category`.
///
/// Read-only; any query failure aborts the run. Duplicates in the
/// source data are preserved, as is row order.
pub fn fetch_items(
    client: &CouchClient,
    couch: &CouchSection,
    category: &str,
) -> Result<Vec<ServiceItem>> {
    let rows: Vec<ViewRow<ServiceDocValue>> =
        client.view_rows(couch.design(), &couch.view, category)?;
    let items = flatten_rows(rows);
    tracing::debug!(count = items.len(), category = category, "fetched service items");
    Ok(items)
}

/// Flatten view rows into probe-ready items.
///
/// Every qualifying included item counts, not just the first one per
/// document: a document listing several deployed services yields one
/// item each.
pub fn flatten_rows(rows: Vec<ViewRow<ServiceDocValue>>) -> Vec<ServiceItem> {
    let mut items = Vec::new();
    for row in rows {
        for included in row.value.included_service_items {
            let path = included.item_sub_loc.trim();
            if included.item_sub_type.is_empty() || path.is_empty() {
                continue;
            }
            items.push(ServiceItem {
                id: included.itemid,
                kind: included.item_type,
                sub_kind: included.item_sub_type,
                path: path.to_string(),
            });
        }
    }
    items
}
