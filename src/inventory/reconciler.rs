//! Reconciliation of fetched items against on-disk state.
//!
//! Items are processed sequentially in fetch order. Each item whose
//! script exists ends up in exactly one of the two partitions; items
//! without a script are skipped entirely.

use crate::config::Config;
use crate::inventory::item::{NotFoundRecord, ServiceItem, VersionRecord};
use crate::inventory::script::{ProbeOutcome, ScriptRunner};
use std::path::Path;

/// The two outcome partitions of a reconciliation run.
#[derive(Debug, Default)]
pub struct Reconciliation {
    pub versions: Vec<VersionRecord>,
    pub not_found: Vec<NotFoundRecord>,
}

/// Probe every item and partition the outcomes.
pub fn reconcile(items: &[ServiceItem], runner: &ScriptRunner, config: &Config) -> Reconciliation {
    let mut result = Reconciliation::default();

    for item in items {
        match runner.probe(&item.sub_kind, Path::new(&item.path)) {
            ProbeOutcome::NoScript => {
                tracing::debug!(
                    domain = %item.id,
                    sub_kind = %item.sub_kind,
                    "no version script, skipping"
                );
            }
            ProbeOutcome::DirMissing => {
                result.not_found.push(not_found(item));
            }
            ProbeOutcome::Failed { reason } => {
                tracing::warn!(
                    domain = %item.id,
                    sub_kind = %item.sub_kind,
                    path = %item.path,
                    reason = %reason,
                    "version script failed"
                );
                result.not_found.push(not_found(item));
            }
            ProbeOutcome::Version {
                version,
                packages_versions,
            } => {
                result.versions.push(VersionRecord {
                    domain: item.id.clone(),
                    kind: item.sub_kind.clone(),
                    title: config.script_title(&item.sub_kind),
                    path: item.path.clone(),
                    version,
                    packages_versions,
                });
            }
        }
    }

    result
}

fn not_found(item: &ServiceItem) -> NotFoundRecord {
    NotFoundRecord {
        domain: item.id.clone(),
        kind: item.sub_kind.clone(),
        path: item.path.clone(),
    }
}
