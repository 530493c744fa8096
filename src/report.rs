//! Dry-run output formatting.
//!
//! Dry-run and persistence are mutually exclusive: either the run
//! prints its findings here, or it hands them to the result store.
//! There is no combined mode.

use crate::inventory::item::{NotFoundRecord, VersionRecord};
use crate::inventory::reconciler::Reconciliation;

/// Human-readable line for one probed version.
pub fn render_version_line(item: &VersionRecord) -> String {
    let mut versions = item.version.clone();
    if let Some(packages) = &item.packages_versions {
        versions.push_str("; ");
        versions.push_str(packages);
    }
    format!("- {}:{} - {}\n  {}", item.domain, item.kind, item.title, versions)
}

/// Diagnostic line for a service that could not be probed.
pub fn render_not_found_line(item: &NotFoundRecord) -> String {
    format!("! not found: {}", item.path)
}

/// Print the whole reconciliation to stdout.
pub fn print(result: &Reconciliation) {
    for item in &result.versions {
        println!("{}", render_version_line(item));
    }
    for item in &result.not_found {
        println!("{}", render_not_found_line(item));
    }
}
