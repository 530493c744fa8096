//! Pipeline orchestration.
//!
//! One run: load config, fetch the expected services from the
//! registry, probe each on disk, then either print the findings
//! (dry run) or upsert them as this host's result document.

use crate::cli::Cli;
use crate::config::Config;
use crate::couch::CouchClient;
use crate::error::{InspectError, Result};
use crate::inventory::{fetch_items, reconcile, ScriptRunner};
use crate::report;
use crate::store::ResultStore;
use std::time::Duration;

/// The service category this tool inventories.
pub const WEB_CATEGORY: &str = "web";

/// Execute one inspection run.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let client = CouchClient::new(&config.couchdb);

    let items = fetch_items(&client, &config.couchdb, WEB_CATEGORY)?;
    tracing::info!(items = items.len(), "inventory fetched");

    let runner = ScriptRunner::new(
        config.inspector.scripts.clone(),
        Duration::from_secs(config.inspector.script_timeout_secs),
    );
    let result = reconcile(&items, &runner, &config);
    tracing::info!(
        found = result.versions.len(),
        not_found = result.not_found.len(),
        "reconciliation complete"
    );

    if cli.dry_run {
        report::print(&result);
        return Ok(());
    }

    let hostname = resolve_hostname(cli.hostname.as_deref())?;
    ResultStore::new(&client).upsert(&hostname, result.versions, result.not_found)
}

/// The hostname the result document is keyed by: the `--hostname`
/// override when given, otherwise the OS hostname.
fn resolve_hostname(override_name: Option<&str>) -> Result<String> {
    match override_name {
        Some(name) => Ok(name.to_string()),
        None => gethostname::gethostname()
            .into_string()
            .map_err(|raw| InspectError::Hostname {
                message: format!("not valid UTF-8: {:?}", raw),
            }),
    }
}
