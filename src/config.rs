//! Configuration file loading.
//!
//! Svcinspect reads one small TOML file, by default from
//! `/etc/svcinspect/config.toml`:
//!
//! ```toml
//! [inspector]
//! scripts = "/etc/svcinspect/scripts.d"
//! script_timeout_secs = 60
//!
//! [couchdb]
//! uri = "http://127.0.0.1:5984"
//! db = "service_registry"
//! username = "inspector"
//! password = "secret"
//!
//! [inspector_scripts]
//! nginx = "NGINX Web Server"
//! ```
//!
//! Credentials come from this file exclusively; nothing is baked into
//! the binary.

use crate::error::{InspectError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn default_script_timeout() -> u64 {
    60
}

fn default_view() -> String {
    "service_type".to_string()
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub inspector: InspectorSection,
    pub couchdb: CouchSection,

    /// Display title per script sub-kind, keyed by script name.
    #[serde(default)]
    pub inspector_scripts: HashMap<String, String>,
}

/// `[inspector]` section: where the version scripts live and how long
/// one of them may run.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectorSection {
    /// Directory containing per-subtype `<sub_kind>.sh` scripts.
    pub scripts: PathBuf,

    /// Upper bound on a single script invocation, in seconds.
    #[serde(default = "default_script_timeout")]
    pub script_timeout_secs: u64,
}

/// `[couchdb]` section: registry connection target.
#[derive(Debug, Clone, Deserialize)]
pub struct CouchSection {
    pub uri: String,
    pub db: String,

    /// Design document holding the service view. Registries here
    /// conventionally name it after the database, so that is the default.
    #[serde(default)]
    pub design: Option<String>,

    /// View listing services grouped by category.
    #[serde(default = "default_view")]
    pub view: String,

    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Config {
    /// Load and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InspectError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                InspectError::Io(e)
            }
        })?;

        toml::from_str(&content).map_err(|e| InspectError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Display title for a script sub-kind, or `""` when none is
    /// configured.
    pub fn script_title(&self, sub_kind: &str) -> String {
        self.inspector_scripts
            .get(sub_kind)
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }
}

impl CouchSection {
    /// Name of the design document to query.
    pub fn design(&self) -> &str {
        self.design.as_deref().unwrap_or(&self.db)
    }
}
