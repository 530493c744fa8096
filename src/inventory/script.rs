//! Version-check script execution.
//!
//! A sub-kind maps to one script, `{scripts_dir}/{sub_kind}.sh`. The
//! script is run with no arguments from inside the service directory
//! and reports on stdout either `VERSION` or `VERSION|PACKAGE_INFO`,
//! one line. Script content is opaque; any text is accepted as a
//! version.

use crate::inventory::probe::is_empty_or_missing;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of probing one service item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// No version script exists for this sub-kind; the item is skipped
    /// without a record.
    NoScript,
    /// The service directory is missing or empty.
    DirMissing,
    /// The script ran but did not produce a usable version.
    Failed { reason: String },
    /// The script reported a version, with optional package info.
    Version {
        version: String,
        packages_versions: Option<String>,
    },
}

/// Executes version-check scripts with a bounded runtime.
pub struct ScriptRunner {
    scripts_dir: PathBuf,
    timeout: Duration,
}

impl ScriptRunner {
    pub fn new(scripts_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            scripts_dir,
            timeout,
        }
    }

    /// Path of the script responsible for `sub_kind`.
    pub fn script_path(&self, sub_kind: &str) -> PathBuf {
        self.scripts_dir.join(format!("{}.sh", sub_kind))
    }

    /// Probe one service: gate on script and directory presence, then
    /// execute.
    pub fn probe(&self, sub_kind: &str, work_dir: &Path) -> ProbeOutcome {
        let script = self.script_path(sub_kind);
        if !script.exists() {
            return ProbeOutcome::NoScript;
        }
        if is_empty_or_missing(work_dir) {
            return ProbeOutcome::DirMissing;
        }
        self.execute(&script, work_dir)
    }

    fn execute(&self, script: &Path, work_dir: &Path) -> ProbeOutcome {
        let mut cmd = Command::new(script);
        cmd.current_dir(work_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let start = Instant::now();
        let mut child = match cmd.spawn() {
            Ok(child) => child,
            // The directory passed the gate but vanished before spawn.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ProbeOutcome::DirMissing;
            }
            Err(e) => {
                return ProbeOutcome::Failed {
                    reason: format!("failed to start: {}", e),
                };
            }
        };

        let mut timed_out = false;
        loop {
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {}
                Err(e) => {
                    let _ = child.kill();
                    return ProbeOutcome::Failed {
                        reason: format!("wait failed: {}", e),
                    };
                }
            }
            if start.elapsed() > self.timeout {
                timed_out = true;
                let _ = child.kill();
                break;
            }
            std::thread::sleep(Duration::from_millis(25));
        }

        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => {
                return ProbeOutcome::Failed {
                    reason: format!("failed to collect output: {}", e),
                };
            }
        };

        if timed_out {
            return ProbeOutcome::Failed {
                reason: format!("timed out after {}s", self.timeout.as_secs()),
            };
        }
        if !output.status.success() {
            return ProbeOutcome::Failed {
                reason: match output.status.code() {
                    Some(code) => format!("exit code {}", code),
                    None => "killed by signal".to_string(),
                },
            };
        }

        parse_version_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Split trimmed script output on the first `|` into a version and
/// optional package info. An empty second part is treated as absent.
pub fn parse_version_output(raw: &str) -> ProbeOutcome {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, '|');
    let version = parts.next().unwrap_or_default().to_string();
    let packages_versions = parts
        .next()
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    ProbeOutcome::Version {
        version,
        packages_versions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create an executable script at a path (creates parent dirs as
    /// needed).
    fn create_script(path: &Path, body: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn runner_with_script(body: &str) -> (TempDir, ScriptRunner) {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        create_script(&scripts.join("nginx.sh"), body);
        let runner = ScriptRunner::new(scripts, Duration::from_secs(5));
        (temp, runner)
    }

    fn populated_dir(temp: &TempDir) -> PathBuf {
        let dir = temp.path().join("site");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "hi").unwrap();
        dir
    }

    #[test]
    fn missing_script_is_no_script() {
        let (temp, runner) = runner_with_script("echo 1.0");
        let dir = populated_dir(&temp);
        assert_eq!(runner.probe("tomcat", &dir), ProbeOutcome::NoScript);
    }

    #[test]
    fn missing_directory_is_dir_missing() {
        let (temp, runner) = runner_with_script("echo 1.0");
        let missing = temp.path().join("gone");
        assert_eq!(runner.probe("nginx", &missing), ProbeOutcome::DirMissing);
    }

    #[test]
    fn empty_directory_is_dir_missing() {
        let (temp, runner) = runner_with_script("echo 1.0");
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        assert_eq!(runner.probe("nginx", &empty), ProbeOutcome::DirMissing);
    }

    #[cfg(unix)]
    #[test]
    fn successful_script_reports_version() {
        let (temp, runner) = runner_with_script("echo 1.18.0");
        let dir = populated_dir(&temp);

        assert_eq!(
            runner.probe("nginx", &dir),
            ProbeOutcome::Version {
                version: "1.18.0".to_string(),
                packages_versions: None,
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn script_output_with_pipe_carries_packages() {
        let (temp, runner) = runner_with_script("echo '1.18.0|modsecurity=3.0'");
        let dir = populated_dir(&temp);

        assert_eq!(
            runner.probe("nginx", &dir),
            ProbeOutcome::Version {
                version: "1.18.0".to_string(),
                packages_versions: Some("modsecurity=3.0".to_string()),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn script_runs_inside_the_service_directory() {
        let (temp, runner) = runner_with_script("basename \"$(pwd)\"");
        let dir = populated_dir(&temp);

        assert_eq!(
            runner.probe("nginx", &dir),
            ProbeOutcome::Version {
                version: "site".to_string(),
                packages_versions: None,
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_script_is_failed() {
        let (temp, runner) = runner_with_script("exit 3");
        let dir = populated_dir(&temp);

        match runner.probe("nginx", &dir) {
            ProbeOutcome::Failed { reason } => assert!(reason.contains("3"), "{}", reason),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn hung_script_times_out() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        create_script(&scripts.join("nginx.sh"), "sleep 30");
        let runner = ScriptRunner::new(scripts, Duration::from_millis(200));
        let dir = populated_dir(&temp);

        match runner.probe("nginx", &dir) {
            ProbeOutcome::Failed { reason } => {
                assert!(reason.contains("timed out"), "{}", reason)
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(
            parse_version_output("  1.2.3\n"),
            ProbeOutcome::Version {
                version: "1.2.3".to_string(),
                packages_versions: None,
            }
        );
    }

    #[test]
    fn parse_splits_on_first_pipe_only() {
        assert_eq!(
            parse_version_output("1.2.3|a=1|b=2"),
            ProbeOutcome::Version {
                version: "1.2.3".to_string(),
                packages_versions: Some("a=1|b=2".to_string()),
            }
        );
    }

    #[test]
    fn parse_empty_package_part_is_none() {
        assert_eq!(
            parse_version_output("1.2.3|"),
            ProbeOutcome::Version {
                version: "1.2.3".to_string(),
                packages_versions: None,
            }
        );
    }

    #[test]
    fn script_path_appends_sh_suffix() {
        let runner = ScriptRunner::new(PathBuf::from("/opt/scripts"), Duration::from_secs(5));
        assert_eq!(
            runner.script_path("nginx"),
            PathBuf::from("/opt/scripts/nginx.sh")
        );
    }
}
