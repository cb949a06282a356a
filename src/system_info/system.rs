use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, Local};
use sysinfo::System;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::uptime::{Snapshot, UPTIME_KEY, extract_uptime, parse_proc_uptime};

pub fn read_proc_uptime(path: &Path) -> Result<Option<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_proc_uptime(Some(&text)))
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    Snapshot::from_json(&json)
        .with_context(|| format!("Malformed snapshot {}", path.display()))
}

pub fn sysinfo_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.insert(UPTIME_KEY, System::uptime() as f64);
    snapshot.insert("system/boot_time", System::boot_time() as f64);
    snapshot
}

pub fn get_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "localhost".to_string())
}

/// Local time the system came up, given its uptime.
pub fn boot_time_label(uptime_secs: Option<f64>) -> String {
    boot_time_at(Local::now(), uptime_secs)
        .map(|boot| boot.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn boot_time_at(now: DateTime<Local>, uptime_secs: Option<f64>) -> Option<DateTime<Local>> {
    let secs = uptime_secs.filter(|s| s.is_finite() && *s >= 0.0)?;
    let uptime = ChronoDuration::try_seconds(secs.floor() as i64)?;
    now.checked_sub_signed(uptime)
}

// Resolves uptime from the configured sources in priority order
pub struct UptimeProbe {
    uptime_file: PathBuf,
    snapshot_file: Option<PathBuf>,
    failures: u64,
}

impl UptimeProbe {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            uptime_file: config.uptime_file.clone(),
            snapshot_file: config.snapshot_file.clone(),
            failures: 0,
        }
    }

    // Source failures repeat every refresh; only the first one is a warning.
    fn report(&mut self, message: String) {
        self.failures += 1;
        if self.failures == 1 {
            warn!("{}", message);
        } else {
            debug!(failures = self.failures, "{}", message);
        }
    }

    pub fn resolve(&mut self) -> Option<f64> {
        if let Some(path) = self.snapshot_file.clone() {
            match load_snapshot(&path) {
                Ok(snapshot) => {
                    if let Some(secs) = extract_uptime(Some(&snapshot)) {
                        debug!(source = "snapshot", secs, "Resolved uptime");
                        return Some(secs);
                    }
                    self.report(format!("Snapshot {} has no usable uptime entry", path.display()));
                }
                Err(e) => self.report(format!("{:#}", e)),
            }
        }

        match read_proc_uptime(&self.uptime_file) {
            Ok(Some(secs)) => {
                debug!(source = "uptime_file", secs, "Resolved uptime");
                return Some(secs);
            }
            Ok(None) => {
                let message = format!("No uptime value in {}", self.uptime_file.display());
                self.report(message);
            }
            Err(e) => self.report(format!("{:#}", e)),
        }

        let secs = extract_uptime(Some(&sysinfo_snapshot()));
        debug!(source = "sysinfo", ?secs, "Resolved uptime");
        secs
    }
}
