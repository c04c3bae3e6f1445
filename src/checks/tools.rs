//! Tool availability probes.
//!
//! Runs each tool's probe command through the shell and, on success, pulls
//! the version string out of the probe output for display.

use std::path::Path;

use crate::config::CommandEntry;
use crate::report::{CheckKind, CheckRecord};
use crate::shell::{execute, CommandOptions};

/// Probe a single tool. Tolerant entries downgrade a failed probe to a
/// warning so it never gates the exit code.
pub fn probe_tool(entry: &CommandEntry, cwd: Option<&Path>) -> CheckRecord {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        ..Default::default()
    };

    let record = match execute(&entry.command, &options) {
        Ok(result) if result.success => {
            // Version banners land on stdout or stderr depending on the tool.
            let banner = if result.stdout.trim().is_empty() {
                result.stderr.clone()
            } else {
                result.stdout.clone()
            };

            let record = CheckRecord::passed(&entry.label, &entry.command, CheckKind::Tool);
            match extract_version(&banner) {
                Some(version) => record.with_detail(&format!("version {}", version)),
                None => record,
            }
        }
        Ok(result) => CheckRecord::failed(&entry.label, &entry.command, CheckKind::Tool)
            .with_detail(result.error_text()),
        Err(e) => CheckRecord::failed(&entry.label, &entry.command, CheckKind::Tool)
            .with_detail(&e.to_string()),
    };

    if entry.tolerant {
        record.tolerated()
    } else {
        record
    }
}

/// Probe every tool in order.
pub fn probe_tools(entries: &[CommandEntry], cwd: Option<&Path>) -> Vec<CheckRecord> {
    entries.iter().map(|entry| probe_tool(entry, cwd)).collect()
}

/// Extract a version from probe output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
