//! Command Runner: execute a shell command and classify the outcome.
//!
//! Semantics match the runner contract: exit 0 is a pass, any non-zero
//! exit is a fail carrying the captured error text, and a failure to invoke
//! the command at all (shell missing, spawn error) is a caught fail. No
//! error ever escapes to the caller.

use std::path::Path;

use crate::report::{CheckKind, CheckRecord};
use crate::shell::{execute, CommandOptions};

/// Run a command check of the given kind.
pub fn run_command(
    command: &str,
    label: &str,
    kind: CheckKind,
    cwd: Option<&Path>,
) -> CheckRecord {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        ..Default::default()
    };

    match execute(command, &options) {
        Ok(result) if result.success => {
            tracing::debug!("'{}' passed in {:?}", label, result.duration);
            CheckRecord::passed(label, command, kind)
        }
        Ok(result) => {
            tracing::debug!(
                "'{}' failed with exit code {:?}",
                label,
                result.exit_code
            );
            CheckRecord::failed(label, command, kind).with_detail(result.error_text())
        }
        Err(e) => {
            tracing::debug!("'{}' could not be invoked: {}", label, e);
            CheckRecord::failed(label, command, kind).with_detail(&e.to_string())
        }
    }
}

/// Run a command check with test-stage kind and no working directory.
pub fn run_check(command: &str, label: &str) -> CheckRecord {
    run_command(command, label, CheckKind::Test, None)
}
