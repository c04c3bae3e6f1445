//! Import smoke-test command generation.
//!
//! Builds interpreter one-liners from a [`SmokeConfig`]: the primary module
//! must import and expose its attributes, and each extra import must expose
//! its names as callables. The generated commands run through the ordinary
//! Command Runner; this module never executes anything itself.

use crate::config::{CommandEntry, SmokeConfig};

/// The plain import check: does the module import at all?
pub fn import_command(smoke: &SmokeConfig) -> String {
    format!("{} -c 'import {}'", smoke.interpreter, smoke.module)
}

/// Attribute assertions for the primary module, if any are configured.
pub fn attribute_command(smoke: &SmokeConfig) -> Option<String> {
    if smoke.attributes.is_empty() {
        return None;
    }

    let mut program = format!("import {}", smoke.module);
    for attr in &smoke.attributes {
        program.push_str(&format!(
            "; assert hasattr({m}, \"{a}\"), \"{a} missing\"",
            m = smoke.module,
            a = attr
        ));
    }

    Some(format!("{} -c '{}'", smoke.interpreter, program))
}

/// Callable assertions for the extra imports, if any are configured.
pub fn imports_command(smoke: &SmokeConfig) -> Option<String> {
    if smoke.imports.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    for import in &smoke.imports {
        if import.names.is_empty() {
            parts.push(format!("import {}", import.module));
            continue;
        }
        parts.push(format!(
            "from {} import {}",
            import.module,
            import.names.join(", ")
        ));
        for name in &import.names {
            parts.push(format!(
                "assert callable({n}), \"{n} not callable\"",
                n = name
            ));
        }
    }

    Some(format!("{} -c '{}'", smoke.interpreter, parts.join("; ")))
}

/// The full smoke-check list as labeled command entries, in run order.
pub fn smoke_checks(smoke: &SmokeConfig) -> Vec<CommandEntry> {
    let mut checks = vec![CommandEntry {
        command: import_command(smoke),
        label: "App Import Test".to_string(),
        tolerant: false,
    }];

    if let Some(command) = attribute_command(smoke) {
        checks.push(CommandEntry {
            command,
            label: "Module Attribute Check".to_string(),
            tolerant: false,
        });
    }

    if let Some(command) = imports_command(smoke) {
        checks.push(CommandEntry {
            command,
            label: "Data Module Imports".to_string(),
            tolerant: false,
        });
    }

    checks
}
