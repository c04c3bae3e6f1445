//! civet - CI/CD setup validation.
//!
//! civet replaces ad-hoc "is my CI wired up?" shell scripts with a single
//! command that checks required configuration files, probes development
//! tools, runs the configured quality tools and smoke tests, and prints a
//! summary whose exit code is gated on the file checks.
//!
//! # Modules
//!
//! - [`checks`] - File, tool, and smoke-test check implementations
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, defaults, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Check record collection and summary aggregation
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, theme, and spinners
//!
//! # Example
//!
//! ```
//! use civet::checks::runner::run_check;
//! use civet::report::CheckStatus;
//!
//! // Classify a command outcome without printing
//! let record = run_check("exit 0", "Shell sanity");
//! assert_eq!(record.status, CheckStatus::Passed);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{CivetError, Result};
