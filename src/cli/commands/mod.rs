//! CLI subcommand implementations.

pub mod completions;
pub mod dispatcher;
pub mod files;
pub mod init;
pub mod tools;
pub mod validate;
