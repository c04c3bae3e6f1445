//! Configuration loading, defaults, and validation.
//!
//! civet runs fine with no configuration at all: the built-in defaults
//! describe a Python project with a GitHub Actions pipeline. A `.civet.yml`
//! (or `civet.yml`) at the project root replaces the defaults.

pub mod defaults;
pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config};
pub use schema::{CivetConfig, CommandEntry, FileEntry, ImportEntry, SmokeConfig};
