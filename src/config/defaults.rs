//! Built-in default configuration.
//!
//! The defaults describe a Python project validated against a GitHub Actions
//! pipeline: workflow file, linter configs, requirements, and a pytest
//! suite. A project config file replaces these wholesale.

use super::schema::{CivetConfig, CommandEntry, FileEntry, ImportEntry, SmokeConfig};

fn file(path: &str, label: &str) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        label: label.to_string(),
    }
}

fn command(command: &str, label: &str, tolerant: bool) -> CommandEntry {
    CommandEntry {
        command: command.to_string(),
        label: label.to_string(),
        tolerant,
    }
}

/// The full built-in configuration.
pub fn default_config() -> CivetConfig {
    CivetConfig {
        project: None,
        files: vec![
            file(
                ".github/workflows/python-package.yml",
                "GitHub Actions Workflow",
            ),
            file(".flake8", "Flake8 Configuration"),
            file("pyproject.toml", "PyProject Configuration"),
            file(".bandit", "Bandit Security Configuration"),
            file("requirements.txt", "Python Requirements"),
            file("tests/__init__.py", "Test Package Init"),
            file("tests/test_app.py", "Basic App Tests"),
        ],
        tools: vec![
            command("python --version", "Python Installation", false),
            command("pip --version", "Pip Installation", false),
        ],
        install: Some(
            "pip install black isort flake8 bandit safety pytest pytest-cov pytest-mock"
                .to_string(),
        ),
        quality: vec![
            command("black --check --diff .", "Black Code Formatting Check", true),
            command("isort --check-only --diff .", "Import Sorting Check", true),
            command("flake8 . --count --statistics", "Flake8 Linting", true),
            command(
                "bandit -r . --severity-level medium",
                "Security Analysis",
                true,
            ),
            command("safety check", "Vulnerability Scan", true),
        ],
        ensure_dirs: vec!["models".to_string(), "uploads".to_string()],
        tests: vec![command("pytest tests/ -v", "Test Suite Execution", true)],
        smoke: Some(SmokeConfig {
            interpreter: "python".to_string(),
            module: "app".to_string(),
            attributes: vec![
                "app".to_string(),
                "MODEL_DIR".to_string(),
                "MODEL_PATH".to_string(),
                "SCALER_PATH".to_string(),
                "FEATURES_PATH".to_string(),
                "CATEGORICAL_VALUES_PATH".to_string(),
            ],
            imports: vec![
                ImportEntry {
                    module: "data.location_data".to_string(),
                    names: vec![
                        "get_states".to_string(),
                        "get_districts".to_string(),
                        "get_taluks".to_string(),
                    ],
                },
                ImportEntry {
                    module: "data.crop_data".to_string(),
                    names: vec!["load_crop_yield_data".to_string()],
                },
            ],
        }),
    }
}
