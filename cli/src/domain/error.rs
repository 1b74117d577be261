//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Usage errors ──────────────────────────────────────────────────────────────

/// Errors raised while turning the command line into a `TargetSpec`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Please specify the project directory")]
    MissingProjectDirectory,

    #[error("Project directory '{path}' has no final path segment to name the project after")]
    NoBaseName { path: PathBuf },
}

// ── Manifest errors ───────────────────────────────────────────────────────────

/// Errors related to patching the generated `package.json`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("package.json is not valid JSON: {0}")]
    Parse(String),

    #[error("package.json must contain a JSON object at the top level")]
    NotAnObject,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration value validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}

// ── Pipeline errors ───────────────────────────────────────────────────────────

/// One variant per scaffolding step. Each names what failed so the top-level
/// handler can print it without knowing which step ran.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("`{command}` failed ({status})")]
    Clone { command: String, status: String },

    #[error("cannot remove version-control metadata at {}", path.display())]
    StripHistory { path: PathBuf },

    #[error("cannot rewrite project name in {}", path.display())]
    ManifestRewrite { path: PathBuf },

    #[error("`{command}` failed ({status})")]
    Install { command: String, status: String },
}
