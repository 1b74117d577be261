//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::SproutConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program, relaying its stdout and stderr to ours as chunks arrive,
    /// and return once it exits.
    ///
    /// `args` are passed to the program as a discrete list; no shell is
    /// involved. `cwd` overrides the working directory when set.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned or waited on.
    /// A non-zero exit is reported through the returned `ExitStatus`.
    async fn run_streaming(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a non-fatal warning.
    fn warn(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Filesystem operations the scaffolder performs on the cloned tree.
#[allow(async_fn_in_trait)]
pub trait ProjectFs {
    /// Recursively delete a directory.
    async fn remove_dir_all(&self, path: &Path) -> Result<()>;
    /// Read a UTF-8 file.
    async fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Replace a file's contents.
    async fn write(&self, path: &Path, contents: String) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the user's configuration file.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<SproutConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
