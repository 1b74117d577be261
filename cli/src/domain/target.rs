//! The project being scaffolded: the directory the user asked for and the
//! paths derived from it.
//!
//! Pure functions only — no I/O, no async, no filesystem access. The current
//! directory is passed in rather than read here.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::UsageError;

/// Manifest file patched after cloning.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Version-control metadata directory removed after cloning.
pub const METADATA_DIRNAME: &str = ".git";

/// Target of a scaffolding run. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// Directory exactly as given on the command line.
    project_directory: String,
    /// `project_directory` resolved against the working directory.
    absolute_path: PathBuf,
    /// Final segment of `absolute_path`; becomes the package name.
    base_name: String,
}

impl TargetSpec {
    /// Build a target from the positional argument and the working directory.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::MissingProjectDirectory` when no (or a blank)
    /// directory was given, and `UsageError::NoBaseName` when the directory
    /// resolves to a filesystem root.
    pub fn parse(project_directory: Option<&str>, cwd: &Path) -> Result<Self, UsageError> {
        let project_directory = match project_directory {
            Some(dir) if !dir.trim().is_empty() => dir,
            _ => return Err(UsageError::MissingProjectDirectory),
        };

        let absolute_path = normalize(&cwd.join(project_directory));
        let base_name = absolute_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| UsageError::NoBaseName {
                path: absolute_path.clone(),
            })?;

        Ok(Self {
            project_directory: project_directory.to_owned(),
            absolute_path,
            base_name,
        })
    }

    #[must_use]
    pub fn project_directory(&self) -> &str {
        &self.project_directory
    }

    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Path of the generated project's manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.absolute_path.join(MANIFEST_FILENAME)
    }

    /// Path of the cloned repository's metadata directory.
    #[must_use]
    pub fn metadata_dir(&self) -> PathBuf {
        self.absolute_path.join(METADATA_DIRNAME)
    }
}

/// Lexically normalise a path: drop `.` and let `..` pop one segment.
/// `..` never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
