//! Domain types and validators for Sprout configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Template repository cloned for every new project.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/sprout-dev/sprout-template.git";

pub const VALID_PACKAGE_MANAGERS: &[&str] = &["npm", "yarn", "pnpm"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.sprout/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SproutConfig {
    /// Template repository settings.
    pub template: TemplateConfig,
    /// Package manager used for the install step.
    pub package_manager: PackageManager,
}

/// Template repository settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Clone URL of the template repository.
    #[serde(default = "default_template_url")]
    pub url: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: default_template_url(),
        }
    }
}

fn default_template_url() -> String {
    DEFAULT_TEMPLATE_URL.to_string()
}

/// Package manager that installs the generated project's dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Executable name.
    #[must_use]
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Arguments of the install command.
    #[must_use]
    pub fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }

    /// Command the user runs to start the generated project.
    #[must_use]
    pub fn run_dev_hint(self) -> String {
        format!("{} run dev", self.program())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(ConfigError::InvalidValue {
                key: "package_manager".to_string(),
                value: other.to_string(),
                valid: VALID_PACKAGE_MANAGERS.join(", "),
            }),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a template repository URL.
///
/// The URL is passed to `git clone` after `--`, but a value shaped like an
/// option is still rejected here so a bad config fails before anything runs.
///
/// # Errors
///
/// Returns an error if the URL is blank or starts with `-`.
pub fn validate_template_url(url: &str) -> Result<(), ConfigError> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return Err(ConfigError::InvalidValue {
            key: "template.url".to_string(),
            value: url.to_string(),
            valid: "a git clone URL or local repository path".to_string(),
        });
    }
    Ok(())
}
