//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod manifest;
pub mod target;

pub use config::{PackageManager, SproutConfig, TemplateConfig, validate_template_url};
pub use error::{ConfigError, ManifestError, ScaffoldError, UsageError};
pub use manifest::{LINE_ENDING, package_name_problem, rename_manifest};
pub use target::TargetSpec;
