//! Filesystem infrastructure — implements `ProjectFs` over `tokio::fs`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ProjectFs;

/// Production filesystem implementation of `ProjectFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ProjectFs for LocalFs {
    async fn remove_dir_all(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_dir_all(path)
            .await
            .with_context(|| format!("removing directory {}", path.display()))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading file {}", path.display()))
    }

    async fn write(&self, path: &Path, contents: String) -> Result<()> {
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("writing file {}", path.display()))
    }
}
