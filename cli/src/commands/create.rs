//! Create command — scaffold a new project from the template repository.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::application::services::scaffold::{ScaffoldOptions, scaffold_project};
use crate::domain::{PackageManager, SproutConfig, TargetSpec, validate_template_url};
use crate::infra::{LocalFs, TokioCommandRunner, YamlConfigStore};
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Command-line overrides for values that otherwise come from the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// `--template` / `SPROUT_TEMPLATE`.
    pub template: Option<String>,
    /// `--package-manager` / `SPROUT_PACKAGE_MANAGER`.
    pub package_manager: Option<PackageManager>,
}

/// Entry point for `sprout <project-directory>`.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or any scaffolding
/// step fails.
pub async fn run(ctx: &OutputContext, target: &TargetSpec, overrides: Overrides) -> Result<()> {
    let config = resolve_config(&YamlConfigStore, overrides)?;
    tracing::debug!(?config, "resolved configuration");

    ctx.header(&format!(
        "Creating a new project in {}",
        target.absolute_path().display()
    ));
    ctx.info(&format!("using template {}", config.template.url));

    let reporter = TerminalReporter::new(ctx);
    let outcome = scaffold_project(
        &TokioCommandRunner,
        &LocalFs,
        ScaffoldOptions {
            reporter: &reporter,
            target,
            template_url: &config.template.url,
            package_manager: config.package_manager,
        },
    )
    .await?;

    HumanRenderer::new(ctx).render_completion(&outcome);
    Ok(())
}

/// Load the config file and apply command-line overrides on top.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or the template
/// override is not a usable clone URL.
pub fn resolve_config(store: &impl ConfigStore, overrides: Overrides) -> Result<SproutConfig> {
    let mut config = store.load()?;
    if let Some(url) = overrides.template {
        validate_template_url(&url).context("invalid --template")?;
        config.template.url = url;
    }
    if let Some(pm) = overrides.package_manager {
        config.package_manager = pm;
    }
    Ok(config)
}
