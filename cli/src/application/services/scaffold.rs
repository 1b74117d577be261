//! Application service — project scaffolding use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProgressReporter, ProjectFs};
use crate::domain::{
    LINE_ENDING, PackageManager, ScaffoldError, TargetSpec, package_name_problem, rename_manifest,
};

/// Version-control client used to fetch the template.
pub const GIT: &str = "git";

pub struct ScaffoldOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    pub target: &'a TargetSpec,
    pub template_url: &'a str,
    pub package_manager: PackageManager,
}

/// Outcome of a completed `scaffold_project` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Directory as the user typed it, for the `cd` hint.
    pub project_directory: String,
    /// Final path segment, written into the manifest as the package name.
    pub base_name: String,
    /// Command that starts the generated project.
    pub next_command: String,
}

/// Clone the template into the target directory, strip its history, rename
/// the package, and install dependencies.
///
/// Steps run strictly in order and the first failure stops the run. Nothing
/// already on disk is rolled back.
///
/// # Errors
///
/// Returns a `ScaffoldError` naming the step that failed, with the
/// underlying cause chained where there is one.
pub async fn scaffold_project(
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
    opts: ScaffoldOptions<'_, impl ProgressReporter>,
) -> Result<ScaffoldOutcome> {
    let ScaffoldOptions {
        reporter,
        target,
        template_url,
        package_manager,
    } = opts;

    reporter.step(&format!("cloning template into {}...", target.project_directory()));
    clone_template(runner, template_url, target).await?;
    strip_history(fs, target).await?;
    reporter.success("template cloned");

    reporter.step(&format!("naming package '{}'...", target.base_name()));
    rewrite_manifest_name(fs, target).await?;
    if let Some(problem) = package_name_problem(target.base_name()) {
        tracing::info!(name = target.base_name(), problem, "package name not accepted by npm");
        reporter.warn(&format!(
            "package name '{}' {problem}; npm will refuse to publish it",
            target.base_name()
        ));
    }
    reporter.success("package.json updated");

    reporter.step("installing dependencies...");
    install_dependencies(runner, package_manager, target).await?;
    reporter.success("dependencies installed");

    Ok(ScaffoldOutcome {
        project_directory: target.project_directory().to_owned(),
        base_name: target.base_name().to_owned(),
        next_command: package_manager.run_dev_hint(),
    })
}

async fn clone_template(
    runner: &impl CommandRunner,
    template_url: &str,
    target: &TargetSpec,
) -> Result<()> {
    // `--` keeps a directory like `--upload-pack=...` from being read as an option.
    let args = ["clone", "--", template_url, target.project_directory()];
    tracing::info!(url = template_url, dest = target.project_directory(), "cloning template");

    let status = runner.run_streaming(GIT, &args, None).await?;
    if !status.success() {
        return Err(ScaffoldError::Clone {
            command: command_line(GIT, &args),
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}

async fn strip_history(fs: &impl ProjectFs, target: &TargetSpec) -> Result<()> {
    let metadata_dir = target.metadata_dir();
    tracing::info!(path = %metadata_dir.display(), "removing template history");

    fs.remove_dir_all(&metadata_dir)
        .await
        .context(ScaffoldError::StripHistory { path: metadata_dir })
}

async fn rewrite_manifest_name(fs: &impl ProjectFs, target: &TargetSpec) -> Result<()> {
    let path = target.manifest_path();
    tracing::info!(path = %path.display(), name = target.base_name(), "rewriting package name");

    let rewrite = async {
        let contents = fs.read_to_string(&path).await?;
        let renamed = rename_manifest(&contents, target.base_name(), LINE_ENDING)?;
        fs.write(&path, renamed).await?;
        anyhow::Ok(())
    };
    rewrite
        .await
        .with_context(|| ScaffoldError::ManifestRewrite { path: path.clone() })
}

async fn install_dependencies(
    runner: &impl CommandRunner,
    package_manager: PackageManager,
    target: &TargetSpec,
) -> Result<()> {
    let program = package_manager.program();
    let args = package_manager.install_args();
    tracing::info!(program, cwd = %target.absolute_path().display(), "installing dependencies");

    let status = runner
        .run_streaming(program, args, Some(target.absolute_path()))
        .await?;
    if !status.success() {
        return Err(ScaffoldError::Install {
            command: command_line(program, args),
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
