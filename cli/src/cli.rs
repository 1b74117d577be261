//! CLI argument parsing with clap derive

use std::ffi::OsString;

use clap::Parser;

use crate::commands::{self, create::Overrides};
use crate::domain::{PackageManager, TargetSpec, UsageError};
use crate::output::{HumanRenderer, OutputContext};

/// Binary name shown in usage hints.
pub const BIN_NAME: &str = "sprout";

/// Exit code for a missing directory argument or an aborted run.
pub const EXIT_FAILURE: i32 = 1;

/// Scaffold a new project from the template repository
#[derive(Parser, Debug)]
#[command(
    name = "sprout",
    version,
    override_usage = "sprout <project-directory> [OPTIONS]",
    after_help = "Only <project-directory> is required."
)]
pub struct Cli {
    /// Directory to create the project in; its final segment becomes the package name
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Template repository to clone
    #[arg(long, env = "SPROUT_TEMPLATE", value_name = "URL")]
    pub template: Option<String>,

    /// Package manager that installs dependencies (npm, yarn, pnpm)
    #[arg(long, env = "SPROUT_PACKAGE_MANAGER", value_name = "NAME")]
    pub package_manager: Option<PackageManager>,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (a non-empty `NO_COLOR` does the same)
    #[arg(long)]
    pub no_color: bool,
}

/// Parse an argument vector without exiting the process.
///
/// # Errors
///
/// Returns clap's error for unknown flags, bad values, `--help` and `--version`.
pub fn parse<I, T>(argv: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv)
}

impl Cli {
    /// Execute the scaffolder and return the process exit code.
    pub async fn run(self) -> i32 {
        let Cli {
            project_directory,
            template,
            package_manager,
            quiet,
            no_color,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);

        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {e}");
                return EXIT_FAILURE;
            }
        };

        let target = match TargetSpec::parse(project_directory.as_deref(), &cwd) {
            Ok(target) => target,
            Err(UsageError::MissingProjectDirectory) => {
                HumanRenderer::new(&ctx).render_usage(BIN_NAME);
                return EXIT_FAILURE;
            }
            Err(e) => {
                ctx.error(&e.to_string());
                return EXIT_FAILURE;
            }
        };

        let overrides = Overrides {
            template,
            package_manager,
        };
        match commands::create::run(&ctx, &target, overrides).await {
            Ok(()) => 0,
            Err(e) => {
                tracing::debug!(error = ?e, "scaffolding aborted");
                eprintln!("Error: {e:#}");
                EXIT_FAILURE
            }
        }
    }
}
