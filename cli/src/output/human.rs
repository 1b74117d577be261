//! Human-readable terminal renderer for the usage guide and completion banner.

use owo_colors::OwoColorize as _;

use crate::application::services::scaffold::ScaffoldOutcome;
use crate::output::{OutputContext, Styles};

/// Placeholder shown wherever the positional argument goes.
pub const DIRECTORY_PLACEHOLDER: &str = "<project-directory>";

/// Renders scaffolder messages using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Explain how to invoke the tool when the directory argument is missing.
    ///
    /// The error line goes to stderr; the guide goes to stdout and is printed
    /// even in quiet mode, since it is the whole response.
    pub fn render_usage(&self, bin: &str) {
        self.ctx.error("Please specify the project directory:");
        for line in usage_lines(&self.ctx.styles, bin) {
            println!("{line}");
        }
    }

    /// Print the completion banner and the commands to run next.
    pub fn render_completion(&self, outcome: &ScaffoldOutcome) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.success("setup is successfully completed");
        for line in completion_lines(&self.ctx.styles, outcome) {
            println!("{line}");
        }
    }
}

/// Lines of the usage guide (stdout part).
#[must_use]
pub fn usage_lines(styles: &Styles, bin: &str) -> Vec<String> {
    let program = bin.style(styles.program);
    let help = format!("{bin} --help");
    vec![
        format!("    {program} {}", DIRECTORY_PLACEHOLDER.style(styles.argument)),
        String::new(),
        "  For example:".to_string(),
        format!("    {program} {}", "my-app".style(styles.argument)),
        String::new(),
        format!("  Run {} to see all options.", help.style(styles.program)),
    ]
}

/// Follow-up lines after a successful run.
#[must_use]
pub fn completion_lines(styles: &Styles, outcome: &ScaffoldOutcome) -> Vec<String> {
    let next = format!(
        "$ cd {} && {}",
        outcome.project_directory, outcome.next_command
    );
    vec![
        "  run commands".to_string(),
        format!("    {}", next.style(styles.argument)),
    ]
}
