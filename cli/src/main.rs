//! Sprout CLI - scaffold a new project from the template repository

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the relayed git / package manager output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = sprout_cli::run(std::env::args_os()).await;
    std::process::exit(code);
}
