//! Sprout CLI library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

use std::ffi::OsString;

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;

/// Run the scaffolder for a full argument vector (program name first) and
/// return the exit code.
///
/// `--help` and `--version` return 0, other argument errors return clap's
/// code, a missing directory or an aborted run returns 1.
pub async fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli::parse(argv) {
        Ok(cli) => cli.run().await,
        Err(e) => {
            if let Err(write_err) = e.print() {
                tracing::debug!(error = %write_err, "could not print argument error");
            }
            e.exit_code()
        }
    }
}
