//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. It relays child
//! output to the parent terminal chunk by chunk while the child runs.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::ports::CommandRunner;

/// Read size for relaying child output.
const RELAY_CHUNK: usize = 8 * 1024;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// There is no timeout: a clone or install runs for as long as it needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_streaming(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<ExitStatus> {
        let resolved = resolve_program(program);
        tracing::debug!(program, resolved = %resolved.display(), ?args, ?cwd, "spawning");

        let mut command = tokio::process::Command::new(&resolved);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (status, (), ()) = tokio::join!(
            child.wait(),
            relay(stdout, tokio::io::stdout()),
            relay(stderr, tokio::io::stderr()),
        );

        let status = status.with_context(|| format!("waiting for {program}"))?;
        tracing::debug!(program, %status, "exited");
        Ok(status)
    }
}

/// Look the program up on `PATH` (and `PATHEXT` on Windows, so `npm` finds
/// `npm.cmd`). Falls back to the bare name and lets spawn report the error.
fn resolve_program(program: &str) -> PathBuf {
    which::which(program).unwrap_or_else(|_| PathBuf::from(program))
}

/// Copy `source` into `sink`, flushing after every chunk.
///
/// If the sink fails the source is still drained. If reading the source
/// fails, the pipe is closed at once so a child still writing gets `EPIPE`
/// instead of blocking on a full pipe.
async fn relay<R, W>(source: Option<R>, mut sink: W)
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(mut source) = source else {
        return;
    };
    let mut buf = vec![0u8; RELAY_CHUNK];
    let mut sink_ok = true;
    loop {
        let read = source.read(&mut buf).await;
        let n = match read {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "reading child output failed");
                drop(source);
                return;
            }
        };
        if sink_ok {
            let written = async {
                sink.write_all(&buf[..n]).await?;
                sink.flush().await
            };
            if let Err(e) = written.await {
                tracing::warn!(error = %e, "relaying child output failed");
                sink_ok = false;
            }
        }
    }
}
