use crate::error::Result;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// What an external tool left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `program` to completion. A non-zero exit is not an error here.
///
/// # Errors
///
/// Will return `Err` if the program cannot be spawned
pub async fn exec<I, S>(program: &Path, args: I, cwd: Option<&Path>) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    debug!("args: {:?}", cmd.as_std());

    let output = cmd.output().await?;
    // killed by a signal
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    debug!("  rc : '{}'", exit_code);
    debug!("  out: '{}'", stdout);
    debug!("  err: '{}'", stderr);

    Ok(ToolOutput {
        exit_code,
        stdout,
        stderr,
    })
}
