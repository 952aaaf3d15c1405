use std::process::{Command, ExitStatus, Stdio};

use crate::core::errors::{GnupgToolsError, Result};

/// Everything a finished child process left behind.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Lossy UTF-8 view of stderr, trimmed.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Run `cmd` to completion and capture stdout and stderr.
///
/// The program is launched directly from its argument vector, never
/// through a shell. Stdin is inherited so the child may prompt the
/// operator. A non-zero exit status is NOT an error here; only failing
/// to launch the program is.
pub fn execute(cmd: &mut Command) -> Result<CommandOutput> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(
        program = %program,
        args = ?cmd.get_args().collect::<Vec<_>>(),
        "running external command"
    );

    let output = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| GnupgToolsError::LaunchFailed {
            program: program.clone(),
            source,
        })?;

    let output = CommandOutput {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
    };
    if !output.success() {
        tracing::warn!(
            program = %program,
            status = %output.status,
            stderr = %output.stderr_text(),
            "external command failed"
        );
    }
    Ok(output)
}
