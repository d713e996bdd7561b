// System command

use crate::sh::ast::Stage;
use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

pub const STATUS_NOT_FOUND: i32 = 127;
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

/// A stage that could not be started.
#[derive(Debug)]
pub struct LaunchError {
    pub program: String,
    /// Whether the program itself was located before spawning.
    pub found: bool,
    pub source: io::Error,
}

impl LaunchError {
    pub fn status(&self) -> i32 {
        match self.source.kind() {
            io::ErrorKind::NotFound if !self.found => STATUS_NOT_FOUND,
            io::ErrorKind::PermissionDenied => STATUS_NOT_EXECUTABLE,
            _ => 1,
        }
    }
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source.kind() {
            io::ErrorKind::NotFound if !self.found => write!(f, "{}: command not found", self.program),
            io::ErrorKind::PermissionDenied => write!(f, "{}: permission denied", self.program),
            _ => write!(f, "{}: {}", self.program, self.source),
        }
    }
}

/// Finds the program against the context's PATH and working directory.
fn resolve_program(program: &str, ctx: &ShellContext) -> PathBuf {
    match which::which_in(program, ctx.env.get("PATH"), &ctx.cwd) {
        Ok(path) => path,
        // Leave the final verdict to spawn: a path that exists but is not
        // executable should surface as a permission error, not "not found".
        Err(_) if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') => {
            ctx.cwd.join(program)
        }
        Err(_) => PathBuf::from(program),
    }
}

/// Builds the OS command for a stage. Streams are left to the caller.
pub fn build_command(stage: &Stage, ctx: &ShellContext) -> Command {
    let mut cmd = Command::new(resolve_program(&stage.program, ctx));
    // A cwd removed after `cd` would make the child's chdir fail; run from ours instead.
    if ctx.cwd.is_dir() {
        cmd.current_dir(&ctx.cwd);
    } else {
        warn!("{} no longer exists, running {} from the shell's own directory", ctx.cwd.display(), stage.program);
    }

    // The context's environment is the source of truth
    cmd.env_clear();
    cmd.envs(&ctx.env);

    cmd.args(&stage.args);
    cmd
}

/// Spawns the stage's program, mapping failures to [`LaunchError`].
pub fn spawn(cmd: &mut Command, stage: &Stage) -> std::result::Result<std::process::Child, LaunchError> {
    debug!("spawning {} {:?}", stage.program, stage.args);
    cmd.spawn().map_err(|source| LaunchError {
        program: stage.program.clone(),
        found: Path::new(cmd.get_program()).is_file(),
        source,
    })
}

/// Human-readable description of an unsuccessful exit.
pub fn describe_failure(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit status {}", code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("terminated by signal {}", signal);
        }
    }
    status.to_string()
}

/// Status code to record for an exit status. Signal deaths follow the 128+n convention.
pub fn status_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Runs one external program with all three streams inherited from the shell.
pub struct SystemCommand;

impl Executable for SystemCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let Some(stage) = Stage::from_tokens(args.to_vec()) else {
            return Ok(0);
        };

        // Our own buffered text must land before anything the child prints.
        out.flush()?;

        let mut cmd = build_command(&stage, ctx);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let mut child = match spawn(&mut cmd, &stage) {
            Ok(child) => child,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                return Ok(e.status());
            }
        };

        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => {
                writeln!(out, "Error: {}: {}", stage.program, e)?;
                return Ok(1);
            }
        };
        debug!("{} finished with {}", stage.program, status);

        if !status.success() {
            writeln!(out, "Error: {}", describe_failure(&status))?;
        }
        Ok(status_code(&status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch_error(found: bool, kind: io::ErrorKind) -> LaunchError {
        LaunchError {
            program: "tool".to_string(),
            found,
            source: io::Error::new(kind, "gone"),
        }
    }

    #[test]
    fn test_not_found_only_when_lookup_failed() {
        let missing = launch_error(false, io::ErrorKind::NotFound);
        assert_eq!(missing.to_string(), "tool: command not found");
        assert_eq!(missing.status(), STATUS_NOT_FOUND);

        let located = launch_error(true, io::ErrorKind::NotFound);
        assert_eq!(located.to_string(), "tool: gone");
        assert_eq!(located.status(), 1);
    }

    #[test]
    fn test_permission_denied_status() {
        let denied = launch_error(true, io::ErrorKind::PermissionDenied);
        assert_eq!(denied.to_string(), "tool: permission denied");
        assert_eq!(denied.status(), STATUS_NOT_EXECUTABLE);
    }
}
