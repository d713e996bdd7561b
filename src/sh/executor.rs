use crate::sh::ast::{CommandExpr, Stage};
use crate::sh::commands::system::{self, SystemCommand};
use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use log::{debug, warn};
use std::io::Write;
use std::process::{Child, ChildStdout, ExitStatus, Stdio};

/// Runs one parsed statement to completion and records its status in `ctx`.
///
/// Only failures writing to `out` escape as errors; everything else is
/// reported on `out` and turned into a status.
pub fn execute_expr(expr: &CommandExpr, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
    let exit_code = match expr {
        CommandExpr::Empty => return Ok(ctx.exit_code),
        CommandExpr::Simple(stage) => execute_simple(stage, ctx, out)?,
        CommandExpr::Pipeline(stages) => execute_pipeline(stages, ctx, out)?,
    };
    ctx.exit_code = exit_code;
    Ok(exit_code)
}

fn execute_simple(stage: &Stage, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
    let argv = stage.argv();
    let registry = ctx.registry.clone();

    match registry.get(&stage.program) {
        Some(cmd) => {
            debug!("builtin: {}", stage.program);
            match cmd.execute(&argv, ctx, out) {
                Ok(code) => Ok(code),
                Err(e) => {
                    writeln!(out, "{}: {:#}", stage.program, e)?;
                    Ok(1)
                }
            }
        }
        None => SystemCommand.execute(&argv, ctx, out),
    }
}

/// Chains every stage's stdout into the next stage's stdin. The first stage
/// reads the shell's stdin and the last one writes to the shell's stdout.
///
/// All stages are reaped before returning; the reported status is the last stage's.
pub fn execute_pipeline(stages: &[Stage], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
    if stages.is_empty() {
        return Ok(0);
    }
    out.flush()?;

    let last = stages.len() - 1;
    let mut children: Vec<(String, Child)> = Vec::with_capacity(stages.len());
    let mut upstream: Option<ChildStdout> = None;

    for (idx, stage) in stages.iter().enumerate() {
        let mut cmd = system::build_command(stage, ctx);
        cmd.stdin(match upstream.take() {
            Some(pipe) => Stdio::from(pipe),
            None => Stdio::inherit(),
        });
        cmd.stdout(if idx == last { Stdio::inherit() } else { Stdio::piped() });
        cmd.stderr(Stdio::inherit());

        let spawned = system::spawn(&mut cmd, stage);
        // Drops our copy of the upstream read end.
        drop(cmd);

        match spawned {
            Ok(mut child) => {
                upstream = child.stdout.take();
                children.push((stage.program.clone(), child));
            }
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                abandon(children);
                return Ok(e.status());
            }
        }
    }
    debug!("pipeline running: {} stage(s)", children.len());

    let mut last_status: Option<ExitStatus> = None;
    let mut wait_failed = false;
    for (idx, (program, mut child)) in children.into_iter().enumerate() {
        match child.wait() {
            Ok(status) => {
                debug!("stage {} ({}) finished with {}", idx, program, status);
                if idx == last {
                    last_status = Some(status);
                }
            }
            Err(e) => {
                writeln!(out, "Error: {}: {}", program, e)?;
                wait_failed = true;
            }
        }
    }

    match last_status {
        Some(status) if status.success() => Ok(0),
        Some(status) => {
            match status.code() {
                Some(code) => writeln!(out, "Error: Command exited with status {}", code)?,
                None => writeln!(out, "Error: {}", system::describe_failure(&status))?,
            }
            Ok(system::status_code(&status))
        }
        None => {
            debug_assert!(wait_failed);
            Ok(1)
        }
    }
}

/// Kills and reaps stages that were started before a later stage failed to launch.
fn abandon(children: Vec<(String, Child)>) {
    for (program, mut child) in children {
        if let Err(e) = child.kill() {
            debug!("kill {}: {}", program, e);
        }
        if let Err(e) = child.wait() {
            warn!("failed to reap {}: {}", program, e);
        }
    }
}
