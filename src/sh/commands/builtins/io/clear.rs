use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context, bail};
use std::io::Write;
use std::process::{Command, Stdio};

pub struct ClearCommand;

impl Executable for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        out.flush()?;

        let mut command = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", "cls"]);
            c
        } else {
            Command::new("clear")
        };
        command
            .current_dir(&ctx.cwd)
            .env_clear()
            .envs(&ctx.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = command.status().context("failed to run the clear program")?;
        if !status.success() {
            bail!("clear program exited with {}", status);
        }
        Ok(0)
    }
}
