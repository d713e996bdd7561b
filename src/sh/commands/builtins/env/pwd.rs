use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context};
use std::fs;
use std::io::Write;

pub struct PwdCommand;

impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        // The directory may have been removed underneath us since the last cd.
        fs::metadata(&ctx.cwd).with_context(|| ctx.cwd.display().to_string())?;
        writeln!(out, "{}", ctx.cwd.display())?;
        Ok(0)
    }
}
