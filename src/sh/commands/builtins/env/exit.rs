// Exit command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

/// Arguments are ignored; the shell always leaves with status 0.
pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<i32> {
        ctx.exit_requested = true;
        Ok(0)
    }
}
