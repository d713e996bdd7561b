use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct HistoryCommand;

impl Executable for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let mut result = Ok(());
        ctx.history.for_each(|idx, line| {
            if result.is_ok() {
                result = writeln!(out, "{} {}", idx, line);
            }
        });
        result?;
        Ok(0)
    }
}
