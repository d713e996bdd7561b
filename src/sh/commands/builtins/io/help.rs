use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        writeln!(out, "{}", "Available commands:".bold())?;
        for (name, summary) in ctx.registry.summaries() {
            writeln!(out, "  {:<8}- {}", name, summary)?;
        }
        Ok(0)
    }
}
