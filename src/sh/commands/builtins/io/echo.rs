// Echo command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct EchoCommand;

impl Executable for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        // Skip "echo" in args[0]
        let output = args[1..].join(" ");
        writeln!(out, "{}", output)?;
        Ok(0)
    }
}
