use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct EnvCommand;

impl Executable for EnvCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let mut keys: Vec<&String> = ctx.env.keys().collect();
        keys.sort();

        for key in keys {
            writeln!(out, "{}={}", key, ctx.env[key])?;
        }
        Ok(0)
    }
}
