use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub const USER_VAR: &str = if cfg!(windows) { "USERNAME" } else { "USER" };

pub struct WhoamiCommand;

impl Executable for WhoamiCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let user = ctx.env.get(USER_VAR).map(String::as_str).unwrap_or("");
        writeln!(out, "{}", user)?;
        Ok(0)
    }
}
