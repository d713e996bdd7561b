use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use chrono::Local;
use std::io::Write;

/// Zone is printed as a numeric offset (`+0100`); chrono has no zone
/// abbreviations without a tz database.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %z %Y";

pub struct DateCommand;

impl Executable for DateCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        writeln!(out, "{}", Local::now().format(DATE_FORMAT))?;
        Ok(0)
    }
}
