// Rm command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::fs;
use std::io::Write;
use crate::sh::commands::builtins::common::{resolve_path, required_args};

/// Removes files only. A failure on one file is reported and the rest are still processed.
pub struct RmCommand;
impl Executable for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let paths = required_args(args, "file name")?;

        let mut status = 0;
        for path_str in paths {
            let p = resolve_path(ctx, path_str);
            if let Err(e) = fs::remove_file(&p) {
                writeln!(out, "rm: {}: {}", path_str, e)?;
                status = 1;
            }
        }
        Ok(status)
    }
}
