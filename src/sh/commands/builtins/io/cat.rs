// Cat command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::fs;
use std::io::Write;
use crate::sh::commands::builtins::common::{resolve_path, required_args};

pub struct CatCommand;
impl Executable for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let files = required_args(args, "file name")?;

        let mut status = 0;
        for filename in files {
            let buffer = match fs::read(resolve_path(ctx, filename)) {
                Ok(buffer) => buffer,
                Err(e) => {
                    writeln!(out, "cat: {}: {}", filename, e)?;
                    status = 1;
                    continue;
                }
            };
            out.write_all(&buffer)?;
            // Keep the next file (or the prompt) on its own line.
            if !buffer.ends_with(b"\n") {
                writeln!(out)?;
            }
        }
        Ok(status)
    }
}
