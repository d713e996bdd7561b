// Ls command

use std::fs;
use std::io::Write;
use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context};
use crate::sh::commands::builtins::common::resolve_path;

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
        let path_str = if args.len() > 1 {
            &args[1]
        } else {
            "."
        };

        let path = resolve_path(ctx, path_str);
        let entries = fs::read_dir(&path)
            .with_context(|| path_str.to_string())?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| path_str.to_string())?;
            names.push(entry.file_name());
        }
        // Sort for consistent output
        names.sort();

        for name in names {
            writeln!(out, "{}", name.to_string_lossy())?;
        }
        Ok(0)
    }
}
