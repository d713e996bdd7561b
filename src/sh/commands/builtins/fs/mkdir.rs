// Mkdir command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context};
use std::fs;
use std::io::Write;
use crate::sh::commands::builtins::common::{resolve_path, required_arg};

/// Creates exactly one directory. No `-p`: the parent must already exist.
pub struct MkdirCommand;
impl Executable for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<i32> {
        let path_str = required_arg(args, "directory name")?;
        let p = resolve_path(ctx, path_str);
        fs::create_dir(&p).with_context(|| path_str.to_string())?;
        Ok(0)
    }
}
