use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context};
use std::fs;
use std::io::Write;
use crate::sh::commands::builtins::common::{resolve_path, required_arg};

/// Removes one empty directory.
pub struct RmdirCommand;
impl Executable for RmdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<i32> {
        let path_str = required_arg(args, "directory name")?;
        let p = resolve_path(ctx, path_str);
        fs::remove_dir(&p).with_context(|| path_str.to_string())?;
        Ok(0)
    }
}
