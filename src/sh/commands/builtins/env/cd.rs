// Cd command

use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::{Result, Context, bail};
use std::fs;
use std::io::Write;
use crate::sh::commands::builtins::common::{resolve_path, required_arg};

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<i32> {
        let path_str = required_arg(args, "directory")?;

        let new_path = resolve_path(ctx, path_str);
        let meta = fs::metadata(&new_path).with_context(|| path_str.to_string())?;
        if !meta.is_dir() {
            bail!("{}: Not a directory", path_str);
        }
        // Resolving "dir/." needs search permission on dir, same as chdir.
        fs::metadata(new_path.join(".")).with_context(|| path_str.to_string())?;
        // Canonicalize to remove .. and .
        ctx.cwd = new_path
            .canonicalize()
            .with_context(|| path_str.to_string())?;
        log::debug!("cwd is now {}", ctx.cwd.display());
        Ok(0)
    }
}
