use std::path::{Path, PathBuf};
use crate::sh::context::ShellContext;
use anyhow::{Result, bail};

pub fn resolve_path(ctx: &ShellContext, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        ctx.cwd.join(p)
    }
}

/// First operand after the command name, or an argument error.
pub fn required_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str> {
    match args.get(1) {
        Some(arg) => Ok(arg),
        None => bail!("missing {}", what),
    }
}

/// All operands after the command name; errors when there are none.
pub fn required_args<'a>(args: &'a [String], what: &str) -> Result<&'a [String]> {
    if args.len() < 2 {
        bail!("missing {}", what);
    }
    Ok(&args[1..])
}
