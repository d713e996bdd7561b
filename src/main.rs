mod cli;
mod config;
mod repl;
mod sh;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::load_config;
use sh::context::ShellContext;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let startup_dir = env::current_dir().context("Failed to read the current directory")?;
    if cli.command.is_none() {
        repl::install_interrupt_handler()?;
    }
    run(cli, &startup_dir, io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

/// Builds the shell from the CLI and config, then runs either the `-c` line or
/// the interactive loop over `input`.
fn run<R: BufRead>(cli: Cli, startup_dir: &Path, input: R, out: &mut dyn Write) -> Result<ShellContext> {
    let config = load_config(startup_dir, cli.config.as_deref(), !cli.no_dotenv)?;

    let mut ctx = ShellContext::new();
    ctx.cwd = startup_dir.to_path_buf();
    ctx.overlay_env(config.env);

    match cli.command {
        Some(line) => repl::run_line(&mut ctx, &line, out)?,
        None => repl::run(&mut ctx, input, out)?,
    }
    Ok(ctx)
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
