use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::io::{BufRead, Write};
use crate::sh::context::ShellContext;
use crate::sh::run_command_line;

pub const PROMPT: &str = "$ ";

/// Ctrl-C / SIGTERM end the whole shell, whatever the loop is doing.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n{}", "Received interrupt signal. Exiting...".yellow());
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")
}

/// Reads lines until end of input or `exit`. Every line read is recorded
/// in history before it runs, blank ones included.
pub fn run<R: BufRead>(ctx: &mut ShellContext, mut input: R, out: &mut dyn Write) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("Failed to read input")? == 0 {
            info!("end of input");
            break;
        }
        let line = decode_line(&buf);
        debug!("read: {:?}", line);

        run_line(ctx, &line, out)?;
        if ctx.exit_requested {
            info!("exit requested");
            break;
        }
    }
    Ok(())
}

/// One read cycle's worth of work: record, then execute.
pub fn run_line(ctx: &mut ShellContext, line: &str, out: &mut dyn Write) -> Result<()> {
    ctx.history.record(line);
    debug!("history entry {}", ctx.history.len());
    run_command_line(line, ctx, out)?;
    Ok(())
}

fn decode_line(buf: &[u8]) -> String {
    let mut line = String::from_utf8_lossy(buf).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(ctx: &mut ShellContext, script: &str) -> String {
        let mut out = Vec::new();
        run(ctx, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn test_ctx() -> (tempfile::TempDir, ShellContext) {
        let dir = tempdir().unwrap();
        let mut ctx = ShellContext::new();
        ctx.cwd = dir.path().canonicalize().unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_prompt_before_each_read() {
        let (_dir, mut ctx) = test_ctx();
        let output = run_script(&mut ctx, "echo hi\n");
        // Second prompt is printed before hitting end of input.
        assert_eq!(output, "$ hi\n$ ");
    }

    #[test]
    fn test_history_counts_read_cycles() {
        let (_dir, mut ctx) = test_ctx();
        let output = run_script(&mut ctx, "echo a; echo b\n\nhistory\n");
        assert!(output.contains("1 echo a; echo b\n2 \n3 history\n"));
        assert_eq!(ctx.history.len(), 3);
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let (_dir, mut ctx) = test_ctx();
        let output = run_script(&mut ctx, "echo one; exit; echo two\necho three\n");
        assert!(output.contains("one"));
        assert!(!output.contains("two"));
        assert!(!output.contains("three"));
        assert!(ctx.exit_requested);
    }

    #[test]
    fn test_blank_lines_are_silent() {
        let (_dir, mut ctx) = test_ctx();
        let output = run_script(&mut ctx, "\n   \n ; ; \n|\n");
        assert_eq!(output, "$ $ $ $ $ ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let (_dir, mut ctx) = test_ctx();
        let output = run_script(&mut ctx, "echo tail");
        assert_eq!(output, "$ tail\n$ ");
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(decode_line(b"pwd\r\n"), "pwd");
        assert_eq!(decode_line(b"pwd"), "pwd");
    }
}
