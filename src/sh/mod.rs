pub mod ast;
pub mod commands;
pub mod context;
pub mod executor;
pub mod history;
pub mod parser;

use context::ShellContext;
use executor::execute_expr;
use anyhow::Result;
use std::io::Write;


/// Executes every statement of one input line, left to right, each to
/// completion. A failing statement never stops the next one; `exit` does.
pub fn run_command_line(line: &str, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32> {
    for expr in parser::parse_command_line(line) {
        execute_expr(&expr, ctx, out)?;
        if ctx.exit_requested {
            break;
        }
    }
    out.flush()?;
    Ok(ctx.exit_code)
}
