use crate::sh::ast::{CommandExpr, Stage};

pub const STATEMENT_SEPARATOR: char = ';';
pub const PIPE_SEPARATOR: char = '|';

/// Splits a raw input line on every `;`. Quotes are not special, so a `;`
/// inside quoted text still separates statements.
pub fn split_statements(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(STATEMENT_SEPARATOR).collect()
}

/// Splits a statement on every `|`. Segments are returned untrimmed.
pub fn split_stages(statement: &str) -> Vec<&str> {
    if statement.is_empty() {
        return Vec::new();
    }
    statement.split(PIPE_SEPARATOR).collect()
}

/// Whitespace tokenizer. No quoting, no escapes: `"a b"` yields `"a` and `b"`.
pub fn tokenize(stage: &str) -> Vec<String> {
    stage.split_whitespace().map(str::to_string).collect()
}

/// Turns one trimmed statement into an executable expression.
pub fn parse_statement(statement: &str) -> CommandExpr {
    let segments = split_stages(statement);
    match segments.len() {
        0 => CommandExpr::Empty,
        1 => match Stage::from_tokens(tokenize(segments[0])) {
            Some(stage) => CommandExpr::Simple(stage),
            None => CommandExpr::Empty,
        },
        _ => {
            // Blank segments (e.g. "a || b") are dropped; their neighbours get chained directly.
            let stages: Vec<Stage> = segments
                .into_iter()
                .filter_map(|segment| Stage::from_tokens(tokenize(segment)))
                .collect();
            if stages.is_empty() {
                CommandExpr::Empty
            } else {
                CommandExpr::Pipeline(stages)
            }
        }
    }
}

/// Parses a whole input line into statements, in execution order.
pub fn parse_command_line(line: &str) -> Vec<CommandExpr> {
    split_statements(line)
        .into_iter()
        .map(|statement| parse_statement(statement.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(program: &str, args: &[&str]) -> Stage {
        Stage {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_split_statements_keeps_empty_segments() {
        assert_eq!(split_statements("a; b;;c"), vec!["a", " b", "", "c"]);
        assert!(split_statements("").is_empty());
    }

    #[test]
    fn test_split_ignores_quotes() {
        assert_eq!(split_statements("echo \"x;y\""), vec!["echo \"x", "y\""]);
        assert_eq!(split_stages("echo 'a|b'"), vec!["echo 'a", "b'"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  echo a b\t\t c  "), vec!["echo", "a", "b", "c"]);
        assert!(tokenize(" \t ").is_empty());
    }

    #[test]
    fn test_tokenize_splits_quoted_words() {
        assert_eq!(tokenize("echo \"hello world\""), vec!["echo", "\"hello", "world\""]);
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(
            parse_statement("ls -la /tmp"),
            CommandExpr::Simple(stage("ls", &["-la", "/tmp"]))
        );
    }

    #[test]
    fn test_parse_pipeline_skips_blank_segments() {
        assert_eq!(
            parse_statement("cat f || sort -r |"),
            CommandExpr::Pipeline(vec![stage("cat", &["f"]), stage("sort", &["-r"])])
        );
    }

    #[test]
    fn test_parse_blank_inputs() {
        assert_eq!(parse_statement(""), CommandExpr::Empty);
        assert_eq!(parse_statement("   "), CommandExpr::Empty);
        assert_eq!(parse_statement(" | | "), CommandExpr::Empty);
        assert!(parse_command_line(" ; ;").iter().all(|e| *e == CommandExpr::Empty));
    }

    #[test]
    fn test_parse_command_line_order() {
        let exprs = parse_command_line("echo 1; echo 2 | wc -l ;pwd");
        assert_eq!(exprs.len(), 3);
        assert_eq!(exprs[0], CommandExpr::Simple(stage("echo", &["1"])));
        assert_eq!(
            exprs[1],
            CommandExpr::Pipeline(vec![stage("echo", &["2"]), stage("wc", &["-l"])])
        );
        assert_eq!(exprs[2], CommandExpr::Simple(stage("pwd", &[])));
    }
}
