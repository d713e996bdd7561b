/// One executable segment: a program name and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub program: String,
    pub args: Vec<String>,
}

impl Stage {
    /// Builds a stage from tokens. No tokens means nothing to run.
    pub fn from_tokens(mut tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        let program = tokens.remove(0);
        Some(Self { program, args: tokens })
    }

    /// Program name followed by the arguments, the shape builtins receive.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandExpr {
    // Blank statement or a pipeline made only of blank segments
    Empty,
    // Simple command: "ls /tmp"
    Simple(Stage),
    // Pipeline: "printf b\na\n | sort"
    Pipeline(Vec<Stage>),
}
