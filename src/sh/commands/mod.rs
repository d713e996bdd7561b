pub mod builtins;
pub mod system;

use crate::sh::context::ShellContext;
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

pub trait Executable: Send + Sync {
    /// `args[0]` is the command name. Returns the status to record (0 = success).
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<i32>;
}

struct Builtin {
    summary: &'static str,
    command: Box<dyn Executable>,
}

/// Name to builtin table. Keeps registration order so `help` lists commands
/// the way they were registered.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, Builtin>,
    order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, summary: &'static str, command: Box<dyn Executable>) {
        if self
            .commands
            .insert(name.to_string(), Builtin { summary, command })
            .is_none()
        {
            self.order.push(name.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Executable> {
        self.commands.get(name).map(|b| b.command.as_ref())
    }

    /// `(name, summary)` pairs in registration order.
    pub fn summaries(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name).map(|b| (name.as_str(), b.summary)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;
    impl Executable for Noop {
        fn execute(&self, _args: &[String], _ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<i32> {
            Ok(0)
        }
    }

    #[test]
    fn test_registry_keeps_order_and_replaces() {
        let mut registry = Registry::new();
        registry.register("b", "second", Box::new(Noop));
        registry.register("a", "first", Box::new(Noop));
        registry.register("b", "replaced", Box::new(Noop));

        let listed: Vec<_> = registry.summaries().collect();
        assert_eq!(listed, vec![("b", "replaced"), ("a", "first")]);
        assert!(registry.get("a").is_some());
        assert!(registry.get("zz").is_none());
    }
}
