use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use crate::sh::commands::Registry;
use crate::sh::history::History;

/// Everything one shell instance owns. Nothing here is process-global, so
/// several contexts can live side by side (tests do exactly that).
#[derive(Clone)]
pub struct ShellContext {
    pub cwd: PathBuf,
    pub env: HashMap<String, String>,
    pub exit_code: i32,
    pub exit_requested: bool,
    pub history: History,
    pub registry: Arc<Registry>,
}

impl ShellContext {
    pub fn new() -> Self {
        let env: HashMap<String, String> = std::env::vars().collect();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_env(cwd, env)
    }

    pub fn with_env(cwd: PathBuf, env: HashMap<String, String>) -> Self {
        let mut registry = Registry::new();
        crate::sh::commands::builtins::register_all_builtins(&mut registry);
        Self {
            cwd,
            env,
            exit_code: 0,
            exit_requested: false,
            history: History::new(),
            registry: Arc::new(registry),
        }
    }

    /// Layers extra variables over the inherited environment.
    pub fn overlay_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.env.extend(vars);
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
