pub mod fs;
pub mod env;
pub mod io;
pub mod common; // Private helpers

use crate::sh::commands::Registry;

/// Registers every built-in command, in the order `help` lists them.
pub fn register_all_builtins(registry: &mut Registry) {
    // Env/Navigation
    registry.register("exit", "Exit the shell", Box::new(env::exit::ExitCommand));
    registry.register("cd", "Change directory", Box::new(env::cd::CdCommand));
    registry.register("history", "Show command history", Box::new(io::history::HistoryCommand));

    // FS commands
    registry.register("ls", "List files in directory", Box::new(fs::ls::LsCommand));
    registry.register("pwd", "Print current directory", Box::new(env::pwd::PwdCommand));
    registry.register("mkdir", "Create a directory", Box::new(fs::mkdir::MkdirCommand));
    registry.register("rmdir", "Remove a directory", Box::new(fs::rmdir::RmdirCommand));
    registry.register("rm", "Remove file(s)", Box::new(fs::rm::RmCommand));

    // IO
    registry.register("cat", "Concatenate and display file(s)", Box::new(io::cat::CatCommand));
    registry.register("echo", "Display message", Box::new(io::echo::EchoCommand));
    registry.register("date", "Print current date and time", Box::new(io::date::DateCommand));
    registry.register("whoami", "Print current user", Box::new(env::whoami::WhoamiCommand));
    registry.register("env", "Print environment variables", Box::new(env::printenv::EnvCommand));
    registry.register("clear", "Clear the screen", Box::new(io::clear::ClearCommand));
    registry.register("help", "Display this help message", Box::new(io::help::HelpCommand));
}
