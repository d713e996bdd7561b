use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mish", version, about = "mish: a minimal interactive command shell")]
pub struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Config file to load instead of ./mish.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not load .env files
    #[arg(long = "no-dotenv")]
    pub no_dotenv: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["mish"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_dotenv);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "mish", "-c", "ls; pwd", "--config", "alt.toml", "--no-dotenv", "-v",
        ])
        .unwrap();
        assert_eq!(cli.command.as_deref(), Some("ls; pwd"));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.no_dotenv);
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["mish", "--command", "echo hi"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("echo hi"));
    }

    #[test]
    fn test_command_needs_a_value() {
        assert!(Cli::try_parse_from(["mish", "-c"]).is_err());
        assert!(Cli::try_parse_from(["mish", "--bogus"]).is_err());
    }
}
