use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tkd` binary.
#[derive(Debug, Parser)]
#[command(name = "tkd", version, about = "Taskdeck - project and task management client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, TaskCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tkd", "--format", "json", "--verbose", "project", "list"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Project { .. }));

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert!(!flags.quiet);
    }

    #[test]
    fn login_parses_credentials() {
        let cli = Cli::try_parse_from([
            "tkd", "auth", "login", "--email", "a@b.com", "--password", "hunter2",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login { email, password },
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(email, "a@b.com");
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn task_status_parses_ids_and_status() {
        let cli = Cli::try_parse_from([
            "tkd", "task", "status", "42", "--project", "7", "--status", "done",
        ])
        .expect("cli should parse");
        let Commands::Task {
            action: TaskCommands::Status { id, project, status },
        } = cli.command
        else {
            panic!("expected task status");
        };
        assert_eq!(id, 42);
        assert_eq!(project, 7);
        assert_eq!(status, "done");
    }

    #[test]
    fn open_takes_a_path() {
        let cli = Cli::try_parse_from(["tkd", "open", "/projects"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Open { .. }));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tkd", "--format", "xml", "project", "list"]).is_err());
    }
}
