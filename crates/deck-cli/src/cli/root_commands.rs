use clap::Subcommand;

use super::subcommands::{AuthCommands, LocaleCommands, ProjectCommands, TaskCommands};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, registration, and session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Project commands.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Task commands.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Locale inspection and switching.
    Locale {
        #[command(subcommand)]
        action: LocaleCommands,
    },
    /// Navigate to a path: locale resolution, auth guard, then the view.
    Open {
        /// Request path, e.g. `/projects` or `/en/projects/7`.
        path: String,
    },
}
