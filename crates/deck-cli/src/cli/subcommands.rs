use clap::Subcommand;

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with existing credentials.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account (logs in on success).
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the current session state.
    Status,
}

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List,
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
    },
}

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks for a project.
    List {
        #[arg(long)]
        project: i64,
    },
    /// Create a task in a project.
    Add {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a task's status.
    Status {
        /// Task id.
        id: i64,
        /// Project the task belongs to.
        #[arg(long)]
        project: i64,
        /// New status: todo, in_progress, or done.
        #[arg(long)]
        status: String,
    },
}

/// Locale commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LocaleCommands {
    /// List supported locales and the default.
    List,
    /// Rewrite a path to a new locale (prints the navigation target).
    Switch {
        /// Target locale, e.g. `tr`.
        locale: String,
        /// Current path, e.g. `/en/projects`.
        #[arg(long)]
        path: String,
    },
}
