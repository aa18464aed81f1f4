use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "taskly",
    version,
    about = "Command-line client for a remote to-do service",
    after_help = "\
NOTE:
  The service base URL comes from --api-url, then TASKLY_API_URL, then
  http://localhost:8000. The bearer token is kept in a single file at
  $TASKLY_CONFIG_DIR/auth-token (default ~/.config/taskly/auth-token).

EXIT CODES:
  0  Success
  1  Error (auth, validation, request, network)

BEHAVIOR NOTES:
  `whoami` never fails on a bad token: an invalid or expired token is
  discarded and the session reported as anonymous.
  Task commands validate the session first; run `taskly login` when they
  report NOT_AUTHENTICATED.
  `task done` / `task undone` are idempotent on the server side.
  Each request is attempted exactly once: no retry, no client timeout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the task service
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and start a session
    Signup {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and persist the session token
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session (no network call)
    Logout,

    /// Show the identity behind the persisted token, if any
    Whoami,

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task
    Add {
        /// Task title (must be non-empty)
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all tasks
    List,
    /// Show task details
    Show {
        id: i64,
    },
    /// Update title and/or description
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a task complete
    Done {
        id: i64,
    },
    /// Mark a task incomplete
    Undone {
        id: i64,
    },
    /// Delete a task
    Delete {
        id: i64,
    },
}
