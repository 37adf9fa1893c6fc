//! Available subcommands.

use clap::Subcommand;

/// Available commands for the notification client.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and list notifications
    List {
        /// Only show unread notifications
        #[arg(short, long)]
        unread: bool,
    },

    /// Mark one or more notifications as read
    Read {
        /// Notification IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Mark every unread notification as read
    ReadAll,

    /// Store an access token for later commands
    Login {
        /// Access token issued by the server
        token: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show whether a session is available and where it comes from
    Whoami,
}
