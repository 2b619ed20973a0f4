use crate::{role_commands::RoleCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Role operations
    Roles {
        #[command(subcommand)]
        action: RoleCommands,
    },
}
