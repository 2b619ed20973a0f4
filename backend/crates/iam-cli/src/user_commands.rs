use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List one page of users with their role names
    List {
        /// Page number (anything but a positive integer means page 1)
        #[arg(long)]
        page: Option<String>,

        /// Filter users by name
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a user by ID
    Get {
        /// User ID (UUID)
        id: String,
    },
    /// Delete a user by ID
    Delete {
        /// User ID (UUID)
        id: String,
    },
}
