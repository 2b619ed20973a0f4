use clap::Subcommand;

#[derive(Subcommand)]
pub enum RoleCommands {
    /// List one page of roles
    List {
        /// Page number (anything but a positive integer means page 1)
        #[arg(long)]
        page: Option<String>,

        /// Filter roles by name
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a role by ID
    Get {
        /// Role ID (UUID)
        id: String,
    },
}
