//! iam - IAM users/roles console
//!
//! Command-line front end for the IAM REST API.
//!
//! # Examples
//!
//! ```bash
//! # Second page of users matching "ada"
//! iam users list --page 2 --search ada --pretty
//!
//! # Look up a role
//! iam roles get 6f1c2b8e-3d4a-4c5b-9e7f-0a1b2c3d4e5f
//!
//! # Delete a user against a non-default server
//! iam --server http://127.0.0.1:4000 users delete <uuid>
//! ```

mod cli;
mod commands;
mod role_commands;
mod user_commands;

use crate::{
    cli::Cli, commands::Commands, role_commands::RoleCommands, user_commands::UserCommands,
};

use iam_cli::{CliClientResult, Client, logger};
use iam_config::Config;
use iam_core::ListOptions;

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

/// Exit code when the requested resource does not exist
const EXIT_NOT_FOUND: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.server.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.log_file(),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) if e.is_not_found() => {
            eprintln!("Error: not found: {}", e);
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration; `--server` wins over the config file.
fn load_config(server: Option<&str>) -> Result<Config, iam_config::ConfigError> {
    let mut config = Config::load()?;
    if let Some(server) = server {
        config.api.base_url = server.to_string();
    }
    config.validate()?;
    Ok(config)
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Users { action } => match action {
            UserCommands::List { page, search } => {
                let options = ListOptions::from_query(page.as_deref(), search.as_deref());
                to_json(client.fetch_users(&options).await?)
            }
            UserCommands::Get { id } => to_json(client.fetch_user_by_id(&id).await?),
            UserCommands::Delete { id } => {
                client.delete_user_by_id(&id).await?;
                Ok(json!({ "deleted_id": id }))
            }
        },

        Commands::Roles { action } => match action {
            RoleCommands::List { page, search } => {
                let options = ListOptions::from_query(page.as_deref(), search.as_deref());
                to_json(client.fetch_roles(&options).await?)
            }
            RoleCommands::Get { id } => to_json(client.fetch_role_by_id(&id).await?),
        },
    }
}

fn to_json<T: serde::Serialize>(value: T) -> CliClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}
