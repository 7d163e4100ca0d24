//! pf - Portfolio API admin CLI
//!
//! # Examples
//!
//! ```bash
//! # First-time setup
//! pf signup --email admin@example.com --password hunter22
//! export PF_TOKEN=$(pf login --email admin@example.com --password hunter22 | jq -r .session.accessToken)
//!
//! # Manage projects
//! pf project create --title Castle --image-url https://x/1.png
//! pf project list --pretty
//! ```

mod cli;
mod commands;
mod project_commands;

use crate::{cli::Cli, commands::Commands, project_commands::ProjectCommands};

use pf_cli::{Client, ProjectFields};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = cli.server.unwrap_or_else(|| {
        format!(
            "http://{}:{}",
            pf_config::DEFAULT_HOST,
            pf_config::DEFAULT_PORT
        )
    });

    let client = Client::new(&server_url, &cli.prefix, cli.token.as_deref());

    let result = match cli.command {
        Commands::Signup { email, password } => client.signup(&email, &password).await,
        Commands::Login { email, password } => client.login(&email, &password).await,

        // Project commands
        Commands::Project { action } => match action {
            ProjectCommands::List => client.list_projects().await,
            ProjectCommands::Get { id } => client.get_project(&id).await,
            ProjectCommands::Create { fields } => {
                client.create_project(&ProjectFields::from(fields)).await
            }
            ProjectCommands::Update { id, fields } => {
                client
                    .update_project(&id, &ProjectFields::from(fields))
                    .await
            }
            ProjectCommands::Delete { id } => client.delete_project(&id).await,
        },
    };

    // Handle result
    match result {
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
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
