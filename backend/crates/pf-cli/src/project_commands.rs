use pf_cli::ProjectFields;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects, newest first
    List,
    /// Get a project by ID
    Get {
        /// Project ID (project:<millis>-<suffix>)
        id: String,
    },
    /// Create a project
    Create {
        #[command(flatten)]
        fields: ProjectArgs,
    },
    /// Replace a project's fields
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectArgs,
    },
    /// Delete a project
    Delete { id: String },
}

#[derive(Args)]
pub struct ProjectArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    image_url: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    roblox_link: Option<String>,
}

impl From<ProjectArgs> for ProjectFields {
    fn from(args: ProjectArgs) -> Self {
        Self {
            title: args.title,
            image_url: args.image_url,
            description: args.description,
            roblox_link: args.roblox_link,
        }
    }
}
