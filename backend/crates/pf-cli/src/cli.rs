use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pf")]
#[command(about = "Portfolio API admin CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the server's default bind address)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Route prefix the API is mounted under
    #[arg(long, global = true, default_value = pf_config::DEFAULT_ROUTE_PREFIX)]
    pub(crate) prefix: String,

    /// Bearer token from `pf login`, required for project mutations
    #[arg(long, global = true, env = "PF_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
