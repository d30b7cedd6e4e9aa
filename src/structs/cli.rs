use clap::Parser;

use crate::config::constants::{OPENAI_API_KEY_ENV, OPENAI_ORGANIZATION_ENV, OPENAI_PROJECT_ENV};
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "lazydev-cli")]
#[clap(about = "AI-powered code editing tool", long_about = None)]
pub struct Cli {
    /// API key for authentication
    #[clap(long, env = OPENAI_API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Organization identifier (optional)
    #[clap(long, env = OPENAI_ORGANIZATION_ENV)]
    pub organization: Option<String>,

    /// Project identifier (optional)
    #[clap(long, env = OPENAI_PROJECT_ENV)]
    pub project: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
