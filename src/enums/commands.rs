use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Improve or refactor comments in code files
    ImproveComments {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
        #[clap(flatten)]
        options: EditOptions,
    },
    /// Generate docstrings for functions in code files
    GenerateDocstrings {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
        #[clap(flatten)]
        options: EditOptions,
    },
    /// Tidy up code files without changing behavior
    Cleanup {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
        #[clap(flatten)]
        options: EditOptions,
    },
    /// Apply a custom instruction to code files
    Apply {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
        /// Instruction given to the model
        #[clap(short, long, conflicts_with = "prompt_file")]
        prompt: Option<String>,
        /// File holding the instruction given to the model
        #[clap(long)]
        prompt_file: Option<PathBuf>,
        #[clap(flatten)]
        options: EditOptions,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct EditOptions {
    /// Model identifier sent to the endpoint
    #[clap(short, long)]
    pub model: Option<String>,
    /// Custom message template file
    #[clap(long)]
    pub template: Option<PathBuf>,
    /// Attempt budget for unparseable model responses
    #[clap(long)]
    pub max_retries: Option<u32>,
    /// Write <file>.bak with the original contents before overwriting
    #[clap(long)]
    pub backup: bool,
}
