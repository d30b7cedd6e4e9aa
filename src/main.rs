use clap::Parser;
use env_logger::Env;

use lazydev_cli::structs::cli::Cli;
use lazydev_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // dotenv only sets variables that are not already present, so loading
    // .env.local first gives it precedence over .env
    dotenv::from_filename(".env.local").ok();
    dotenv::from_filename(".env").ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    runner.run_command(cli).await?;

    Ok(())
}
