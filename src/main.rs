//! # textscrub
//!
//! Two-panel terminal tool: remove every occurrence of a literal string from
//! a text, and send the result to an AI model for assistance.
//!
//! ## Modes
//! - Interactive TUI (default): Text Processor panel + AI Assistant panel
//! - One-shot with `-r`/`--remove` (optionally `--ask`)
//! - `config` / `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Never fails: a missing API key surfaces when the user actually asks.
    let config = core::config::load();

    match &args.command {
        Some(Commands::Config { set_key }) => {
            return run::run_config(&config, set_key.as_deref());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    if args.remove.is_some() {
        return run::run_one_shot(&args, &config).await;
    }

    run::launch_tui(config).await
}
