//! Application run modes: logger init, one-shot scrub/ask, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;

/// Initialize env_logger. In TUI mode, writes to a file in the cache dir to
/// avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()));

    if args.wants_tui() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && let Some(dir) = path.parent()
            && std::fs::create_dir_all(dir).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run one-shot mode: scrub the text, then either print it or forward it to
/// the model and print the reply. Exits the process on failure.
pub async fn run_one_shot(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let pattern = args.remove.as_ref().expect("remove is some");
    let text = match &args.text {
        Some(t) => t.clone(),
        None => io::read_to_string(io::stdin())?,
    };

    let scrubbed = core::scrub::remove_literal(&text, pattern).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if !args.ask {
        println!("{}", scrubbed);
        return Ok(());
    }

    if scrubbed.is_empty() {
        eprintln!("Error: nothing left to send after removal");
        std::process::exit(1);
    }

    let mut config = config.clone();
    if let Some(model) = &args.model {
        config.model_id = model.clone();
    }

    match core::llm::complete(&config, &scrubbed, None).await {
        Ok(reply) => {
            println!("{}", reply);
            Ok(())
        }
        Err(e) => {
            log::error!("completion request failed: {}", e.log_detail());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the `config` subcommand: store a key, or print paths and status.
pub fn run_config(config: &Config, set_key: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(key) = set_key {
        let path = core::api_key::store_api_key(key)?;
        println!("API key saved to {}", path.display());
        return Ok(());
    }

    println!("model:    {}", config.model_id);
    println!("base URL: {}", config.base_url);
    match core::api_key::credentials_path() {
        Some(p) => println!("key file: {}", p.display()),
        None => println!("key file: (no config directory available)"),
    }
    println!(
        "API key:  {}",
        if config.has_credential() {
            "configured"
        } else {
            "not set"
        }
    );
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
