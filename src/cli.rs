//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  textscrub                              Launch the two-panel TUI
  textscrub -r \"foo\" -t \"foo bar\"        Remove every \"foo\", print the result
  cat draft.txt | textscrub -r \"TODO\"    Remove from stdin
  textscrub -r \"foo\" -t \"foo bar\" --ask  Scrub, then ask the AI about the result
  textscrub config                       Show config paths and API key status
  textscrub config --set-key sk-or-...   Store the API key in the config dir
  textscrub completions bash             Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Remove literal text from a paragraph and get AI assistance on the result",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Remove every case-insensitive occurrence of this literal text, print
    /// the result, and exit (without opening the TUI)
    #[arg(short = 'r', long = "remove", value_name = "PATTERN")]
    pub remove: Option<String>,

    /// Source text for --remove (reads stdin when omitted)
    #[arg(short = 't', long = "text", requires = "remove")]
    pub text: Option<String>,

    /// After removing, send the result to the model and print the reply
    #[arg(long, requires = "remove")]
    pub ask: bool,

    /// Override model for --ask
    #[arg(short = 'm', long, help = "Model ID (e.g. openai/gpt-4o)")]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, model, and API key status
    Config {
        /// Store this API key in the config directory and exit
        #[arg(long, value_name = "KEY")]
        set_key: Option<String>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no one-shot mode or subcommand was requested.
    pub fn wants_tui(&self) -> bool {
        self.command.is_none() && self.remove.is_none()
    }
}
