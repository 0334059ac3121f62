mod config_cmd;
mod generate;
mod init;
mod posts;

pub use config_cmd::run_config;
pub use generate::{run_generate, GenerateArgs};
pub use init::run_init;
pub use posts::run_posts;

use crate::post::PostIntensity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ragegen")]
#[command(author, version, about = "Generate ragebait Reddit posts with Gemini")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (can repeat: -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: text (default) or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a post (flags omitted in a terminal are prompted for)
    Generate {
        /// Target subreddit name (letters, numbers, underscores)
        #[arg(short, long)]
        subreddit: Option<String>,

        /// Subreddit description
        #[arg(short, long)]
        description: Option<String>,

        /// Subreddit rules the post must respect
        #[arg(short, long)]
        limitations: Option<String>,

        /// Topic to focus on
        #[arg(short, long)]
        topic: Option<String>,

        /// Intensity level (defaults to moderate)
        #[arg(short, long, value_enum)]
        intensity: Option<PostIntensity>,

        /// Don't write the report file
        #[arg(long)]
        no_save: bool,

        /// Print the prompt without calling the API or saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Command that prints the Gemini API key
        #[arg(long, value_name = "CMD")]
        api_key_command: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage generated post reports
    Posts {
        #[command(subcommand)]
        command: PostsCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config (secrets redacted)
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Validate config file
    Validate,

    /// Print config file path
    Path,
}

#[derive(Subcommand)]
pub enum PostsCommands {
    /// List saved post reports, newest first
    List,

    /// Print the output directory path
    Dir,
}
