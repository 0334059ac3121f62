mod cli;
mod config;
mod error;
mod gemini;
mod post;
mod ui;

use clap::Parser;
use cli::{Cli, Commands, GenerateArgs};
use config::{LogFormat, LogLevel, Settings};
use error::{ExitStatus, RagegenError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    ui::set_quiet_mode(cli.quiet);

    // Config settings provide logging defaults; CLI flags take precedence
    let settings = load_settings(&cli);
    setup_logging(cli.verbose, cli.quiet, cli.log_format.as_deref(), &settings);

    let result = run_command(cli).await;

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_status().into()
        }
    }
}

async fn run_command(cli: Cli) -> Result<ExitStatus, RagegenError> {
    match cli.command {
        Some(Commands::Generate {
            subreddit,
            description,
            limitations,
            topic,
            intensity,
            no_save,
            dry_run,
        }) => {
            cli::run_generate(
                GenerateArgs {
                    subreddit,
                    description,
                    limitations,
                    topic,
                    intensity,
                    no_save,
                    dry_run,
                },
                cli.config,
            )
            .await
        }

        Some(Commands::Init {
            force,
            api_key_command,
        }) => {
            cli::run_init(force, api_key_command)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Config { command }) => {
            cli::run_config(command, cli.config)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Posts { command }) => {
            cli::run_posts(command, cli.config)?;
            Ok(ExitStatus::Success)
        }

        None => {
            // No command - run init when no config exists yet
            if !config::config_exists()? {
                ui::print_info("Welcome to ragegen!");
                ui::print_info("Let's set up your configuration.");
                println!();
                cli::run_init(false, None)?;
            } else {
                use clap::CommandFactory;
                let mut cmd = Cli::command();
                cmd.print_help().ok();
            }
            Ok(ExitStatus::Success)
        }
    }
}

fn load_settings(cli: &Cli) -> Settings {
    let loaded = match cli.config {
        Some(ref path) => config::load_config_from(path),
        None => config::load_config(),
    };
    loaded.map(|c| c.settings).unwrap_or_default()
}

fn setup_logging(verbose: u8, quiet: bool, format: Option<&str>, settings: &Settings) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else if verbose > 0 {
        match verbose {
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    } else {
        match settings.log_level {
            LogLevel::Quiet => "warn",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json = match format {
        Some(f) => f == "json",
        None => settings.log_format == LogFormat::Json,
    };

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().without_time().with_target(false))
            .init();
    }
}
