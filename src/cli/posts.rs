use crate::cli::PostsCommands;
use crate::config::{self, Config};
use crate::error::Result;
use crate::post;
use crate::ui;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Run posts subcommands
pub fn run_posts(command: PostsCommands, config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => config::load_config_from(&path),
        None => config::load_config(),
    }
    .unwrap_or_else(|_| Config::default_with_api_key_command(None));

    match command {
        PostsCommands::List => list_posts(&config),
        PostsCommands::Dir => {
            println!("{}", config.output.directory.display());
            Ok(())
        }
    }
}

fn list_posts(config: &Config) -> Result<()> {
    let posts = post::list_saved_posts(&config.output.directory)?;

    if posts.is_empty() {
        ui::print_info("No generated posts found");
        ui::print_info("Use 'ragegen generate' to create one");
        return Ok(());
    }

    println!("{:<50} {:>10} {}", "FILE", "SIZE", "MODIFIED");
    println!("{}", "-".repeat(80));

    for path in posts {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
            .to_string();

        let (size, modified) = match std::fs::metadata(&path) {
            Ok(meta) => {
                let modified = meta
                    .modified()
                    .ok()
                    .map(|t| {
                        DateTime::<Local>::from(t)
                            .format("%Y-%m-%d %H:%M")
                            .to_string()
                    })
                    .unwrap_or_else(|| "unknown".to_string());
                (format!("{} B", meta.len()), modified)
            }
            Err(_) => ("?".to_string(), "unknown".to_string()),
        };

        println!("{:<50} {:>10} {}", truncate(&name, 48), size, modified);
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
