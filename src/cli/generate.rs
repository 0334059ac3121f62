use crate::config::{self, Config};
use crate::error::{ExitStatus, RagegenError, Result};
use crate::gemini;
use crate::post::{self, Post, PostIntensity, PostRequest};
use crate::ui;
use std::path::PathBuf;

/// Arguments for the generate command
pub struct GenerateArgs {
    pub subreddit: Option<String>,
    pub description: Option<String>,
    pub limitations: Option<String>,
    pub topic: Option<String>,
    pub intensity: Option<PostIntensity>,
    pub no_save: bool,
    pub dry_run: bool,
}

/// Run the generate command
pub async fn run_generate(
    args: GenerateArgs,
    config_path: Option<PathBuf>,
) -> Result<ExitStatus> {
    let config = load_config(config_path.as_deref())?;

    // Fail loudly on config problems before collecting any input
    match config.validate() {
        Ok(warnings) => {
            for warning in warnings {
                ui::print_warning(&warning);
            }
        }
        Err(errors) => {
            for error in errors {
                ui::print_error(&error);
            }
            return Err(RagegenError::ConfigInvalid(
                "Config validation failed".to_string(),
            ));
        }
    }

    let request = collect_request(args.subreddit, args.description, args.limitations, args.topic, args.intensity)?;
    request.validate()?;

    if args.dry_run {
        println!("{}", gemini::build_post_prompt(&request));
        return Ok(ExitStatus::Success);
    }

    let spinner = ui::Spinner::new("Generating ragebait post...");
    let post = match gemini::generate_post(&config, &request).await {
        Ok(post) => {
            spinner.finish_and_clear();
            post
        }
        Err(e) => {
            spinner.finish_with_error(&e.to_string());
            return Err(e);
        }
    };

    display_post(&post);

    if !args.no_save {
        // Persistence failures are non-fatal; the post is already on screen
        match post::save_post(&post, &config.output.directory) {
            Ok(path) => ui::print_success(&format!("Saved to {}", path.display())),
            Err(e) => ui::print_warning(&format!("Could not save post: {}", e)),
        }
    }

    Ok(ExitStatus::Success)
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
}

/// Resolve each input from its flag, or prompt for it in a terminal
fn collect_request(
    subreddit: Option<String>,
    description: Option<String>,
    limitations: Option<String>,
    topic: Option<String>,
    intensity: Option<PostIntensity>,
) -> Result<PostRequest> {
    let interactive = ui::is_interactive();

    let subreddit = match subreddit {
        Some(s) => s,
        None if interactive => ui::prompt_text("Subreddit name:")?,
        None => {
            return Err(RagegenError::InvalidInput(
                "Subreddit name is required (use --subreddit)".to_string(),
            ))
        }
    };

    let description = match description {
        Some(d) => d,
        None if interactive => ui::prompt_text("Subreddit description:")?,
        None => {
            return Err(RagegenError::InvalidInput(
                "Subreddit description is required (use --description)".to_string(),
            ))
        }
    };

    let limitations = match limitations {
        Some(l) => Some(l),
        None if interactive => ui::prompt_text_optional("Subreddit limitations:")?,
        None => None,
    };

    let topic = match topic {
        Some(t) => Some(t),
        None if interactive => ui::prompt_text_optional("Topic to focus on:")?,
        None => None,
    };

    let intensity = match intensity {
        Some(i) => i,
        None if interactive => {
            let selection = ui::prompt_select("Intensity:", ui::intensity_options())?;
            ui::parse_intensity_option(selection)
        }
        None => PostIntensity::default(),
    };

    Ok(PostRequest {
        subreddit,
        description,
        limitations,
        topic,
        intensity,
    })
}

fn display_post(post: &Post) {
    let rule = "-".repeat(80);

    ui::print_blank();
    println!("{}", rule);
    println!("{}", post.title());
    println!("{}", rule);
    println!("{}", post.content());
    println!("{}", rule);
    ui::print_info(&format!(
        "r/{} | intensity: {} | {} words, {} characters",
        post.subreddit(),
        post.intensity(),
        post.word_count(),
        post.content_length()
    ));
}
