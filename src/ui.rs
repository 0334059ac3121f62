use crate::error::{RagegenError, Result};
use crate::post::PostIntensity;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Global quiet mode flag - when true, suppresses non-error output
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode globally
pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Prompt for required text input
pub fn prompt_text(message: &str) -> Result<String> {
    Text::new(message)
        .prompt()
        .map_err(|_| RagegenError::UserCancelled)
}

/// Prompt for optional text input; blank input means None
pub fn prompt_text_optional(message: &str) -> Result<Option<String>> {
    let input = Text::new(message)
        .with_help_message("leave empty to skip")
        .prompt()
        .map_err(|_| RagegenError::UserCancelled)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Prompt for selection from a list
pub fn prompt_select(message: &str, options: Vec<&'static str>) -> Result<&'static str> {
    Select::new(message, options)
        .prompt()
        .map_err(|_| RagegenError::UserCancelled)
}

/// Create a spinner with a message
pub struct Spinner {
    progress: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner
    pub fn new(message: &str) -> Self {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        progress.set_message(message.to_string());
        progress.enable_steady_tick(Duration::from_millis(100));
        Spinner { progress }
    }

    /// Stop the spinner with an error message
    pub fn finish_with_error(&self, message: &str) {
        self.progress
            .finish_with_message(format!("{} {}", style("✗").red(), message));
    }

    /// Stop the spinner and clear it
    pub fn finish_and_clear(&self) {
        self.progress.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.progress.is_finished() {
            self.progress.finish_and_clear();
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Print an error message (always shown, even in quiet mode)
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a warning message (suppressed in quiet mode)
pub fn print_warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", style("!").yellow(), message);
    }
}

/// Print an info message (suppressed in quiet mode)
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", style("→").blue(), message);
    }
}

/// Print a blank line (suppressed in quiet mode)
pub fn print_blank() {
    if !is_quiet() {
        println!();
    }
}

/// Selection options for post intensity
pub fn intensity_options() -> Vec<&'static str> {
    vec!["Mild", "Moderate", "High"]
}

/// Parse selected intensity option to PostIntensity
pub fn parse_intensity_option(option: &str) -> PostIntensity {
    match option {
        "Mild" => PostIntensity::Mild,
        "High" => PostIntensity::High,
        _ => PostIntensity::Moderate,
    }
}

/// Check if running in a TTY
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}
