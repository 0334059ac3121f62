use crate::config::{self, Config};
use crate::error::Result;
use crate::ui;

/// Run the init command
pub fn run_init(force: bool, api_key_command: Option<String>) -> Result<()> {
    let config_path = config::config_path()?;

    // Check if config already exists
    if config_path.exists() && !force {
        ui::print_warning(&format!(
            "Config file already exists at {}",
            config_path.display()
        ));
        ui::print_info("Use --force to overwrite");
        return Ok(());
    }

    // Get the API key command
    let command = if api_key_command.is_some() {
        api_key_command
    } else if ui::is_interactive() {
        ui::prompt_text_optional("Command that prints your Gemini API key (e.g. 'pass show gemini'):")?
    } else {
        None
    };

    let config = Config::default_with_api_key_command(command);
    config::save_config(&config)?;

    ui::print_success(&format!(
        "Created config file at {}",
        config_path.display()
    ));

    if config.gemini.api_key.is_none() && config.gemini.api_key_command.is_none() {
        ui::print_info("Set gemini.api_key or gemini.api_key_command in the config file before generating");
    }

    Ok(())
}
