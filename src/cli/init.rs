//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command.
///
/// Token acquisition is out of scope for this tool: the access token is
/// obtained elsewhere (Azure CLI, device-code flow, a portal) and pasted in
/// here. Custom API hosts can be set with `--api-host` or in the config file.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to graphctl!".bold().green());
    println!("Let's set up your Microsoft Graph configuration.\n");

    let access_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your Microsoft Graph access token")
        .interact()?;

    // Keep an existing config's preferences, only replace the credentials
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    config.access_token = Some(access_token);
    if opts.api_host.is_some() {
        config.api_host = opts.api_host.clone();
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show configuration status",
        "graphctl status".cyan()
    );
    println!(
        "  {} - List deleted Microsoft 365 groups",
        "graphctl group recyclebin list".cyan()
    );

    Ok(())
}
