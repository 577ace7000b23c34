//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "graphctl Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if config.access_token.is_some() {
                println!("{} Access token configured", "✓".green());
            } else {
                println!("{} Access token not configured", "✗".red());
                println!("  → Run 'graphctl init' to configure");
            }

            // Only shown when a non-default host is set
            if let Some(ref host) = config.api_host {
                println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
            }

            if let Some(ref format) = config.preferences.format {
                println!("{} Default output format: {}", "○".dimmed(), format);
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "graphctl init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
