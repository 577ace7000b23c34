//! Team command implementations

use clap::Args;
use colored::Colorize;
use log::debug;
use uuid::Uuid;

use crate::cli::args::GlobalOptions;
use crate::cli::validators::{parse_guid, parse_opt_bool_flag};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::{MemberSettings, TeamApi};
use crate::error::Result;
use crate::output::json;

/// Arguments for `team settings set`.
///
/// The allow-* flags keep the original string-valued contract: exactly
/// `true` or `false`, checked during validation and converted to real
/// booleans before the request is built.
#[derive(Debug, Clone, Args)]
pub struct SettingsSetArgs {
    /// The ID of the team for which to update settings
    #[arg(long, short = 'i')]
    pub team_id: String,

    /// Set to true to allow members to add and remove apps, false to disallow it
    #[arg(long, value_name = "true|false")]
    pub allow_add_remove_apps: Option<String>,

    /// Set to true to allow members to create and update channels, false to disallow it
    #[arg(long, value_name = "true|false")]
    pub allow_create_update_channels: Option<String>,

    /// Set to true to allow members to create, update and remove connectors, false to disallow it
    #[arg(long, value_name = "true|false")]
    pub allow_create_update_remove_connectors: Option<String>,

    /// Set to true to allow members to create, update and remove tabs, false to disallow it
    #[arg(long, value_name = "true|false")]
    pub allow_create_update_remove_tabs: Option<String>,

    /// Set to true to allow members to delete channels, false to disallow it
    #[arg(long, value_name = "true|false")]
    pub allow_delete_channels: Option<String>,
}

/// Validated, typed options for `team settings set`
#[derive(Debug, Clone)]
pub struct SettingsSetOptions {
    pub team_id: Uuid,
    pub settings: MemberSettings,
}

impl SettingsSetArgs {
    /// Validate the raw CLI values and build typed options.
    ///
    /// The first failing check aborts; nothing here touches the network.
    pub fn validate(&self) -> Result<SettingsSetOptions> {
        let team_id = parse_guid(&self.team_id)?;

        let settings = MemberSettings {
            allow_add_remove_apps: parse_opt_bool_flag(
                "allow-add-remove-apps",
                self.allow_add_remove_apps.as_deref(),
            )?,
            allow_create_update_channels: parse_opt_bool_flag(
                "allow-create-update-channels",
                self.allow_create_update_channels.as_deref(),
            )?,
            allow_create_update_remove_connectors: parse_opt_bool_flag(
                "allow-create-update-remove-connectors",
                self.allow_create_update_remove_connectors.as_deref(),
            )?,
            allow_create_update_remove_tabs: parse_opt_bool_flag(
                "allow-create-update-remove-tabs",
                self.allow_create_update_remove_tabs.as_deref(),
            )?,
            allow_delete_channels: parse_opt_bool_flag(
                "allow-delete-channels",
                self.allow_delete_channels.as_deref(),
            )?,
        };

        Ok(SettingsSetOptions { team_id, settings })
    }
}

/// Run the `team settings set` command
pub async fn settings_set(opts: &GlobalOptions, args: &SettingsSetArgs) -> Result<()> {
    // Validation happens before config loading or any network call
    let options = args.validate()?;
    if options.settings.is_empty() {
        debug!("no member settings supplied, sending an empty update");
    }

    let ctx = CommandContext::new(opts)?;
    ctx.client
        .update_member_settings(&options.team_id, &options.settings)
        .await?;

    match ctx.format {
        OutputFormat::Json => {
            let ack = serde_json::json!({
                "teamId": options.team_id.to_string(),
                "memberSettings": options.settings,
            });
            println!("{}", json::format_json(&ack)?);
        }
        OutputFormat::Table => {
            eprintln!(
                "{} Updated member settings for team {}",
                "✓".green(),
                options.team_id
            );
        }
    }

    Ok(())
}
