//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod group;
pub mod handlers;
pub mod init;
pub mod status;
pub mod team;
pub mod validators;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use group::RecycleBinListArgs;
use team::SettingsSetArgs;

/// graphctl - CLI companion for the Microsoft Graph API
#[derive(Parser, Debug)]
#[command(name = "graphctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json); defaults to the config preference, then table
    #[arg(
        long,
        global = true,
        env = "GRAPHCTL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GRAPHCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom API host for development/testing
    #[arg(long, global = true, env = "GRAPHCTL_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Verbose output
    #[arg(long, global = true, env = "GRAPHCTL_VERBOSE", hide_env = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize graphctl configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage Microsoft 365 groups
    #[command(subcommand)]
    Group(GroupCommands),

    /// Manage Microsoft Teams teams
    #[command(subcommand)]
    Team(TeamCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Group management subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Work with groups in the directory recycle bin
    #[command(subcommand)]
    Recyclebin(RecycleBinCommands),
}

/// Recycle bin subcommands
#[derive(Subcommand, Debug)]
pub enum RecycleBinCommands {
    /// List Microsoft 365 groups deleted in the current tenant
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            graphctl group recyclebin list                     # All deleted groups\n  \
            graphctl group recyclebin list -d Finance          # displayName starts with Finance\n  \
            graphctl group recyclebin list --format json       # JSON for scripting"
    )]
    List(RecycleBinListArgs),
}

/// Team management subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// Manage team settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

/// Team settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Update member settings of a Microsoft Teams team
    #[command(after_help = "EXAMPLES:\n  \
            graphctl team settings set -i 6703251a-eb81-4d2a-9b54-6c9b1c4ebc0a --allow-add-remove-apps true\n  \
            graphctl team settings set -i 6703251a-eb81-4d2a-9b54-6c9b1c4ebc0a \\\n      \
            --allow-create-update-channels true --allow-delete-channels false")]
    Set(SettingsSetArgs),
}
