//! graphctl - CLI companion for the Microsoft Graph API

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{
    Cli, Commands, GlobalOptions, GroupCommands, RecycleBinCommands, SettingsCommands, TeamCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts)?,
        Commands::Status => cli::status::run(&opts)?,
        Commands::Version => {
            println!("graphctl version {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Group(GroupCommands::Recyclebin(RecycleBinCommands::List(args))) => {
            cli::group::recyclebin_list(&opts, &args).await?;
        }
        Commands::Team(TeamCommands::Settings(SettingsCommands::Set(args))) => {
            cli::team::settings_set(&opts, &args).await?;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "graphctl", &mut std::io::stdout());
        }
    }

    if opts.verbose {
        eprintln!("{}", "DONE".green());
    }

    Ok(())
}
