//! Label CLI: the `label` command.

mod cli;
mod commands;
mod logging;
mod settings;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Id { resource } => commands::id::run(&cli.config, resource),

        Commands::Tags {
            resource,
            without_name,
        } => commands::tags::run(&cli.config, resource, without_name),

        Commands::Generate { resource, json } => {
            commands::generate::run(&cli.config, resource, json)
        }

        Commands::Config { json } => commands::config::run(&cli.config, json),
    }
}
