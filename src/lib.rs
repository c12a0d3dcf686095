//! rTimeclock library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init { .. } => c::init::handle(cli, cfg),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Store { .. } => c::store::handle(&cli.command, cfg),
        Commands::User { .. } => c::user::handle(&cli.command, cfg),
        Commands::Stamp { .. } => c::stamp::handle(&cli.command, cfg),
        Commands::History { .. } => c::history::handle(&cli.command, cfg),
        Commands::Logs { .. } => c::logs::handle(&cli.command, cfg),
        Commands::Correct { .. } => c::correct::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    utils::logger::init_logging(&cfg.log_level, cli.verbose)?;

    dispatch(&cli, &cfg)
}
