// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength analyzer and generator", long_about = None)]
pub struct Args {
    /// Log level (error, warn, info, debug, trace); overrides PWCHECK_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<log::LevelFilter>,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}
