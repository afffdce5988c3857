// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::generators::GeneratorOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a single password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for passwords and analyze each one until an empty entry
    Interactive,

    /// Generate a password and show its analysis
    Generate {
        #[command(flatten)]
        options: GenerateArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// API server port (defaults to PWCHECK_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (defaults to PWCHECK_DEFAULT_LENGTH or 16)
    #[arg(long, short)]
    pub length: Option<usize>,

    #[arg(long)]
    pub no_uppercase: bool,

    #[arg(long)]
    pub no_lowercase: bool,

    #[arg(long)]
    pub no_numbers: bool,

    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out look-alike characters (il1Lo0O)
    #[arg(long)]
    pub exclude_similar: bool,
}

impl GenerateArgs {
    pub fn into_options(self, default_length: usize) -> GeneratorOptions {
        GeneratorOptions {
            length: self.length.unwrap_or(default_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            exclude_similar: self.exclude_similar,
        }
    }
}
