use clap::Parser;
use std::path::Path;

use pwcheck::cli::{handlers, menu, Args, CliCommand};
use pwcheck::core::Config;
use pwcheck::error::AppError;
use pwcheck::{api, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    logging::init(config.log_level);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        CliCommand::Analyze { password, json } => handlers::handle_analyze(&password, json),
        CliCommand::Interactive => menu::run_interactive(),
        CliCommand::Generate { options, json } => {
            handlers::handle_generate(options, config.default_password_length, json)
        }
        CliCommand::Serve { port } => {
            if let Some(port) = port {
                config.web_port = port;
            }
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                AppError::Io(e)
            })
        }
    }
}
