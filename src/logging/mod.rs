// src/logging/mod.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger. `RUST_LOG` wins over the configured level when set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised, keeping existing configuration");
    }
}
