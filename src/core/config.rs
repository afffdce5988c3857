// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

// Runtime configuration for the analyzer service
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,
            default_password_length: 16,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unparseable values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(address) = lookup("PWCHECK_ADDRESS") {
            config.web_address = address;
        }
        parse_into(&lookup, "PWCHECK_PORT", &mut config.web_port);
        parse_into(&lookup, "PWCHECK_DEFAULT_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "PWCHECK_LOG_LEVEL", &mut config.log_level);

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", raw, key),
        }
    }
}
