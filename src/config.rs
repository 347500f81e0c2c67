// Configuration module
// Reads server settings from the environment (after dotenv has loaded .env)

use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// How strictly POST /movers checks the incoming record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreationPolicy {
    /// Uniqueness checks only; the rating is stored as supplied
    #[default]
    Lenient,
    /// Rating range is validated before the uniqueness checks
    Strict,
}

impl FromStr for CreationPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "lenient" => Ok(CreationPolicy::Lenient),
            "strict" => Ok(CreationPolicy::Strict),
            other => Err(ConfigError::InvalidValue {
                key: "CREATE_VALIDATION",
                value: other.to_string(),
            }),
        }
    }
}

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Start with the default movers instead of an empty store
    pub seed_movers: bool,
    pub creation_policy: CreationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_movers: true,
            creation_policy: CreationPolicy::Lenient,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; missing keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let seed_movers = match lookup("SEED_MOVERS") {
            Some(value) => parse_bool("SEED_MOVERS", value)?,
            None => defaults.seed_movers,
        };

        let creation_policy = match lookup("CREATE_VALIDATION") {
            Some(value) => value.parse::<CreationPolicy>()?,
            None => defaults.creation_policy,
        };

        Ok(Self {
            host,
            port,
            seed_movers,
            creation_policy,
        })
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
