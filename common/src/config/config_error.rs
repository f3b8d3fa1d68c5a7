use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write config to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config cache lock was poisoned")]
    Poisoned,
}
