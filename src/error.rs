use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("No credentials configured. Set PETFRIENDS_EMAIL and PETFRIENDS_PASSWORD")]
    MissingCredentials,

    #[error("Failed to read pet photo '{}': {source}", path.display())]
    ReadPhoto {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("Failed to write config: {0}")]
    ConfigWrite(std::io::Error),

    #[error("Invalid config format: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl PetError {
    pub fn unexpected_body(msg: impl Into<String>) -> Self {
        Self::UnexpectedBody(msg.into())
    }
}
