use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Config(String),
    #[error("Failed to serialize chat request: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Chat API returned status {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Failed to decode chat response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no choices returned")]
    NoChoices,
    #[error("Failed to write to stdout: {0}")]
    Output(#[source] io::Error),
    #[error("Failed to write log file '{}': {source}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ClientError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Log { .. } => 1,
            Self::Serialize(_)
            | Self::HttpClient(_)
            | Self::Transport { .. }
            | Self::Api { .. }
            | Self::Decode(_)
            | Self::NoChoices
            | Self::Output(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
