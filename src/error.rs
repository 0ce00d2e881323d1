use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serde error: {error}\nMsg: {msg}")]
    Serde {
        error: serde_json::Error,
        msg: String,
    },

    #[error("Invalid request. Received status {0}. Message: {1}")]
    ClientError(StatusCode, String),

    #[error("Server error. Received status {0}. Message: {1}")]
    ServerError(StatusCode, String),

    #[error("Unexpected status {0}. Message: {1}")]
    UnexpectedStatus(StatusCode, String),

    #[error("Missing required parameter {0}")]
    MissingParameter(&'static str),

    #[error("Invalid header {name}: {msg}")]
    InvalidHeader { name: String, msg: String },

    #[error("Invalid url {url}: {msg}")]
    InvalidUrl { url: String, msg: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// The HTTP status returned by the server, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ClientError(status, _)
            | Error::ServerError(status, _)
            | Error::UnexpectedStatus(status, _) => Some(*status),
            Error::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` for network-level failures: no response was received, or
    /// the connection broke while its body was being read.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Reqwest(e) => e.is_timeout() || e.is_connect() || e.is_request() || e.is_body(),
            _ => false,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::ClientError(..))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::ServerError(..))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
