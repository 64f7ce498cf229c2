use crate::remote::RemoteError;
use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// Configuration value resolved per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue {
    /// Base URI of the Business Objects service
    BaseUri,
    /// Bearer token sent in the Authorization header
    AuthToken,
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::BaseUri => f.write_str("base URI"),
            ConfigValue::AuthToken => f.write_str("auth token"),
        }
    }
}

/// Main error type for Business Objects operations
#[derive(Debug, Error)]
pub enum Error {
    /// Neither a per-call override nor a provider yielded the value
    #[error("missing required configuration: {0}")]
    MissingConfig(ConfigValue),

    /// The configured provider failed
    #[error("failed to resolve {value}: {source}")]
    Provider {
        /// Value the provider was asked for
        value: ConfigValue,
        /// Error returned by the provider
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The base URI and path do not form a valid URL
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A path identifier required by the endpoint is empty
    #[error("request is missing {0}")]
    MissingId(&'static str),

    /// Request payload could not be encoded
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP exchange itself failed
    #[error("HTTP transport error: {0}")]
    Transport(#[source] TransportError),

    /// Non-2xx response carrying a structured error body
    #[error("business objects error (status {status}): {error}")]
    Remote { status: u16, error: RemoteError },

    /// Non-2xx response whose body is not a structured error
    #[error("HTTP error {status}: undecodable error body: {source}")]
    RemoteDecode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// 2xx response whose body does not match the expected type
    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Get the HTTP status code if the remote service answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. }
            | Error::RemoteDecode { status, .. }
            | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the service answered 404
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this is a transport failure; the caller may retry these
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if configuration resolution failed before any request was sent
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingConfig(_) | Error::Provider { .. })
    }

    /// Get the structured remote error, if any
    pub fn remote_error(&self) -> Option<&RemoteError> {
        match self {
            Error::Remote { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type for Business Objects operations
pub type Result<T> = std::result::Result<T, Error>;
