//! Error types for the bridge.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    #[error("{backend} request failed with status {status}: {body}")]
    Http {
        backend: String,
        status: u16,
        body: String,
    },

    /// The backend could not be reached or the body could not be read.
    #[error("{backend} request failed: {source}")]
    Transport {
        backend: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend replied 2xx but the body was not a chat completion.
    #[error("failed to decode {backend} response: {source}")]
    Decode {
        backend: String,
        #[source]
        source: serde_json::Error,
    },

    /// Capability the backend does not offer at all.
    #[error("{operation} is not supported by the {backend} backend")]
    Unsupported {
        operation: &'static str,
        backend: String,
    },
}

impl Error {
    pub fn unsupported(operation: &'static str, backend: impl Into<String>) -> Self {
        Error::Unsupported {
            operation,
            backend: backend.into(),
        }
    }
}
