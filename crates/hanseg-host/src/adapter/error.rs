//! Error types for the analyzer process adapter.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while managing or exchanging with the analyzer process.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The analyzer binary was not found at the resolved path.
    #[error("analyzer binary not found: {command}")]
    BinaryNotFound {
        /// The command that was not found.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to spawn or prepare the analyzer process.
    #[error("failed to spawn analyzer process: {message}")]
    SpawnFailed {
        /// Description of the spawn failure.
        message: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The dictionary info dump carried no charset declaration.
    #[error("no charset declaration in analyzer dictionary info")]
    CharsetNotFound {
        /// Raw dictionary info output, kept for operator diagnosis.
        diagnostics: String,
    },

    /// The declared charset is not a recognised encoding label.
    #[error("analyzer dictionary declares unsupported charset '{label}'")]
    UnsupportedCharset {
        /// The charset label as declared by the dictionary.
        label: String,
    },

    /// An exchange was requested before `start` or after `dispose`.
    #[error("analyzer session is not started")]
    NotStarted,

    /// Transport-level I/O failure during an exchange.
    ///
    /// Fatal for the call; the session must be disposed and restarted.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response line was not valid UTF-8.
    #[error("analyzer response was not valid UTF-8")]
    Decode(#[from] FromUtf8Error),
}

/// Transport-layer errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analyzer closed its output stream mid-exchange.
    #[error("analyzer closed the pipe mid-exchange")]
    ClosedPipe,
}
