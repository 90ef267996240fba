//! Internal state of the analyzer session.

use std::process::Child;

use encoding_rs::Encoding;

use super::transport::StdioTransport;

/// Lifecycle state of the analyzer process.
pub(super) enum ProcessState {
    /// No process has been started.
    NotStarted,
    /// Process is running and ready for exchanges.
    Running {
        /// The child process handle.
        child: Child,
        /// Line transport over the child's stdio.
        transport: StdioTransport,
        /// Text encoding discovered during the handshake.
        encoding: &'static Encoding,
    },
    /// Process has been disposed.
    Stopped,
}
