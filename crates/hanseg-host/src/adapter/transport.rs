//! Line-oriented duplex transport over process stdio.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{ChildStdin, ChildStdout};

use super::error::TransportError;

/// Line-oriented duplex channel to the analyzer.
///
/// The exchange layer only needs to push one chunk of request bytes and
/// pull physical output lines, so the process pipes stay behind this
/// trait and tests can substitute a scripted double.
pub trait LineTransport: Send {
    /// Writes raw request bytes and flushes them through to the analyzer.
    ///
    /// The flush is part of the contract: the analyzer must see the full
    /// request before it produces any output.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Io`] when the pipe write fails.
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Reads one physical output line, terminator included (blocks).
    ///
    /// A line without a trailing newline is returned as-is when the
    /// stream ends after partial data.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClosedPipe`] when the stream ends before
    /// any byte of the line, and [`TransportError::Io`] on read failure.
    fn read_line(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// Reads and writes analyzer lines over child process stdio.
pub struct StdioTransport {
    reader: BufReader<ChildStdout>,
    writer: BufWriter<ChildStdin>,
}

impl StdioTransport {
    /// Creates a transport from process handles.
    #[must_use]
    pub fn new(stdout: ChildStdout, stdin: ChildStdin) -> Self {
        Self {
            reader: BufReader::new(stdout),
            writer: BufWriter::new(stdin),
        }
    }
}

impl LineTransport for StdioTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.writer.write_all(bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(TransportError::ClosedPipe);
        }
        Ok(line)
    }
}
