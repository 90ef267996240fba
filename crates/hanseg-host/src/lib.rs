//! Korean morphological segmentation host.
//!
//! The crate owns the lifecycle of an external MeCab-compatible analyzer
//! process: it resolves the platform-specific command line, discovers the
//! dictionary's text encoding through a one-time diagnostic handshake, and
//! performs synchronous request/response exchanges over the process's
//! standard streams. Raw tagged output is classified into [`Morpheme`]
//! records with study-irrelevant part-of-speech categories filtered out.
//! Analyzer-specific details stay behind the [`Analyzer`] trait so tests
//! and host applications can inject lightweight implementations without
//! spawning a real binary.
#![deny(missing_docs)]

pub mod adapter;
mod analyzer;
mod morpheme;

pub use adapter::{
    AdapterError, AnalyzerConfig, LineTransport, MecabAnalyzer, Platform, StdioTransport,
    TransportError,
};
pub use analyzer::{Analyzer, AnalyzerError};
pub use morpheme::{Morpheme, UNKNOWN_TAG};

#[cfg(test)]
mod tests;
