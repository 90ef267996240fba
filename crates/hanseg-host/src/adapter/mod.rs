//! Process-based analyzer adapter.
//!
//! This module drives a real MeCab-compatible binary over its standard
//! streams. The [`MecabAnalyzer`] struct implements the
//! [`Analyzer`](crate::Analyzer) trait and composes several components:
//!
//! - [`AnalyzerConfig`]: platform-resolved command line and support paths
//! - [`AdapterError`] and [`TransportError`]: error types for session
//!   management and the wire exchange
//! - [`LineTransport`] and [`StdioTransport`]: line-oriented duplex
//!   channel over the child process pipes
//! - `exchange`: the synchronous one-in-one-out request/response framing
//! - `classify`: tagged-output parsing and part-of-speech filtering
//!
//! # Example
//!
//! ```ignore
//! use hanseg_host::{Analyzer, MecabAnalyzer};
//!
//! let mut analyzer = MecabAnalyzer::new("deps/mecabko");
//! analyzer.start()?;
//! let morphemes = analyzer.analyze("안녕하세요")?;
//! analyzer.dispose();
//! ```

pub(crate) mod classify;
mod config;
mod error;
pub(crate) mod exchange;
mod process;
mod state;
mod trait_impl;
mod transport;

pub use config::{AnalyzerConfig, Platform};
pub use error::{AdapterError, TransportError};
pub use process::MecabAnalyzer;
pub use transport::{LineTransport, StdioTransport};
