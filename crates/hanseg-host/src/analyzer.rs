//! Abstractions over concrete morphological analyzers.

use std::error::Error;
use std::fmt;

use thiserror::Error;

use crate::morpheme::Morpheme;

/// Errors reported by analyzer implementations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AnalyzerError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl AnalyzerError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Behaviour required from concrete analyzer bindings.
///
/// The contract is deliberately narrow: one explicit lifecycle
/// (`start`/`dispose`) around a blocking `analyze` call. Implementations
/// own exactly one backing analyzer context and are not internally
/// synchronised; callers needing concurrent analysis must serialise
/// access or run independent instances.
pub trait Analyzer: Send {
    /// Short identifier for this analyzer integration.
    fn name(&self) -> &'static str;

    /// Single line describing which language the analyzer segments.
    fn description(&self) -> &'static str;

    /// Spawns the backing analyzer and completes any required handshake.
    ///
    /// A failed start leaves the analyzer unstarted; retrying is the
    /// caller's decision.
    fn start(&mut self) -> Result<(), AnalyzerError>;

    /// Terminates the backing analyzer.
    ///
    /// Never fails; safe to call repeatedly and without a prior
    /// successful [`Analyzer::start`].
    fn dispose(&mut self);

    /// Segments `text` into filtered morphemes in analyzer output order.
    ///
    /// A failed exchange yields no morphemes, never a truncated list.
    fn analyze(&mut self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError>;
}

impl fmt::Debug for dyn Analyzer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Analyzer")
    }
}
