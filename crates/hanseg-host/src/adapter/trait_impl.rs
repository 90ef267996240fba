//! Implementation of [`Analyzer`] for [`MecabAnalyzer`].

use tracing::debug;

use super::error::AdapterError;
use super::process::{ADAPTER_TARGET, MecabAnalyzer};
use crate::analyzer::{Analyzer, AnalyzerError};
use crate::morpheme::Morpheme;

impl Analyzer for MecabAnalyzer {
    fn name(&self) -> &'static str {
        "korean-mecab"
    }

    fn description(&self) -> &'static str {
        "Korean morphological segmentation via a bundled MeCab analyzer"
    }

    fn start(&mut self) -> Result<(), AnalyzerError> {
        debug!(target: ADAPTER_TARGET, "starting analyzer session");
        self.start_session()
            .map_err(|error| AnalyzerError::with_source("failed to start analyzer session", error))
    }

    fn dispose(&mut self) {
        self.dispose_session();
    }

    fn analyze(&mut self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
        self.morphemes(text).map_err(|error| match error {
            AdapterError::NotStarted => {
                AnalyzerError::with_source("analyze called on an unstarted session", error)
            }
            other => AnalyzerError::with_source("analysis exchange failed", other),
        })
    }
}
