//! Morpheme records produced by the analyzer.

use serde::Serialize;

/// Tag used when the analyzer output carries none.
pub const UNKNOWN_TAG: &str = "UNKNOWN";

/// One tagged unit of analyzer output.
///
/// The configured output template emits only the surface form and the
/// primary tag, so the derived fields (`norm`, `base`, `inflected`,
/// `reading`) are copies of the surface and `sub_pos` is always
/// [`UNKNOWN_TAG`]. Records are immutable once built and owned by the
/// caller after [`crate::Analyzer::analyze`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morpheme {
    /// Literal text segment matched by the analyzer; never empty.
    pub surface: String,
    /// Coarse part-of-speech tag, [`UNKNOWN_TAG`] when absent from output.
    pub pos: String,
    /// Fine part-of-speech tag; the output template never surfaces it.
    pub sub_pos: String,
    /// Normalised form; defaults to the surface.
    pub norm: String,
    /// Dictionary base form; defaults to the surface.
    pub base: String,
    /// Inflected form; defaults to the surface.
    pub inflected: String,
    /// Reading; defaults to the surface.
    pub reading: String,
}

impl Morpheme {
    /// Builds a record whose derived fields all default to the surface.
    #[must_use]
    pub fn from_surface(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            pos: pos.into(),
            sub_pos: UNKNOWN_TAG.to_owned(),
            norm: surface.clone(),
            base: surface.clone(),
            inflected: surface.clone(),
            reading: surface.clone(),
            surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn derived_fields_default_to_surface() {
        let morpheme = Morpheme::from_surface("이름", "NNG");

        assert_eq!(morpheme.surface, "이름");
        assert_eq!(morpheme.pos, "NNG");
        assert_eq!(morpheme.sub_pos, UNKNOWN_TAG);
        assert_eq!(morpheme.norm, "이름");
        assert_eq!(morpheme.base, "이름");
        assert_eq!(morpheme.inflected, "이름");
        assert_eq!(morpheme.reading, "이름");
    }
}
