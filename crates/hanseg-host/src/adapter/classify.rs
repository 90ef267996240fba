//! Classification of raw analyzer output into morpheme records.

use crate::morpheme::{Morpheme, UNKNOWN_TAG};

/// Part-of-speech tags excluded from segmentation output.
///
/// Case markers, endings, interjections, proper nouns, numerals,
/// foreign script and punctuation carry no study value for the host
/// application.
const POS_EXCLUSIONS: &[&str] = &[
    "JKV", // vocative case marker
    "EF",  // sentence-final ending
    "EC",  // connective ending
    "IC",  // interjection
    "NNP", // proper noun
    "NR",  // literal numeral
    "SN",  // symbolic numeral
    "SH",  // hanja
    "SL",  // non-Korean script
    "SY",  // other symbol
    "SC",  // separator punctuation
    "SSC", // closing bracket
    "SSO", // opening bracket
    "SE",  // ellipsis
    "SF",  // sentence-final punctuation
];

/// Converts a reassembled response blob into ordered morpheme records.
///
/// Raw records are separated by carriage returns and fields by tabs.
/// Field 0 is the surface form; field 1, when present, the primary tag,
/// else [`UNKNOWN_TAG`]. Records whose tag is excluded produce nothing.
/// Malformed records are tolerated by defaulting, never rejected; empty
/// raw records are skipped so surviving morphemes always carry a
/// surface form. Output order matches input order.
pub(crate) fn morphemes_from_response(blob: &str) -> Vec<Morpheme> {
    blob.split('\r').filter_map(morpheme_from_record).collect()
}

/// Parses one tab-separated raw record, applying the exclusion policy.
fn morpheme_from_record(record: &str) -> Option<Morpheme> {
    let mut fields = record.split('\t');
    let surface = fields.next()?;
    if surface.is_empty() {
        return None;
    }
    let pos = fields.next().unwrap_or(UNKNOWN_TAG);
    if POS_EXCLUSIONS.contains(&pos) {
        return None;
    }
    Some(Morpheme::from_surface(surface, pos))
}
