//! Synchronous request/response exchange with the analyzer.

use encoding_rs::Encoding;
use tracing::trace;

use super::error::AdapterError;
use super::process::ADAPTER_TARGET;
use super::transport::LineTransport;

/// Performs one analysis round-trip over `transport`.
///
/// The request is sanitised, transcoded to the session charset and
/// written with a trailing newline, flushed in one piece. One physical
/// response line is then read per newline-delimited chunk of the encoded
/// request; each line's trailing carriage returns and newlines are
/// stripped, the line is decoded as UTF-8, and the lines are rejoined
/// with carriage-return separators into the logical response blob.
///
/// The analyzer emits one physical line per sentence terminator and
/// embeds per-morpheme separators as literal carriage returns within
/// that line, so counting request chunks keeps the exchange synchronised
/// without an end-of-response marker. Should the analyzer ever emit a
/// different number of physical lines, the exchange desynchronises
/// undetected; the framing carries no sentinel.
///
/// Strictly one-in-one-out: a second request must not be issued before
/// the first response is fully consumed.
///
/// # Errors
///
/// Propagates transport failures and non-UTF-8 response lines; a failed
/// exchange yields no partial response.
pub(crate) fn round_trip(
    transport: &mut dyn LineTransport,
    encoding: &'static Encoding,
    text: &str,
) -> Result<String, AdapterError> {
    let request = encode_lossy(encoding, &sanitize(text));
    let chunks = request.split(|byte| *byte == b'\n').count();

    let mut framed = request;
    framed.push(b'\n');
    transport.send(&framed)?;

    trace!(
        target: ADAPTER_TARGET,
        request_bytes = framed.len(),
        expected_lines = chunks,
        "request written"
    );

    let mut records = Vec::with_capacity(chunks);
    for _ in 0..chunks {
        let line = transport.read_line()?;
        let stripped = strip_line_terminator(&line);
        records.push(String::from_utf8(stripped.to_vec())?);
    }
    Ok(records.join("\r"))
}

/// Strips Unicode control characters the line protocol cannot carry.
///
/// Covers exactly the `Cc` category: the C0 range, DEL and the C1 range.
fn sanitize(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}

/// Encodes `text` with `encoding`, dropping unencodable characters.
///
/// Best-effort: the session charset comes from the analyzer dictionary
/// and need not cover all of Unicode. Dropped characters are not
/// reported per call.
fn encode_lossy(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut buf = [0_u8; 4];
    for ch in text.chars() {
        let (encoded, _, unmappable) = encoding.encode(ch.encode_utf8(&mut buf));
        if !unmappable {
            bytes.extend_from_slice(&encoded);
        }
    }
    bytes
}

/// Removes trailing carriage returns and newlines from a physical line.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && (line[end - 1] == b'\n' || line[end - 1] == b'\r') {
        end -= 1;
    }
    &line[..end]
}
