//! Scheme extraction.

const SCHEME_DELIMITER: &str = "://";

/// Splits `raw` at the first `://` into `(scheme, rest)`.
///
/// Returns `None` when the delimiter is missing or starts the input, so a
/// returned scheme is never empty.
pub fn parse_scheme(raw: &str) -> Option<(&str, &str)> {
    let index = raw.find(SCHEME_DELIMITER).filter(|&i| i > 0)?;
    Some((&raw[..index], &raw[index + SCHEME_DELIMITER.len()..]))
}
