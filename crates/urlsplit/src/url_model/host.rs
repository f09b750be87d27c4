//! Host/path and hostname/port splitting.

/// Splits the remainder after the scheme delimiter into `(host, path)`.
///
/// The first `/` separates host from path. A `/` at index 0 does not split:
/// the whole input becomes the host and the path is empty.
pub fn parse_host_and_path(rest: &str) -> (&str, &str) {
    match rest.find('/').filter(|&i| i > 0) {
        Some(index) => (&rest[..index], &rest[index + 1..]),
        None => (rest, ""),
    }
}

/// Splits `host` at its first `:` into `(hostname, port)`.
///
/// A colon at index 0 is not a separator.
pub(crate) fn split_port(host: &str) -> Option<(&str, &str)> {
    let index = host.find(':').filter(|&i| i > 0)?;
    Some((&host[..index], &host[index + 1..]))
}
