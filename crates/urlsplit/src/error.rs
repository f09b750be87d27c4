//! Error type for URL parsing.

use thiserror::Error;

/// Reason a raw string could not be turned into a [`Url`](crate::Url).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `://` delimiter, or the delimiter starts the input (empty scheme).
    #[error("missing scheme")]
    MissingScheme,
}
