/// This is the enumeration of all the different kinds of errors which this
/// crate generates.  Each variant carries the piece of input which caused the
/// parse to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The URI does not start with `http:` or `https:`.
    #[error("unsupported scheme in {0:?}")]
    UnsupportedScheme(String),

    /// The user info in front of the `@` of the authority contains a
    /// character which is not allowed there.
    #[error("invalid user info {0:?}")]
    InvalidUserInfo(String),

    /// The port is not a decimal number in the range 0..=65535.
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    /// The host is neither a host name nor a dotted-quad address.
    #[error("invalid host {0:?}")]
    InvalidHost(String),

    /// The path contains two adjacent `/` separators.
    #[error("empty intermediate path segment in {0:?}")]
    EmptyPathSegment(String),

    /// A path segment contains an illegal character or navigates up a level.
    #[error("invalid or unsupported path segment {0:?}")]
    InvalidPathSegment(String),

    /// A query parameter has no `=` or contains an illegal character.
    #[error("invalid query parameter {0:?}")]
    InvalidQueryParameter(String),
}

impl Error {
    /// Borrow the piece of input which caused the error.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Error::UnsupportedScheme(input)
            | Error::InvalidUserInfo(input)
            | Error::InvalidPort(input)
            | Error::InvalidHost(input)
            | Error::EmptyPathSegment(input)
            | Error::InvalidPathSegment(input)
            | Error::InvalidQueryParameter(input) => input,
        }
    }
}
