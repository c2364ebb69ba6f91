/// The scheme of an absolute URI.  Only `http` and `https` are ever produced
/// by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_", rename_all = "lowercase")
)]
pub enum Scheme {
    /// `http:`
    Http,
    /// `https:`
    Https,
}

impl Scheme {
    /// Borrow the name of the scheme, without the trailing `:`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Return the port a URI with this scheme refers to when it gives none.
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    /// Recognize the scheme at the start of a URI string, returning it along
    /// with the rest of the string after the `:` delimiter.
    ///
    /// Only the exact, lowercase prefixes `http:` and `https:` are accepted.
    pub(crate) fn split_prefix(uri_string: &str) -> Option<(Self, &str)> {
        if let Some(rest) = uri_string.strip_prefix("http:") {
            Some((Scheme::Http, rest))
        } else {
            uri_string
                .strip_prefix("https:")
                .map(|rest| (Scheme::Https, rest))
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The syntactic form a URI was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize),
    serde(crate = "serde_", rename_all = "lowercase")
)]
pub enum Form {
    /// A scheme followed by an authority and/or path, like
    /// `http://www.example.com/foo`.
    Absolute,
}
