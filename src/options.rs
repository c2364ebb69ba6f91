/// Settings which tighten the parser beyond its default behavior.
///
/// The defaults accept exactly what [`Uri::parse`] accepts.  Each setting
/// closes one gap of the default grammar; none of them makes the parser more
/// lenient.
///
/// # Examples
///
/// ```rust
/// use httpuri::{ParseOptions, Uri};
///
/// assert!(Uri::parse("http://256.1.1.1/").is_ok());
///
/// let options = ParseOptions::default().strict_ipv4_octets(true);
/// assert!(Uri::parse_with("http://256.1.1.1/", &options).is_err());
/// ```
///
/// [`Uri::parse`]: struct.Uri.html#method.parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Deserialize),
    serde(crate = "serde_", default)
)]
pub struct ParseOptions {
    /// Limit each group of a dotted-quad host to 0..=255.  When unset the
    /// group `256` is accepted.
    pub strict_ipv4_octets: bool,

    /// Reject an authority whose host and port contain more than one `:`
    /// with [`Error::InvalidHost`].  When unset all pieces but the last are
    /// joined without separator to form the host.
    ///
    /// [`Error::InvalidHost`]: enum.Error.html#variant.InvalidHost
    pub reject_multi_colon_authority: bool,

    /// Also reject path segments which are `..` once percent-decoded, such
    /// as `%2e.` or `.%2E`.  When unset only the literal forms `..` and
    /// `%2e%2e` are rejected.
    pub decode_before_traversal_check: bool,

    /// Reject path segments which contain `/` once percent-decoded, such as
    /// `a%2Fb`.  When unset `%2F` decodes into a `/` inside the segment.
    pub reject_encoded_slash: bool,
}

impl ParseOptions {
    /// Change the `strict_ipv4_octets` setting.
    #[must_use]
    pub fn strict_ipv4_octets(mut self, strict_ipv4_octets: bool) -> Self {
        self.strict_ipv4_octets = strict_ipv4_octets;
        self
    }

    /// Change the `reject_multi_colon_authority` setting.
    #[must_use]
    pub fn reject_multi_colon_authority(mut self, reject_multi_colon_authority: bool) -> Self {
        self.reject_multi_colon_authority = reject_multi_colon_authority;
        self
    }

    /// Change the `decode_before_traversal_check` setting.
    #[must_use]
    pub fn decode_before_traversal_check(mut self, decode_before_traversal_check: bool) -> Self {
        self.decode_before_traversal_check = decode_before_traversal_check;
        self
    }

    /// Change the `reject_encoded_slash` setting.
    #[must_use]
    pub fn reject_encoded_slash(mut self, reject_encoded_slash: bool) -> Self {
        self.reject_encoded_slash = reject_encoded_slash;
        self
    }

    /// Settings with every gap closed.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_ipv4_octets: true,
            reject_multi_colon_authority: true,
            decode_before_traversal_check: true,
            reject_encoded_slash: true,
        }
    }
}
