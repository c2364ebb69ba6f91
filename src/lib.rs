//! This crate parses absolute `http` and `https` URIs, following the generic
//! syntax of [IETF RFC 3986](https://tools.ietf.org/html/rfc3986) but with a
//! deliberately narrow grammar.  The [`Uri`] type holds the validated,
//! percent-decoded components: scheme, user info, host, port, path segments
//! and query parameters.
//!
//! ```text
//! https://joe@www.example.com:8443/foo/bar?q=a%20b
//! \___/   \_/ \_____________/ \__/\______/ \_____/
//!   |      |         |          |     |        |
//! scheme  user      host      port  path     query
//! ```
//!
//! Inputs which are ambiguous or dangerous are rejected instead of being
//! normalized: empty path segments (`//`), parent directory segments (`..`,
//! `%2e%2e`), query parameters without `=`, out-of-range ports, and
//! dotted-quad hosts with out-of-range groups.  Relative references, IPv6
//! hosts and fragments are not supported.
//!
//! # Examples
//!
//! ## Parsing a URI into its components
//!
//! ```rust
//! use httpuri::{Scheme, Uri};
//!
//! let uri = Uri::parse("http://www.example.com/foo?bar=baz").unwrap();
//! assert_eq!(Scheme::Http, uri.scheme());
//! assert_eq!("www.example.com", uri.host());
//! assert_eq!(["foo"], uri.path());
//! assert_eq!(Some("baz"), uri.query_param("bar"));
//! ```
//!
//! ## Rejecting a URI
//!
//! ```rust
//! use httpuri::{Error, Uri};
//!
//! assert_eq!(
//!     Err(Error::InvalidPathSegment("..".into())),
//!     Uri::parse("http://www.example.com/static/../secret")
//! );
//! ```
//!
//! ## Tightening the grammar
//!
//! ```rust
//! use httpuri::{ParseOptions, Uri};
//!
//! let options = ParseOptions::strict();
//! assert!(Uri::parse("http://www.example.com/%2e.").is_ok());
//! assert!(Uri::parse_with("http://www.example.com/%2e.", &options).is_err());
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize` for [`Uri`] and [`Scheme`], `Deserialize`
//!   for [`Uri`] (from a URI string), [`Scheme`] and [`ParseOptions`].
//! - `log`: emit `debug` records through the [`log`](https://docs.rs/log)
//!   crate whenever an input is rejected.
//!
//! [`Uri`]: struct.Uri.html
//! [`Scheme`]: enum.Scheme.html
//! [`ParseOptions`]: struct.ParseOptions.html

#![allow(clippy::non_ascii_literal)]
#![warn(missing_docs)]

mod log;

mod authority;
pub use authority::{parse_authority, Authority};

mod character_classes;
pub use character_classes::{is_host_name, is_path, is_query, is_user_info};

mod codec;
pub use codec::decode_percent;

mod error;
pub use error::Error;

mod options;
pub use options::ParseOptions;

mod path_query;
pub use path_query::{
    parse_absolute_path_with_query, parse_absolute_path_with_query_with, Path, Query,
};

mod percent_encoded_character_decoder;

mod scheme;
pub use scheme::{Form, Scheme};

mod uri;
pub use uri::{parse_absolute_uri, Uri};

mod validate_ipv4_address;
pub use validate_ipv4_address::is_ipv4_address;
