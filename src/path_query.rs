use std::collections::HashMap;

use super::{
    character_classes::{is_path, is_query},
    codec::decode_percent,
    error::Error,
    log::debug,
    options::ParseOptions,
};

/// The decoded segments of a path, in order.  An empty vector is the root
/// path.
pub type Path = Vec<String>;

/// The decoded parameters of a query.
pub type Query = HashMap<String, String>;

/// Interpret the given string as an absolute path, optionally followed by `?`
/// and a query, returning the decoded path segments and query parameters.
///
/// Leading and trailing slashes are not represented in the returned path:
/// `/foo/bar/` yields `["foo", "bar"]` and `/` yields no segments at all.
/// The query must be a `&`-separated list of `key=value` parameters.  When a
/// key appears more than once, the last value wins.
///
/// # Errors
///
/// - [`Error::EmptyPathSegment`] if the path contains `//`.
/// - [`Error::InvalidPathSegment`] if a segment contains an illegal character
///   or is the parent directory segment `..` (also in the form `%2e%2e`).
/// - [`Error::InvalidQueryParameter`] if a parameter lacks `=` or contains an
///   illegal character.
///
/// # Examples
///
/// ```rust
/// use httpuri::parse_absolute_path_with_query;
///
/// # fn main() -> Result<(), httpuri::Error> {
/// let (path, query) = parse_absolute_path_with_query("/foo/%41?q=a%20b")?;
/// assert_eq!(vec!["foo", "A"], path);
/// assert_eq!(Some("a b"), query.get("q").map(String::as_str));
/// # Ok(())
/// # }
/// ```
///
/// [`Error::EmptyPathSegment`]: enum.Error.html#variant.EmptyPathSegment
/// [`Error::InvalidPathSegment`]: enum.Error.html#variant.InvalidPathSegment
/// [`Error::InvalidQueryParameter`]: enum.Error.html#variant.InvalidQueryParameter
pub fn parse_absolute_path_with_query<T>(raw: T) -> Result<(Path, Query), Error>
where
    T: AsRef<str>,
{
    parse_absolute_path_with_query_with(raw, &ParseOptions::default())
}

/// Same as [`parse_absolute_path_with_query`], with settings to tighten the
/// grammar.
///
/// # Errors
///
/// See [`parse_absolute_path_with_query`].
///
/// [`parse_absolute_path_with_query`]: fn.parse_absolute_path_with_query.html
pub fn parse_absolute_path_with_query_with<T>(
    raw: T,
    options: &ParseOptions,
) -> Result<(Path, Query), Error>
where
    T: AsRef<str>,
{
    let raw = raw.as_ref();
    let (path_string, query_string) = match raw.split_once('?') {
        Some((path_string, query_string)) => (path_string, query_string),
        None => (raw, ""),
    };
    let path = parse_path(path_string, options)?;
    let query = parse_query(query_string)?;
    Ok((path, query))
}

fn parse_path(path_string: &str, options: &ParseOptions) -> Result<Path, Error> {
    if path_string.contains("//") {
        debug!("rejecting path with empty segment {:?}", path_string);
        return Err(Error::EmptyPathSegment(path_string.to_string()));
    }

    let trimmed = path_string.strip_suffix('/').unwrap_or(path_string);
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Ok(Path::new());
    }

    trimmed
        .split('/')
        .map(|segment| {
            let decoded = check_segment(segment)
                .then(|| decode_percent(segment))
                .filter(|decoded| !(options.decode_before_traversal_check && decoded == ".."))
                .filter(|decoded| !(options.reject_encoded_slash && decoded.contains('/')));
            decoded.ok_or_else(|| {
                debug!("rejecting path segment {:?}", segment);
                Error::InvalidPathSegment(segment.to_string())
            })
        })
        .collect()
}

fn check_segment(segment: &str) -> bool {
    is_path(segment) && segment != ".." && !segment.eq_ignore_ascii_case("%2e%2e")
}

fn parse_query(query_string: &str) -> Result<Query, Error> {
    if query_string.is_empty() {
        return Ok(Query::new());
    }

    query_string
        .split('&')
        .map(|parameter| match parameter.split_once('=') {
            Some((key, value)) if is_query(parameter) => {
                Ok((decode_percent(key), decode_percent(value)))
            }
            _ => {
                debug!("rejecting query parameter {:?}", parameter);
                Err(Error::InvalidQueryParameter(parameter.to_string()))
            }
        })
        .collect()
}
