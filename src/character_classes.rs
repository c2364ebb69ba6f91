use once_cell::sync::Lazy;
use std::collections::HashSet;

// These are the character classes the parser validates each URI element
// against.  Each builds on the previous one, so a character legal in a host
// name is legal everywhere else too.  The `%` character is allowed in all of
// them; percent escapes are decoded only after an element has been checked.

pub(crate) static ALPHA: Lazy<HashSet<char>> =
    Lazy::new(|| ('a'..='z').chain('A'..='Z').collect::<HashSet<char>>());

pub(crate) static DIGIT: Lazy<HashSet<char>> = Lazy::new(|| ('0'..='9').collect::<HashSet<char>>());

pub(crate) static HOST_NAME: Lazy<HashSet<char>> = Lazy::new(|| {
    ALPHA
        .iter()
        .chain(DIGIT.iter())
        .chain(
            [
                '-', '.', '_', '~', '%', // unreserved plus the escape marker
                '!', '$', '&', '\'', '(', ')', '*', '+', ',', ';', '=', // sub-delims
            ]
            .iter(),
        )
        .copied()
        .collect::<HashSet<char>>()
});

pub(crate) static USER_INFO: Lazy<HashSet<char>> = Lazy::new(|| {
    HOST_NAME
        .iter()
        .chain([':'].iter())
        .copied()
        .collect::<HashSet<char>>()
});

pub(crate) static PATH: Lazy<HashSet<char>> = Lazy::new(|| {
    HOST_NAME
        .iter()
        .chain([':', '@'].iter())
        .copied()
        .collect::<HashSet<char>>()
});

pub(crate) static QUERY: Lazy<HashSet<char>> = Lazy::new(|| {
    PATH.iter()
        .chain(['/', '?'].iter())
        .copied()
        .collect::<HashSet<char>>()
});

fn all_in<T>(element: T, valid_characters: &HashSet<char>) -> bool
where
    T: AsRef<str>,
{
    element
        .as_ref()
        .chars()
        .all(|c| valid_characters.contains(&c))
}

/// Determine whether every character of `host` may appear in a host name.
#[must_use]
pub fn is_host_name<T>(host: T) -> bool
where
    T: AsRef<str>,
{
    all_in(host, &HOST_NAME)
}

/// Determine whether every character of `user_info` may appear in the user
/// info part of an authority.
#[must_use]
pub fn is_user_info<T>(user_info: T) -> bool
where
    T: AsRef<str>,
{
    all_in(user_info, &USER_INFO)
}

/// Determine whether every character of `segment` may appear in a path
/// segment.
#[must_use]
pub fn is_path<T>(segment: T) -> bool
where
    T: AsRef<str>,
{
    all_in(segment, &PATH)
}

/// Determine whether every character of `parameter` may appear in a query
/// parameter.
#[must_use]
pub fn is_query<T>(parameter: T) -> bool
where
    T: AsRef<str>,
{
    all_in(parameter, &QUERY)
}

/// Determine whether `host` consists only of digits and dots, in which case
/// it is meant as a dotted-quad address rather than a host name.
pub(crate) fn looks_numeric(host: &str) -> bool {
    !host.is_empty() && host.chars().all(|c| c == '.' || DIGIT.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_nest() {
        assert!(HOST_NAME.is_subset(&USER_INFO));
        assert!(HOST_NAME.is_subset(&PATH));
        assert!(PATH.is_subset(&QUERY));
        assert!(!USER_INFO.contains(&'@'));
        assert!(!PATH.contains(&'/'));
    }

    #[test]
    fn host_name() {
        let legal = ["", "www.example.com", "a-b_c~d", "%41", "!$&'()*+,;=", "host1"];
        for test_vector in &legal {
            assert!(is_host_name(test_vector), "{}", test_vector);
        }
        let illegal = ["a:b", "a@b", "a/b", "[v7]", "a b", "ü"];
        for test_vector in &illegal {
            assert!(!is_host_name(test_vector), "{}", test_vector);
        }
    }

    #[test]
    fn user_info() {
        assert!(is_user_info("user:pass"));
        assert!(is_user_info(":"));
        assert!(!is_user_info("a@b"));
        assert!(!is_user_info("{"));
    }

    #[test]
    fn path() {
        assert!(is_path("foo:bar@baz"));
        assert!(is_path("(bar)"));
        assert!(!is_path("a/b"));
        assert!(!is_path("foo[bar"));
        assert!(!is_path("a?b"));
    }

    #[test]
    fn query() {
        assert!(is_query("a=b"));
        assert!(is_query("next=/foo?bar"));
        assert!(!is_query("a=b#c"));
        assert!(!is_query("]bar"));
    }

    #[test]
    fn numeric_hosts() {
        assert!(looks_numeric("1.2.3.4"));
        assert!(looks_numeric("300"));
        assert!(!looks_numeric(""));
        assert!(!looks_numeric("1.2.3.a"));
    }
}
