use super::{
    character_classes::{is_host_name, is_user_info, looks_numeric},
    codec::decode_percent,
    error::Error,
    log::{debug, warning},
    options::ParseOptions,
    validate_ipv4_address::is_ipv4_address,
};

/// This is the part of a URI which governs the URI's namespace.  It contains
/// a host name or dotted-quad address, and may also include a port number
/// and/or user info.
///
/// # Examples
///
/// ```rust
/// use httpuri::Authority;
///
/// # fn main() -> Result<(), httpuri::Error> {
/// let authority = Authority::parse("nobody@www.example.com:8080")?;
/// assert_eq!("nobody", authority.user);
/// assert_eq!("www.example.com", authority.host);
/// assert_eq!(8080, authority.port);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Authority {
    /// The decoded user info, or an empty string if there is none.
    pub user: String,
    /// The decoded host.
    pub host: String,
    /// The port, or 0 if none was given.
    pub port: u16,
}

impl Authority {
    /// Interpret the given string as the Authority component of a URI,
    /// separating its various subcomponents, returning an `Authority` value
    /// containing them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUserInfo`], [`Error::InvalidPort`] or
    /// [`Error::InvalidHost`] if the corresponding subcomponent is malformed.
    ///
    /// [`Error::InvalidUserInfo`]: enum.Error.html#variant.InvalidUserInfo
    /// [`Error::InvalidPort`]: enum.Error.html#variant.InvalidPort
    /// [`Error::InvalidHost`]: enum.Error.html#variant.InvalidHost
    pub fn parse<T>(authority_string: T) -> Result<Self, Error>
    where
        T: AsRef<str>,
    {
        Self::parse_with(authority_string, &ParseOptions::default())
    }

    /// Same as [`parse`](#method.parse), with settings to tighten the
    /// grammar.
    ///
    /// # Errors
    ///
    /// See [`parse`](#method.parse).
    pub fn parse_with<T>(authority_string: T, options: &ParseOptions) -> Result<Self, Error>
    where
        T: AsRef<str>,
    {
        let (user, host_port_string) = Self::parse_user_info(authority_string.as_ref())?;
        let (host, port) = Self::parse_host_port(host_port_string, options)?;
        Ok(Self { user, host, port })
    }

    fn parse_user_info(authority: &str) -> Result<(String, &str), Error> {
        match authority.split_once('@') {
            Some((user_info, host_port_string)) => {
                if !is_user_info(user_info) {
                    debug!("rejecting user info of {} bytes", user_info.len());
                    return Err(Error::InvalidUserInfo(user_info.to_string()));
                }
                Ok((decode_percent(user_info), host_port_string))
            }
            None => Ok((String::new(), authority)),
        }
    }

    fn parse_host_port(host_port_string: &str, options: &ParseOptions) -> Result<(String, u16), Error> {
        let (host, port) = match host_port_string.rsplit_once(':') {
            Some((host_pieces, port_string)) => {
                let host = if host_pieces.contains(':') {
                    if options.reject_multi_colon_authority {
                        debug!("rejecting host with more than one colon {:?}", host_port_string);
                        return Err(Error::InvalidHost(host_port_string.to_string()));
                    }
                    warning!(
                        "joining colon-separated host pieces of {:?} without separator",
                        host_port_string
                    );
                    host_pieces.replace(':', "")
                } else {
                    host_pieces.to_string()
                };
                (host, Self::parse_port(port_string)?)
            }
            None => (host_port_string.to_string(), 0),
        };

        if !Self::is_valid_host(&host, options) {
            debug!("rejecting host {:?}", host);
            return Err(Error::InvalidHost(host));
        }
        Ok((decode_percent(&host), port))
    }

    fn parse_port(port_string: &str) -> Result<u16, Error> {
        // `u16::from_str` would also take a leading `+`.
        if port_string.is_empty() || !port_string.bytes().all(|b| b.is_ascii_digit()) {
            debug!("rejecting port {:?}", port_string);
            return Err(Error::InvalidPort(port_string.to_string()));
        }
        port_string.parse::<u16>().map_err(|_| {
            debug!("rejecting port {:?}", port_string);
            Error::InvalidPort(port_string.to_string())
        })
    }

    fn is_valid_host(host: &str, options: &ParseOptions) -> bool {
        // A host written with digits and dots only is meant as an address,
        // so it does not get a second chance as a host name.
        if looks_numeric(host) {
            is_ipv4_address(host, options.strict_ipv4_octets)
        } else {
            is_host_name(host)
        }
    }
}

/// Interpret the given string as the Authority component of a URI.  This is
/// the same as [`Authority::parse`].
///
/// # Errors
///
/// See [`Authority::parse`].
///
/// [`Authority::parse`]: struct.Authority.html#method.parse
pub fn parse_authority<T>(raw: T) -> Result<Authority, Error>
where
    T: AsRef<str>,
{
    Authority::parse(raw)
}
