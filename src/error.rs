use std::error::Error;
use std::fmt;
use std::io;

/// Failures of a client IP lookup.
///
/// A lookup yields either exactly one address or exactly one of these.
#[derive(Debug)]
pub enum ResolveError {
    /// The host's interface addresses could not be listed
    Enumeration(io::Error),
    /// Every address was scanned and none sits in an allowed network
    NoMatch { allowed_networks: Vec<String> },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Enumeration(e) => {
                write!(f, "failed to fetch system IP addresses: {}", e)
            }
            ResolveError::NoMatch { allowed_networks } => write!(
                f,
                "no valid IP address found matching against allowed networks {:?}",
                allowed_networks
            ),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveError::Enumeration(e) => Some(e),
            ResolveError::NoMatch { .. } => None,
        }
    }
}

impl From<io::Error> for ResolveError {
    fn from(e: io::Error) -> Self {
        ResolveError::Enumeration(e)
    }
}
