//! Library errors.

/// Enumerates library errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A URI component does not match its grammar.
    #[error("Invalid {component} value")]
    InvalidComponent {
        /// Component that failed validation.
        component: Component,
    },
    /// A query parameter index is past the end.
    #[error("Index {index} is out of range for {len} query parameters")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of query parameters.
        len: usize,
    },
    /// An IPv4 address is malformed.
    #[error("Invalid IP Address")]
    InvalidAddress {
        /// Rejected input.
        address: String,
    },
    /// A regular expression does not compile.
    #[error("Invalid regular expression")]
    InvalidPattern {
        /// Compilation error.
        source: regex::Error,
    },
}

impl Error {
    pub(crate) fn invalid(component: Component) -> Self {
        Self::InvalidComponent { component }
    }
}

/// A validated URI component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Component {
    Scheme,
    Separator,
    Username,
    Password,
    Host,
    Path,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Scheme => "scheme name",
            Self::Separator => "separator",
            Self::Username => "username",
            Self::Password => "password",
            Self::Host => "host name",
            Self::Path => "path",
        })
    }
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
