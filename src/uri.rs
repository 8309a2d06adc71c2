//! Parse, validate, and build URIs.
//!
//! This module provides the [`Uri`] type. A URI is split into a scheme, a
//! separator, an [`Authority`], a path, [`QueryParameters`], and a fragment.
//! Every component is validated against its own grammar when it is set.
//!
//! The grammar is deliberately loose: each component excludes only the
//! delimiters that would make the URI ambiguous.

pub mod authority;
pub mod query;
pub mod user_info;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use self::{
    authority::Authority,
    query::{QueryParameter, QueryParameters},
    user_info::UserInfo,
};
use crate::error::{Component, Error, Result};

/// Matches a whole URI, capturing:
///
/// 1. scheme
/// 2. separator (`/` or `//`)
/// 3. username
/// 4. password
/// 5. host
/// 6. port
/// 7. path
/// 8. query
/// 9. fragment
static URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(?:([^:@/%?#]+):(//?)?)?",
        r"(?:([^@:/?#]*)(?::([^@:/?#]*))?@)?",
        r"(?:([^@:/?#]+)(?::([0-9]+))?)?)?",
        r"([^?#]*)(?:\?([^#]*))?(?:#([^\n\r\u{2028}\u{2029}]*))?$",
    ))
    .expect("URI pattern")
});

static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^:@/%?#]+$").expect("scheme pattern"));

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//?$").expect("separator pattern"));

static PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^?#]+$").expect("path pattern"));

/// Check that `value` is empty or matches `re`.
pub(crate) fn validate(re: &Regex, value: &str, component: Component) -> Result<()> {
    if value.is_empty() || re.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid(component))
    }
}

/// An owned and mutable URI.
///
/// Optional components distinguish "absent" from "empty": `http:?` has an
/// empty query while `http:` has none, and both serialize back as written.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Uri {
    scheme: String,
    separator: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<QueryParameters>,
    fragment: Option<String>,
}

impl Uri {
    /// Create an empty URI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI.
    ///
    /// An input that does not match the URI grammar at all is kept whole as
    /// the path.
    pub fn parse(input: &str) -> Result<Self> {
        let Some(captures) = URI_RE.captures(input) else {
            tracing::debug!("Treating {:?} as an opaque path", input);
            return Ok(Self {
                path: input.to_string(),
                ..Default::default()
            });
        };

        let group = |i: usize| captures.get(i).map(|m| m.as_str());

        let authority = match group(5) {
            Some(host) => {
                let mut authority = Authority::new(host)?;
                if let Some(port) = group(6) {
                    authority.set_port_str(port);
                }
                if let Some(username) = group(3) {
                    let password = group(4).map(String::from);
                    authority.set_user_info(Some(UserInfo::new(username, password)?));
                }
                Some(authority)
            },
            None => None,
        };

        let uri = Self {
            scheme: group(1).unwrap_or_default().to_string(),
            separator: group(2).map(String::from),
            authority,
            path: group(7).unwrap_or_default().to_string(),
            query: QueryParameters::parse(group(8)),
            fragment: group(9).map(String::from),
        };

        tracing::trace!("Parsed {:?} as {:?}", input, uri);

        Ok(uri)
    }

    /// Return the scheme, or an empty string.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Set the scheme.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) -> Result<()> {
        let scheme = scheme.into();
        validate(&SCHEME_RE, &scheme, Component::Scheme)?;
        self.scheme = scheme;
        Ok(())
    }

    /// Return the separator, if any.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Set or clear the separator.
    ///
    /// A separator is empty, `/`, or `//`.
    pub fn set_separator(&mut self, separator: Option<String>) -> Result<()> {
        if let Some(separator) = separator.as_deref() {
            validate(&SEPARATOR_RE, separator, Component::Separator)?;
        }
        self.separator = separator;
        Ok(())
    }

    /// Return the authority, if any.
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Return a mutable reference to the authority, if any.
    pub fn authority_mut(&mut self) -> Option<&mut Authority> {
        self.authority.as_mut()
    }

    /// Set or clear the authority.
    pub fn set_authority(&mut self, authority: Option<Authority>) {
        self.authority = authority;
    }

    /// Return the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Set the path.
    pub fn set_path(&mut self, path: impl Into<String>) -> Result<()> {
        let path = path.into();
        validate(&PATH_RE, &path, Component::Path)?;
        self.path = path;
        Ok(())
    }

    /// Return the query parameters, if any.
    pub fn query(&self) -> Option<&QueryParameters> {
        self.query.as_ref()
    }

    /// Return a mutable reference to the query parameters, if any.
    pub fn query_mut(&mut self) -> Option<&mut QueryParameters> {
        self.query.as_mut()
    }

    /// Set or clear the query parameters.
    pub fn set_query(&mut self, query: Option<QueryParameters>) {
        self.query = query;
    }

    /// Return the fragment, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Set or clear the fragment.
    pub fn set_fragment(&mut self, fragment: Option<String>) {
        self.fragment = fragment;
    }
}

impl std::fmt::Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if let Some(separator) = &self.separator {
            f.write_str(separator)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
