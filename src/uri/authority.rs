//! The authority component of a URI (`[user[:password]@]host[:port]`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{user_info::UserInfo, validate};
use crate::error::{Component, Result};

/// Grammar of a non-empty host name.
static HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@:/?#]+$").expect("host pattern"));

/// A URI authority.
///
/// The port keeps both its numeric value and its textual form. The text is
/// stored verbatim when it comes from parsing, so that `0080` stays `0080`
/// as long as the numeric value is not changed.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Authority {
    host: String,
    port: Option<u16>,
    #[serde(rename = "port_string")]
    port_str: Option<String>,
    user_info: Option<UserInfo>,
}

impl Authority {
    /// Create an authority with given host and no port or user information.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        validate(&HOST_RE, &host, Component::Host)?;
        Ok(Self {
            host,
            ..Default::default()
        })
    }

    /// Create an [`Authority`] like [`self`], but with given numeric port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.set_port(Some(port));
        self
    }

    /// Create an [`Authority`] like [`self`], but with given textual port.
    pub fn with_port_str(mut self, port: impl Into<String>) -> Self {
        self.set_port_str(port);
        self
    }

    /// Create an [`Authority`] like [`self`], but with given user information.
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = Some(user_info);
        self
    }

    /// Return the host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Set the host name.
    pub fn set_host(&mut self, host: impl Into<String>) -> Result<()> {
        let host = host.into();
        validate(&HOST_RE, &host, Component::Host)?;
        self.host = host;
        Ok(())
    }

    /// Return the numeric port, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Return the textual port, if any.
    ///
    /// This may be set while [`Authority::port`] is not, when the text is not
    /// a valid port number.
    pub fn port_str(&self) -> Option<&str> {
        self.port_str.as_deref()
    }

    /// Set or clear the numeric port.
    ///
    /// The textual port is rewritten only when the numeric value changes.
    /// Clearing has no effect unless a numeric port is set.
    pub fn set_port(&mut self, port: Option<u16>) {
        match port {
            Some(port) if self.port != Some(port) => {
                self.port = Some(port);
                self.port_str = Some(port.to_string());
            },
            Some(_) => {},
            None if self.port.is_some() => {
                self.port = None;
                self.port_str = None;
            },
            None => {},
        }
    }

    /// Set the textual port.
    ///
    /// The text is kept verbatim. The numeric port is set when the text is a
    /// valid port number, and cleared otherwise.
    pub fn set_port_str(&mut self, port: impl Into<String>) {
        let port = port.into();
        self.port = port.trim().parse().ok();
        if self.port.is_none() {
            tracing::trace!("Keeping non-numeric port {:?} as text", port);
        }
        self.port_str = Some(port);
    }

    /// Return the user information, if any.
    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Return a mutable reference to the user information, if any.
    pub fn user_info_mut(&mut self) -> Option<&mut UserInfo> {
        self.user_info.as_mut()
    }

    /// Set or clear the user information.
    pub fn set_user_info(&mut self, user_info: Option<UserInfo>) {
        self.user_info = user_info;
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(user_info) = &self.user_info {
            write!(f, "{user_info}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = &self.port_str {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
