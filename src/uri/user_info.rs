//! The user information of a URI authority.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::{
    error::{Component, Error, Result},
    uri::validate,
};

/// Grammar of a non-empty username or password.
static COMPONENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@:/?#]+$").expect("user info pattern"));

/// A username with an optional password (`user[:password]`).
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    username: String,
    password: Option<String>,
}

impl UserInfo {
    /// Create user information, validating both parts.
    ///
    /// An empty password is kept distinct from an absent one.
    pub fn new(username: impl Into<String>, password: Option<String>) -> Result<Self> {
        let username = username.into();
        validate(&COMPONENT_RE, &username, Component::Username)?;
        if let Some(password) = password.as_deref() {
            validate(&COMPONENT_RE, password, Component::Password)?;
        }
        Ok(Self { username, password })
    }

    /// Return the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Set the username.
    pub fn set_username(&mut self, username: impl Into<String>) -> Result<()> {
        let username = username.into();
        validate(&COMPONENT_RE, &username, Component::Username)?;
        self.username = username;
        Ok(())
    }

    /// Return the password, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Set or clear the password.
    pub fn set_password(&mut self, password: Option<String>) -> Result<()> {
        if let Some(password) = password.as_deref() {
            validate(&COMPONENT_RE, password, Component::Password)?;
        }
        self.password = password;
        Ok(())
    }
}

impl std::fmt::Display for UserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)?;
        if let Some(password) = &self.password {
            write!(f, ":{password}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for UserInfo {
    type Err = Error;

    /// Parse `user[:password]`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((username, password)) => Self::new(username, Some(password.to_string())),
            None => Self::new(s, None),
        }
    }
}
