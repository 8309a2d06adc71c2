//! Developer helper tools.
//!
//! The core of the crate is the [`uri`] module: a mutable model of URIs with
//! ordered, duplicate-friendly query parameters and per-component
//! validation. Around it sit an IPv4 [`subnet`] calculator and a regular
//! expression tester ([`pattern`]).
//!
//! Devhelper can be used as both a CLI and a library.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pattern;
pub mod subnet;
pub mod uri;
pub mod util;

pub use config::Config;
pub use error::{Error, Result};
pub use uri::{Authority, QueryParameter, QueryParameters, Uri, UserInfo};
