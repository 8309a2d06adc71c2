//! Utility functions and structures.

pub(crate) mod data;
pub mod iter;
pub mod latest;
pub mod percent;
