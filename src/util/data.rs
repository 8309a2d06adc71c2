//! Read serializable data from TOML, JSON, or YAML sources.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

/// Supported data formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Guess the format of a file from its extension.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(ext) => Err(anyhow!("unsupported file extension `{}`", ext)),
            None => Err(anyhow!("missing file extension in {:?}", path)),
        }
    }
}

/// Read data from a file, in the format given by its extension.
pub(crate) fn read_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    tracing::debug!("Reading {:?} as {:?}", path, format);

    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    read_str(content, format).with_context(|| format!("parsing {}", path.display()))
}

/// Read data from a string.
pub(crate) fn read_str<T, S>(content: S, format: Format) -> Result<T>
where
    T: DeserializeOwned,
    S: AsRef<str>,
{
    let content = content.as_ref();
    Ok(match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    })
}
