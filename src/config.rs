//! Configure the command line tools.

use std::{ops::RangeInclusive, path::PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::{cli::Opts, util::data};

/// Configuration files looked up in the working directory, in order.
const DEFAULT_PATHS: [&str; 3] = ["devhelper.toml", "devhelper.json", "devhelper.yaml"];

/// Configuration for the command line tools.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format of commands.
    pub format: OutputFormat,

    /// Subnet calculator configuration.
    pub subnet: SubnetConfig,

    /// Regular expression tester configuration.
    pub regex: RegexConfig,
}

/// Output format of commands.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,

    /// Pretty-printed JSON.
    Json,
}

/// Configuration for the subnet calculator.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SubnetConfig {
    /// Smallest prefix length to list.
    pub min_mask_bits: u8,

    /// Largest prefix length to list.
    pub max_mask_bits: u8,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        Self {
            min_mask_bits: 0,
            max_mask_bits: 32,
        }
    }
}

impl SubnetConfig {
    /// Return the range of prefix lengths.
    pub fn mask_bits(&self) -> RangeInclusive<u8> {
        self.min_mask_bits..=self.max_mask_bits
    }
}

/// Configuration for the regular expression tester.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegexConfig {
    /// Size limit of a compiled expression, in bytes.
    pub size_limit: Option<usize>,
}

impl Config {
    /// Create a configuration from a [`Opts`] object.
    ///
    /// Reads the file given by `--config`, or the first default file that
    /// exists. Command line options take precedence over the file.
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        let path = opts.config.clone().or_else(|| {
            DEFAULT_PATHS
                .into_iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
        });

        let config = match path {
            Some(path) => data::read_file(path)?,
            None => Self::default(),
        };

        let config = Self {
            format: opts.format.unwrap_or(config.format),
            ..config
        };

        config.check()?;

        Ok(config)
    }

    /// Check if configuration is valid.
    pub fn check(&self) -> Result<()> {
        if self.subnet.max_mask_bits > 32 {
            return Err(anyhow!("`subnet.max_mask_bits` must be at most 32"));
        }

        if self.subnet.min_mask_bits > self.subnet.max_mask_bits {
            return Err(anyhow!(
                "`subnet.min_mask_bits` must not exceed `subnet.max_mask_bits`"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, OutputFormat, SubnetConfig};
    use crate::util::data::{read_str, Format};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.subnet.mask_bits(), 0..=32);
        assert_eq!(config.regex.size_limit, None);
        assert!(config.check().is_ok());
    }

    #[test]
    fn partial_file() {
        let config: Config = read_str("[subnet]\nmin_mask_bits = 16\n", Format::Toml).unwrap();
        assert_eq!(config.subnet.mask_bits(), 16..=32);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn formats() {
        const CASES: [(&str, Format); 3] = [
            (r#"{ "format": "json", "regex": { "size_limit": 1024 } }"#, Format::Json),
            ("format = \"json\"\n[regex]\nsize_limit = 1024\n", Format::Toml),
            ("format: json\nregex:\n  size_limit: 1024\n", Format::Yaml),
        ];

        for (input, format) in CASES {
            let config: Config = read_str(input, format).unwrap();
            assert_eq!(config.format, OutputFormat::Json, "{input:?}");
            assert_eq!(config.regex.size_limit, Some(1024), "{input:?}");
        }
    }

    #[test]
    fn unknown_field() {
        let result: anyhow::Result<Config> = read_str("colour = 1", Format::Toml);
        assert!(result.is_err());
    }

    #[test]
    fn check_mask_bits() {
        const CASES: [((u8, u8), bool); 5] = [
            ((0, 32), true),
            ((24, 24), true),
            ((8, 30), true),
            ((25, 24), false),
            ((0, 33), false),
        ];

        for ((min_mask_bits, max_mask_bits), expected) in CASES {
            let config = Config {
                subnet: SubnetConfig {
                    min_mask_bits,
                    max_mask_bits,
                },
                ..Default::default()
            };
            let result = config.check().is_ok();
            assert_eq!(result, expected, "{min_mask_bits:?} {max_mask_bits:?}");
        }
    }
}
