//! Test regular expressions against a target string.
//!
//! Flags follow the usual `g`, `i`, `m`, and `y` letters. Patterns are always
//! compiled in Unicode mode.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::{Error, Result};

/// Options to compile a [`Pattern`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Source of the expression.
    pub pattern: String,

    /// Replace every match instead of the first one.
    pub global: bool,

    /// Match letters regardless of case.
    pub ignore_case: bool,

    /// Let `^` and `$` match at line boundaries.
    pub multiline: bool,

    /// Only match at the start of the target.
    pub sticky: bool,

    /// Size limit of the compiled expression, in bytes.
    pub size_limit: Option<usize>,
}

impl PatternOptions {
    /// Create options for given expression, with every flag unset.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    /// Return the flags as letters, e.g. `gim`.
    pub fn flags(&self) -> String {
        [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.sticky, 'y'),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect()
    }
}

/// A capture group by position. Group 0 is the whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumberedGroup {
    /// Position of the group.
    pub index: usize,

    /// Matched text, if the group participated.
    pub value: Option<String>,
}

/// A capture group by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedGroup {
    /// Name of the group.
    pub name: String,

    /// Matched text, if the group participated.
    pub value: Option<String>,
}

/// The first match of a [`Pattern`] in a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Byte offset of the match.
    pub index: usize,

    /// Every group, in order.
    pub numbered_groups: Vec<NumberedGroup>,

    /// Named groups, in order of appearance.
    pub named_groups: Vec<NamedGroup>,
}

/// A compiled regular expression with its flags.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    global: bool,
}

impl Pattern {
    /// Compile a regular expression.
    pub fn compile(options: &PatternOptions) -> Result<Self> {
        let source = if options.sticky {
            format!(r"\A(?:{})", options.pattern)
        } else {
            options.pattern.clone()
        };

        let mut builder = RegexBuilder::new(&source);
        builder
            .case_insensitive(options.ignore_case)
            .multi_line(options.multiline)
            .unicode(true);
        if let Some(size_limit) = options.size_limit {
            builder.size_limit(size_limit);
        }

        let regex = builder
            .build()
            .map_err(|source| Error::InvalidPattern { source })?;

        tracing::debug!("Compiled /{}/{}", options.pattern, options.flags());

        Ok(Self {
            regex,
            global: options.global,
        })
    }

    /// Return the underlying expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Check if the pattern matches somewhere in `target`.
    pub fn test(&self, target: &str) -> bool {
        self.regex.is_match(target)
    }

    /// Return the first match in `target` with its groups.
    pub fn exec(&self, target: &str) -> Option<MatchResult> {
        let captures = self.regex.captures(target)?;

        let numbered_groups = captures
            .iter()
            .enumerate()
            .map(|(index, group)| NumberedGroup {
                index,
                value: group.map(|m| m.as_str().to_string()),
            })
            .collect();

        let named_groups = self
            .regex
            .capture_names()
            .flatten()
            .map(|name| NamedGroup {
                name: name.to_string(),
                value: captures.name(name).map(|m| m.as_str().to_string()),
            })
            .collect();

        Some(MatchResult {
            index: captures.get(0).map_or(0, |m| m.start()),
            numbered_groups,
            named_groups,
        })
    }

    /// Replace the first match, or every match when global.
    ///
    /// `$1` and `${name}` in `replacement` expand to groups.
    pub fn replace(&self, target: &str, replacement: &str) -> String {
        if self.global {
            self.regex.replace_all(target, replacement).into_owned()
        } else {
            self.regex.replace(target, replacement).into_owned()
        }
    }

    /// Split `target` around matches, keeping at most `limit` pieces.
    pub fn split(&self, target: &str, limit: Option<usize>) -> Vec<String> {
        let pieces = self.regex.split(target).map(String::from);
        match limit {
            Some(limit) => pieces.take(limit).collect(),
            None => pieces.collect(),
        }
    }
}
