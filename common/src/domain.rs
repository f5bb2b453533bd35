//! # Domain Names
//!
//! The two kinds of names the tool deals with:
//! * [`Domain`]: the root domain entered by the operator.
//! * [`Subdomain`]: a candidate name reported by one of the sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain is empty")]
    Empty,
    #[error("domain {0:?} contains whitespace")]
    Whitespace(String),
    #[error("domain {0:?} contains a path separator")]
    PathSeparator(String),
    #[error("domain {0:?} has an empty label")]
    EmptyLabel(String),
}

/// The root domain whose subdomains are enumerated.
///
/// Stored lowercased and without a trailing dot, so it can be used both in
/// source URLs and as a file name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `name` is this domain or lives below it.
    pub fn is_suffix_of(&self, name: &str) -> bool {
        name.ends_with(self.0.as_str())
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    /// Parses operator input into a `Domain`.
    ///
    /// * Surrounding whitespace and a single trailing dot are removed.
    /// * The name is lowercased.
    /// * Inner whitespace, `/` and `\` are rejected, as are empty labels
    ///   (`example..com`, `.example.com`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(DomainError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::Whitespace(trimmed.to_string()));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DomainError::PathSeparator(trimmed.to_string()));
        }
        if trimmed.split('.').any(str::is_empty) {
            return Err(DomainError::EmptyLabel(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate subdomain name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subdomain(String);

impl Subdomain {
    /// Trims `raw` and wraps it, or returns `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
