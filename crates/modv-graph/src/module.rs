//! Module identity.
//!
//! A module token from the dumper is either a bare path (`example.com/app`)
//! or a path with a version suffix (`golang.org/x/text@v0.3.2`). The bare
//! form identifies the root module: `go mod graph` never prints a version
//! for the main module, so "no version" and "root" coincide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one dependency unit.
///
/// Equality is exact on both fields, so a root module and a versioned
/// module with the same name are distinct identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    /// Module path, e.g. `golang.org/x/text`.
    pub name: String,
    /// Version suffix, empty exactly when this module is the root.
    pub version: String,
}

impl Module {
    /// Parse a single dumper token into a `Module`.
    ///
    /// Splits on the first `@`; both halves are trimmed. A token without
    /// `@` yields a root module. This never fails: callers are responsible
    /// for handing in well-formed tokens, and an empty token simply yields
    /// an empty-named root.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.split_once('@') {
            Some((name, version)) => Self {
                name: name.trim().to_string(),
                version: version.trim().to_string(),
            },
            None => Self {
                name: token.trim().to_string(),
                version: String::new(),
            },
        }
    }

    /// Construct a versioned module, mostly useful in tests.
    #[must_use]
    pub fn versioned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// True exactly when the version is empty.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.version.is_empty()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.version)
        }
    }
}
