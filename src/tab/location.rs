//! Opaque shell location identifiers.

use std::fmt;

/// Identifies one navigable shell location (a folder, a virtual folder such as
/// "This PC", or a network share).
///
/// The engine never interprets the identifier. It only compares locations for
/// equality and hands them back to the host, which knows how to name them, turn
/// them into filesystem paths and browse to them. Each `Tab` owns its own copy;
/// cloning produces an independent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Wrap a host parsing name such as `C:\Users` or `::{20D04FE0-...}`.
    pub fn new(parsing_name: impl Into<String>) -> Self {
        Self(parsing_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Self(value)
    }
}
