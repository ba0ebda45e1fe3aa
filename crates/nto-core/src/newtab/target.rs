use std::fmt;

use serde::{Deserialize, Serialize};

/// The "no override / show default" target value.
pub const BLANK_TARGET: &str = "about:blank";

/// A concrete target the override sink can apply.
///
/// Immutable once produced; has no identity beyond its string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewTabTarget(String);

impl NewTabTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The blank sentinel.
    pub fn blank() -> Self {
        Self(BLANK_TARGET.to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0 == BLANK_TARGET
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewTabTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NewTabTarget {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for NewTabTarget {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
