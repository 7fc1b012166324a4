use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Id of the wildcard category, meaning "no category restriction".
pub const WILDCARD_CATEGORY_ID: &str = "all";

/// Stable key of a category facet value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The distinguished wildcard category.
    pub fn wildcard() -> Self {
        Self(WILDCARD_CATEGORY_ID.to_string())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD_CATEGORY_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::wildcard()
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
