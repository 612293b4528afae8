//! Hierarchical path of a node in the cluster metadata store.
//!
//! Example: `//sys/oplets` joined with alias `demo` => `//sys/oplets/demo`.
//!
//! Stored as a plain string. No escaping or validation: callers must not put
//! path separators or query-breaking characters into segments.

use serde::{Deserialize, Serialize};

/// A metadata-store node path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(String);

impl NodePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Appends one child segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}/{}", self.0, segment))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}
