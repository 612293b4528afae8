//! Annotation values: the structured payload handed to the metadata encoder.
//!
//! Values are a small closed union so the encoder can match exhaustively:
//! strings, integers, nested maps, and tagged URLs. A tagged URL carries a
//! `"url"` discriminator in an attributes side channel (never mixed into the
//! string itself) so the web UI renders a hyperlink instead of literal text.
//!
//! Encoding follows the cluster convention for attribute-carrying values:
//! `{"$attributes": {"_type_tag": "url"}, "$value": "<url>"}`. Plain values
//! encode bare.

pub mod url;

pub use url::{WEB_UI_HOST, navigation_url, operation_url, tag_as_url};

use crate::snapshot::NodePath;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Mapping from annotation key to value. Key order is irrelevant.
pub type AnnotationMap = BTreeMap<String, AnnotationValue>;

/// One annotation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    String(String),
    Int(i64),
    Map(AnnotationMap),
    Url(TaggedUrl),
}

/// A URL wrapped with the `"url"` discriminator attribute.
///
/// The payload string is taken as-is; callers must pass a well-formed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedUrl {
    url: String,
}

impl TaggedUrl {
    /// Attribute key carrying the discriminator.
    pub const TAG_ATTRIBUTE: &'static str = "_type_tag";

    /// Discriminator value marking a hyperlink.
    pub const TAG: &'static str = "url";

    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The wrapped URL string, unchanged.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Serialize for TaggedUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut attrs = BTreeMap::new();
        attrs.insert(Self::TAG_ATTRIBUTE, Self::TAG);

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("$attributes", &attrs)?;
        map.serialize_entry("$value", &self.url)?;
        map.end()
    }
}

impl Serialize for AnnotationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnnotationValue::String(s) => serializer.serialize_str(s),
            AnnotationValue::Int(i) => serializer.serialize_i64(*i),
            AnnotationValue::Map(m) => m.serialize(serializer),
            AnnotationValue::Url(u) => u.serialize(serializer),
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::String(s.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::String(s)
    }
}

impl From<i64> for AnnotationValue {
    fn from(i: i64) -> Self {
        AnnotationValue::Int(i)
    }
}

impl From<u64> for AnnotationValue {
    fn from(i: u64) -> Self {
        // Incarnation counts stay far below i64::MAX by contract.
        AnnotationValue::Int(i as i64)
    }
}

impl From<NodePath> for AnnotationValue {
    fn from(path: NodePath) -> Self {
        AnnotationValue::String(path.as_str().to_string())
    }
}

impl From<TaggedUrl> for AnnotationValue {
    fn from(url: TaggedUrl) -> Self {
        AnnotationValue::Url(url)
    }
}

impl From<AnnotationMap> for AnnotationValue {
    fn from(map: AnnotationMap) -> Self {
        AnnotationValue::Map(map)
    }
}
