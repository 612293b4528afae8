//! Builders for the web UI links embedded in annotations.
//!
//! No escaping is performed anywhere here: callers must ensure paths and
//! aliases contain no characters that break a URL query string.

use crate::snapshot::{NodePath, OperationId};
use crate::value::TaggedUrl;

/// Host of the cluster web UI all links point at.
pub const WEB_UI_HOST: &str = "https://yt.yandex-team.ru";

/// Wraps a URL string with the `"url"` discriminator. The input is not
/// validated or modified in any way.
pub fn tag_as_url(url: impl Into<String>) -> TaggedUrl {
    TaggedUrl::new(url)
}

/// Link to the metadata-store navigation page for `path` on `cluster`.
pub fn navigation_url(cluster: &str, path: &NodePath) -> TaggedUrl {
    tag_as_url(format!("{WEB_UI_HOST}/{cluster}/navigation?path={path}"))
}

/// Link to the operation page for `op_id` on `cluster`.
pub fn operation_url(cluster: &str, op_id: OperationId) -> TaggedUrl {
    tag_as_url(format!("{WEB_UI_HOST}/{cluster}/operations/{op_id}"))
}
