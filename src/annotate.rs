//! The two annotation payloads the controller persists.
//!
//! Both are pure builds from an [`Agent`]/[`Oplet`] snapshot; persistence is
//! the caller's job. The shapes differ on purpose: operation annotations
//! cross-reference by raw path/id strings, the node description links with
//! clickable URLs.

use crate::snapshot::{Agent, Oplet};
use crate::value::{AnnotationMap, navigation_url, operation_url};

/// Annotations attached to the operation record itself.
///
/// Keys are always present: `family`, `node` (path string, not a URL),
/// `controller` (nested map), `incarnation` (1-based for display), and
/// `previous_operation` (id string verbatim, nil sentinel included).
pub fn operation_annotations(agent: &Agent, oplet: &Oplet) -> AnnotationMap {
    let controller = AnnotationMap::from([
        ("address".to_string(), agent.hostname.as_str().into()),
        // TODO: build revision.
    ]);

    AnnotationMap::from([
        ("family".to_string(), agent.family.as_str().into()),
        ("node".to_string(), agent.root.child(&oplet.alias).into()),
        ("controller".to_string(), controller.into()),
        ("incarnation".to_string(), (oplet.incarnation_index + 1).into()),
        (
            "previous_operation".to_string(),
            oplet.operation_id.to_string().into(),
        ),
    ])
}

/// Annotations attached to the node describing the oplet.
///
/// `node` is a clickable navigation link here, and `previous_operation_id`
/// (a clickable operation link) is present only when an operation has run:
/// consumers must treat key absence as "no prior run", never as an empty
/// link.
pub fn node_description(agent: &Agent, oplet: &Oplet) -> AnnotationMap {
    let node = agent.root.child(&oplet.alias);

    let mut desc = AnnotationMap::from([
        ("node".to_string(), navigation_url(&agent.proxy, &node).into()),
        ("incarnation".to_string(), (oplet.incarnation_index + 1).into()),
    ]);

    if !oplet.operation_id.is_nil() {
        desc.insert(
            "previous_operation_id".to_string(),
            operation_url(&agent.proxy, oplet.operation_id).into(),
        );
    }

    desc
}
