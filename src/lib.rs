//! Presentation layer for a cluster operation controller.
//!
//! The controller tracks "oplets": long-running cluster operations that
//! survive restarts (each restart is a new incarnation backed by a fresh
//! operation). Whenever it (re)registers an operation or refreshes the node
//! that describes it, it needs human- and machine-readable annotations for
//! the cluster web UI and the metadata store. This crate builds those:
//!
//! - annotation maps to attach to the operation itself ([`operation_annotations`])
//!   and to the node describing it ([`node_description`]);
//! - tagged URL values the UI renders as clickable links ([`value`]);
//! - a markdown summary of the oplet's current state ([`render_summary`]).
//!
//! Everything here is a pure function of a read-only [`snapshot`] of
//! controller and oplet state: no I/O, no mutation, no state across calls.

pub mod annotate;
pub mod snapshot;
pub mod summary;
pub mod value;

pub use annotate::{node_description, operation_annotations};
pub use snapshot::{Agent, NodePath, OperationId, OperationIdError, Oplet};
pub use summary::render_summary;
pub use value::{
    AnnotationMap, AnnotationValue, TaggedUrl, WEB_UI_HOST, navigation_url, operation_url,
    tag_as_url,
};

pub type Result<T> = anyhow::Result<T>;
