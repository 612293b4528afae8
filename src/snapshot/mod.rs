//! Read-only snapshot of controller and oplet state.
//!
//! The lifecycle controller owns these values; this crate only reads them
//! for the duration of a single build/render call. It owns:
//! - OperationId (cluster operation identifier + nil sentinel)
//! - NodePath (hierarchical metadata-store path)
//! - Agent / Oplet (the fields the annotation builders consume)

pub mod op_id;
pub mod path;
pub mod state;

pub use op_id::{OperationId, OperationIdError};
pub use path::NodePath;
pub use state::{Agent, Oplet};
