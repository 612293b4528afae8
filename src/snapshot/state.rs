//! The controller-owned state the annotation builders read.

use crate::snapshot::{NodePath, OperationId};
use serde::{Deserialize, Serialize};

/// One controller instance: its own identity plus the cluster it manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Kind of managed workload (e.g. `chyt`).
    pub family: String,

    /// Path under which managed nodes live.
    pub root: NodePath,

    /// Cluster endpoint the web UI links point at.
    pub proxy: String,

    /// The controller's own network identity.
    pub hostname: String,
}

/// One managed unit of work, surviving across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oplet {
    /// Stable unique name; never changes across incarnations.
    pub alias: String,

    /// Zero-based restart count. Monotonically non-decreasing over the
    /// oplet's life.
    pub incarnation_index: u64,

    /// Operation backing the current incarnation, or [`OperationId::NIL`]
    /// when nothing has run yet.
    pub operation_id: OperationId,
}
