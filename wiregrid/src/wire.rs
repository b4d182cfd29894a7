//! Wire graph: committed connections between ports.
//!
//! Wires are owned by id. An empty waypoint list means the renderer
//! synthesizes the route automatically; a non-empty list is drawn
//! exactly as recorded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::component::{NodeId, PortRef};
use crate::geometry::Point;

/// Wire identifier. Unique within the graph; any unique scheme works,
/// we use v4 UUID strings.
pub type WireId = String;

/// A committed connection between two ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: WireId,
    pub source: PortRef,
    pub target: PortRef,
    /// User-picked corners, in click order. Grid-aligned. Empty means
    /// auto-routed.
    pub waypoints: Vec<Point>,
}

impl Wire {
    /// True when either endpoint belongs to `node_id`.
    pub fn touches(&self, node_id: NodeId) -> bool {
        self.source.node_id == node_id || self.target.node_id == node_id
    }
}

/// Owned collection of committed wires, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct WireGraph {
    wires: BTreeMap<WireId, Wire>,
}

impl WireGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new wire. A self-loop (both endpoints on the same node)
    /// is silently rejected: no wire is created and no error surfaces.
    pub fn commit_wire(
        &mut self,
        source: PortRef,
        target: PortRef,
        waypoints: Vec<Point>,
    ) -> Option<WireId> {
        if source.node_id == target.node_id {
            tracing::debug!(node_id = source.node_id, "self-loop wire rejected");
            return None;
        }
        let id = Uuid::new_v4().to_string();
        tracing::debug!(%id, ?source, ?target, corners = waypoints.len(), "wire committed");
        self.wires.insert(
            id.clone(),
            Wire {
                id: id.clone(),
                source,
                target,
                waypoints,
            },
        );
        Some(id)
    }

    /// Remove a single wire by id. Unknown ids are a no-op.
    pub fn remove_wire(&mut self, id: &str) -> Option<Wire> {
        self.wires.remove(id)
    }

    /// Remove every wire with an endpoint on `node_id`. Called in the
    /// same logical mutation as node removal so no wire ever references
    /// a missing node.
    pub fn remove_wires_incident(&mut self, node_id: NodeId) -> usize {
        let before = self.wires.len();
        self.wires.retain(|_, wire| !wire.touches(node_id));
        let removed = before - self.wires.len();
        if removed > 0 {
            tracing::debug!(node_id, removed, "cascaded wire removal");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Wire> {
        self.wires.get(id)
    }

    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}
