//! Node registry and port geometry resolution.
//!
//! Owns the set of placed components keyed by id. The grid-snap
//! invariant is enforced here, on every position write, rather than in
//! whatever drag widget the host UI happens to use.

use std::collections::BTreeMap;

use crate::component::{Node, NodeId, NodeKind, PortRef};
use crate::geometry::Point;

/// Spawn anchor for newly added nodes.
const SPAWN_X: i32 = 100;
const SPAWN_Y: i32 = 100;
/// New nodes are staggered by this many cells so consecutive adds do
/// not stack on top of each other.
const SPAWN_STAGGER_CELLS: i32 = 2;

/// Owned collection of placed nodes.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: BTreeMap<NodeId, Node>,
    cell_size: i32,
}

impl NodeRegistry {
    pub fn new(cell_size: i32) -> Self {
        Self {
            nodes: BTreeMap::new(),
            cell_size,
        }
    }

    /// Add a node of the given kind with its default value and a
    /// grid-aligned spawn position. Ids are `max(existing ids, 0) + 1`.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.keys().next_back().copied().unwrap_or(0) + 1;
        let stagger = (self.nodes.len() as i32 % 6) * SPAWN_STAGGER_CELLS * self.cell_size;
        let position =
            Point::new(SPAWN_X + stagger, SPAWN_Y + stagger).snapped(self.cell_size);
        let node = Node {
            id,
            kind,
            value: kind.spec().default_value,
            position,
        };
        tracing::debug!(id, ?kind, ?position, "node added");
        self.nodes.insert(id, node);
        id
    }

    /// Best-effort value update: unparseable input becomes 0, unknown
    /// ids and fixed-value kinds (Ground) are no-ops. Never errors.
    pub fn update_value(&mut self, id: NodeId, raw: &str) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        if node.kind.value_is_fixed() {
            return false;
        }
        let value = raw.trim().parse::<f64>().unwrap_or(0.0);
        if node.value == value {
            return false;
        }
        node.value = value;
        true
    }

    /// Move a node, snapping to the grid. Unknown ids are a no-op.
    /// Returns false when nothing changed, so repeated calls with the
    /// same coordinates are idempotent.
    pub fn move_node(&mut self, id: NodeId, x: i32, y: i32) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        let snapped = Point::new(x, y).snapped(self.cell_size);
        if node.position == snapped {
            return false;
        }
        node.position = snapped;
        true
    }

    /// Remove a node. The caller is responsible for cascading the wire
    /// graph in the same logical mutation.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Resolve a port to its absolute pixel position. A stale reference
    /// to a missing node degrades to the origin sentinel instead of
    /// failing; paths go visibly wrong but the editor keeps running.
    pub fn port_position(&self, port: PortRef) -> Point {
        match self.nodes.get(&port.node_id) {
            Some(node) => node.port_position(port.side),
            None => {
                tracing::warn!(node_id = port.node_id, "port lookup hit missing node");
                Point::ORIGIN
            }
        }
    }
}
