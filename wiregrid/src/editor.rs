//! Editor facade: event API, wire-drawing state machine, and render
//! snapshots.
//!
//! All state transitions happen synchronously inside the handler for
//! one input event. Consumers watch the revision counter and re-pull
//! snapshots when it changes; there is no hidden re-render hook.

use serde::Serialize;

use crate::component::{Node, NodeId, NodeKind, PortRef, PortSide};
use crate::geometry::{Point, DEFAULT_CELL_SIZE};
use crate::netlist::Netlist;
use crate::registry::NodeRegistry;
use crate::route::{auto_route, manual_path, RouteAnchor};
use crate::wire::{WireGraph, WireId};

/// Process-wide editor configuration, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig {
    /// Grid cell size in pixels. Node positions, waypoints, and the
    /// live cursor are all quantized to this.
    pub cell_size: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Wire-drawing interaction state. Cycles between `Idle` and `Drawing`
/// for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DrawState {
    Idle,
    Drawing {
        source: PortRef,
        waypoints: Vec<Point>,
    },
}

/// The in-progress wire, exposed to the renderer for the ghost preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftView {
    pub source: PortRef,
    pub waypoints: Vec<Point>,
    /// Preview polyline: source port, recorded corners, snapped cursor.
    pub preview: Vec<Point>,
}

/// A node as the renderer sees it: stored fields plus derived geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub kind: NodeKind,
    pub value: f64,
    pub unit: &'static str,
    pub position: Point,
    pub width: i32,
    pub height: i32,
    pub left_port: Point,
    pub right_port: Point,
}

impl NodeView {
    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id,
            kind: node.kind,
            value: node.value,
            unit: node.unit(),
            position: node.position,
            width: node.width(),
            height: node.height(),
            left_port: node.port_position(PortSide::Left),
            right_port: node.port_position(PortSide::Right),
        }
    }
}

/// A wire with its endpoints resolved and its path synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireView {
    pub id: WireId,
    pub source: PortRef,
    pub target: PortRef,
    pub manual: bool,
    pub path: Vec<Point>,
}

/// Schematic editor core: node registry, wire graph, and the
/// wire-drawing state machine behind one event-driven API.
#[derive(Debug)]
pub struct SchematicEditor {
    registry: NodeRegistry,
    wires: WireGraph,
    state: DrawState,
    cursor: Point,
    config: EditorConfig,
    revision: u64,
}

impl SchematicEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            registry: NodeRegistry::new(config.cell_size),
            wires: WireGraph::new(),
            state: DrawState::Idle,
            cursor: Point::ORIGIN,
            config,
            revision: 0,
        }
    }

    /// Monotonic counter bumped on every observable mutation. Consumers
    /// re-derive paths and views when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // --- node events -----------------------------------------------------

    /// Place a new component; returns its id.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.registry.add_node(kind);
        self.touch();
        id
    }

    /// Best-effort numeric update; bad input becomes 0, unknown ids and
    /// Ground are no-ops.
    pub fn update_value(&mut self, id: NodeId, raw: &str) {
        if self.registry.update_value(id, raw) {
            self.touch();
        }
    }

    /// Move a node to the cell nearest `(x, y)`.
    pub fn move_node(&mut self, id: NodeId, x: i32, y: i32) {
        if self.registry.move_node(id, x, y) {
            self.touch();
        }
    }

    /// Remove a node, its incident wires, and any draft anchored on it,
    /// as one mutation. No intermediate state where a wire references a
    /// missing node is ever observable.
    pub fn remove_node(&mut self, id: NodeId) {
        if self.registry.remove_node(id).is_none() {
            return;
        }
        self.wires.remove_wires_incident(id);
        if let DrawState::Drawing { source, .. } = &self.state {
            if source.node_id == id {
                tracing::debug!(node_id = id, "draft cancelled by node removal");
                self.state = DrawState::Idle;
            }
        }
        self.touch();
    }

    /// Remove a single wire by id.
    pub fn remove_wire(&mut self, id: &str) {
        if self.wires.remove_wire(id).is_some() {
            self.touch();
        }
    }

    // --- drawing gesture -------------------------------------------------

    /// Click on a port. Starts a draft when idle; finishes it when
    /// drawing on a different node. A click back on the source node is
    /// rejected and the draft stays active.
    pub fn port_click(&mut self, node_id: NodeId, side: PortSide) {
        if !self.registry.contains(node_id) {
            return;
        }
        match std::mem::replace(&mut self.state, DrawState::Idle) {
            DrawState::Idle => {
                self.state = DrawState::Drawing {
                    source: PortRef::new(node_id, side),
                    waypoints: Vec::new(),
                };
                self.touch();
            }
            DrawState::Drawing { source, waypoints } => {
                if source.node_id == node_id {
                    // Self-loop guard: keep drawing from the original port.
                    self.state = DrawState::Drawing { source, waypoints };
                    return;
                }
                self.wires
                    .commit_wire(source, PortRef::new(node_id, side), waypoints);
                self.touch();
            }
        }
    }

    /// Click on empty canvas while drawing: record a grid-snapped
    /// corner. Ignored when idle.
    pub fn canvas_click(&mut self, point: Point) {
        if let DrawState::Drawing { waypoints, .. } = &mut self.state {
            waypoints.push(point.snapped(self.config.cell_size));
            self.touch();
        }
    }

    /// Discard any in-progress draft and return to idle. The wire graph
    /// is untouched.
    pub fn cancel_draw(&mut self) {
        if matches!(self.state, DrawState::Drawing { .. }) {
            self.state = DrawState::Idle;
            self.touch();
        }
    }

    /// Live pointer position, snapped for the ghost preview. Only a
    /// mutation while a draft exists; idle moves change nothing.
    pub fn pointer_move(&mut self, point: Point) {
        let snapped = point.snapped(self.config.cell_size);
        if snapped == self.cursor {
            return;
        }
        self.cursor = snapped;
        if matches!(self.state, DrawState::Drawing { .. }) {
            self.touch();
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    // --- read surface ----------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.registry.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn wire_graph(&self) -> &WireGraph {
        &self.wires
    }

    /// Snapshot of all nodes with derived geometry, for drawing boxes.
    pub fn nodes(&self) -> Vec<NodeView> {
        self.registry.nodes().map(NodeView::from_node).collect()
    }

    /// Snapshot of all wires with resolved endpoints and synthesized
    /// paths, for drawing lines.
    pub fn wire_views(&self) -> Vec<WireView> {
        self.wires
            .wires()
            .map(|wire| WireView {
                id: wire.id.clone(),
                source: wire.source,
                target: wire.target,
                manual: !wire.waypoints.is_empty(),
                path: self.synthesize(wire.source, wire.target, &wire.waypoints),
            })
            .collect()
    }

    /// The current draft with its preview path, if a gesture is in
    /// progress.
    pub fn draft(&self) -> Option<DraftView> {
        let DrawState::Drawing { source, waypoints } = &self.state else {
            return None;
        };
        let start = self.registry.port_position(*source);
        Some(DraftView {
            source: *source,
            waypoints: waypoints.clone(),
            preview: manual_path(start, waypoints, self.cursor),
        })
    }

    /// Electrical nets derived from the current graph, for the
    /// read-only reporting collaborator.
    pub fn netlist(&self) -> Netlist {
        Netlist::build(&self.registry, &self.wires)
    }

    fn synthesize(&self, source: PortRef, target: PortRef, waypoints: &[Point]) -> Vec<Point> {
        let source_pt = self.registry.port_position(source);
        let target_pt = self.registry.port_position(target);
        if !waypoints.is_empty() {
            return manual_path(source_pt, waypoints, target_pt);
        }
        let anchor = |port: PortRef, pt: Point| {
            let node_x = self
                .registry
                .get(port.node_id)
                .map(|n| n.position.x)
                .unwrap_or(0);
            RouteAnchor::new(pt, port.side, node_x)
        };
        auto_route(
            anchor(source, source_pt),
            anchor(target, target_pt),
            self.config.cell_size,
        )
    }
}

impl Default for SchematicEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
