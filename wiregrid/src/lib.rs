//! Wiregrid - schematic graph model and orthogonal wire-routing engine
//!
//! This library owns the editable state of a simple circuit schematic:
//! typed nodes (resistor, battery, ground) snapped to a grid, the wires
//! connecting their ports, and the multi-click interaction that draws
//! new wires. A host UI feeds it pointer and click events and reads
//! back node, wire, and ghost-wire snapshots whenever the revision
//! counter moves; rendering itself is out of scope.
//!
//! # Quick Start
//!
//! ```
//! use wiregrid::{SchematicEditor, NodeKind, PortSide};
//!
//! let mut editor = SchematicEditor::default();
//! let battery = editor.add_node(NodeKind::Battery);
//! let resistor = editor.add_node(NodeKind::Resistor);
//!
//! editor.port_click(battery, PortSide::Right);
//! editor.port_click(resistor, PortSide::Left);
//!
//! let wires = editor.wire_views();
//! assert_eq!(wires.len(), 1);
//! ```
//!
//! # Features
//!
//! - **Node registry**: grid-snapped placement, best-effort value edits
//! - **Wire graph**: self-loop rejection, atomic delete cascade
//! - **Path synthesis**: manual corner chains and smart Manhattan routes
//! - **Net derivation**: electrical nets and path queries over the graph

pub mod component;
pub mod editor;
pub mod geometry;
pub mod netlist;
pub mod registry;
pub mod route;
pub mod wire;

// Re-export main types
pub use component::{KindSpec, Node, NodeId, NodeKind, PortRef, PortSide};
pub use editor::{DraftView, EditorConfig, NodeView, SchematicEditor, WireView};
pub use geometry::{snap, Point, DEFAULT_CELL_SIZE};
pub use netlist::{Net, Netlist, NetlistStats};
pub use registry::NodeRegistry;
pub use route::{auto_route, manual_path, RouteAnchor};
pub use wire::{Wire, WireGraph, WireId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        EditorConfig, Net, Netlist, NodeId, NodeKind, Point, PortRef, PortSide, SchematicEditor,
    };
}
