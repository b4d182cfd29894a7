//! Component kinds, placed nodes, and port references.
//!
//! The kind table is the single source of truth for per-kind geometry
//! and defaults; adding a new component kind is one more `KindSpec`
//! entry plus the exhaustive matches the compiler will point at.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier for a placed node. Assigned as one past the highest
/// existing id.
pub type NodeId = u32;

/// Closed set of component kinds the editor can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Resistor,
    Battery,
    Ground,
}

/// Per-kind geometry and defaults. Dimensions are derived from the
/// kind, never stored on the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    pub width: i32,
    pub height: i32,
    pub default_value: f64,
    pub unit: &'static str,
}

impl NodeKind {
    pub const fn spec(self) -> KindSpec {
        match self {
            NodeKind::Resistor => KindSpec {
                width: 160,
                height: 80,
                default_value: 100.0,
                unit: "Ω",
            },
            NodeKind::Battery => KindSpec {
                width: 160,
                height: 80,
                default_value: 0.0,
                unit: "V",
            },
            NodeKind::Ground => KindSpec {
                width: 80,
                height: 80,
                default_value: 0.0,
                unit: "V",
            },
        }
    }

    pub const fn unit(self) -> &'static str {
        self.spec().unit
    }

    /// Ground is pinned to 0 and not user-editable.
    pub const fn value_is_fixed(self) -> bool {
        matches!(self, NodeKind::Ground)
    }

    pub const ALL: [NodeKind; 3] = [NodeKind::Resistor, NodeKind::Battery, NodeKind::Ground];
}

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PortSide {
    Left,
    Right,
}

/// A connection point, identified by owning node and side. Ports are
/// never stored; their pixel position is computed on demand from the
/// node's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortRef {
    pub node_id: NodeId,
    pub side: PortSide,
}

impl PortRef {
    pub const fn new(node_id: NodeId, side: PortSide) -> Self {
        Self { node_id, side }
    }
}

/// One placed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub value: f64,
    /// Top-left corner, always a multiple of the grid cell size.
    pub position: Point,
}

impl Node {
    pub fn width(&self) -> i32 {
        self.kind.spec().width
    }

    pub fn height(&self) -> i32 {
        self.kind.spec().height
    }

    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }

    /// Absolute pixel position of the given port: vertical midpoint of
    /// the body, on the left or right edge. Ground exposes the same two
    /// ports as every other kind.
    pub fn port_position(&self, side: PortSide) -> Point {
        let x = match side {
            PortSide::Left => self.position.x,
            PortSide::Right => self.position.x + self.width(),
        };
        Point::new(x, self.position.y + self.height() / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_table_dimensions() {
        assert_eq!(NodeKind::Resistor.spec().width, 160);
        assert_eq!(NodeKind::Battery.spec().width, 160);
        assert_eq!(NodeKind::Ground.spec().width, 80);
        for kind in NodeKind::ALL {
            assert_eq!(kind.spec().height, 80);
        }
    }

    #[test]
    fn kind_table_defaults_and_units() {
        assert_eq!(NodeKind::Resistor.spec().default_value, 100.0);
        assert_eq!(NodeKind::Resistor.unit(), "Ω");
        assert_eq!(NodeKind::Battery.spec().default_value, 0.0);
        assert_eq!(NodeKind::Battery.unit(), "V");
        assert!(NodeKind::Ground.value_is_fixed());
    }

    #[test]
    fn port_positions_from_geometry() {
        let node = Node {
            id: 1,
            kind: NodeKind::Resistor,
            value: 100.0,
            position: Point::new(240, 80),
        };
        assert_eq!(node.port_position(PortSide::Left), Point::new(240, 120));
        assert_eq!(node.port_position(PortSide::Right), Point::new(400, 120));
    }

    #[test]
    fn ground_ports_match_square_body() {
        let node = Node {
            id: 4,
            kind: NodeKind::Ground,
            value: 0.0,
            position: Point::new(480, 140),
        };
        assert_eq!(node.port_position(PortSide::Left), Point::new(480, 180));
        assert_eq!(node.port_position(PortSide::Right), Point::new(560, 180));
    }
}
