//! Path synthesis: turning two ports and optional corners into a
//! renderable polyline.
//!
//! Two mutually exclusive modes, selected by whether the wire carries
//! waypoints. Manual mode draws exactly through the recorded corners.
//! Automatic mode ("smart Manhattan") builds an orthogonal route from
//! port stubs and a shared mid column, with one geometric special case
//! for same-side ports on nearby columns.

use serde::{Deserialize, Serialize};

use crate::component::PortSide;
use crate::geometry::Point;

/// Same-side routing kicks in when the two nodes' x-coordinates are
/// within this distance (px).
pub const SAME_SIDE_THRESHOLD: i32 = 100;
/// How far beyond the outermost same-side port the vertical segment is
/// pushed, clearing both component bodies (px).
pub const SAME_SIDE_CLEARANCE: i32 = 60;

/// Everything the synthesizer needs to know about one end of a wire:
/// the resolved port position, which side it faces, and the owning
/// node's x origin (used by the same-side proximity test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAnchor {
    pub port: Point,
    pub side: PortSide,
    pub node_x: i32,
}

impl RouteAnchor {
    pub const fn new(port: Point, side: PortSide, node_x: i32) -> Self {
        Self { port, side, node_x }
    }

    /// Stub point one step outward from the port in its natural
    /// direction.
    fn stub(&self, length: i32) -> Point {
        match self.side {
            PortSide::Left => Point::new(self.port.x - length, self.port.y),
            PortSide::Right => Point::new(self.port.x + length, self.port.y),
        }
    }
}

/// Exact path through user-picked corners: source, corners in click
/// order, target. Segments are not validated as axis-aligned; corners
/// were grid-snapped when recorded and the user is trusted from there.
pub fn manual_path(source: Point, waypoints: &[Point], target: Point) -> Vec<Point> {
    let mut points = Vec::with_capacity(waypoints.len() + 2);
    push_point(&mut points, source);
    for &corner in waypoints {
        push_point(&mut points, corner);
    }
    push_point(&mut points, target);
    points
}

/// Smart Manhattan route between two ports. The stub length is one grid
/// cell; the vertical run sits on the midpoint of the two stub columns.
///
/// When both ports face the same way and the nodes sit on nearby
/// columns, the midpoint formula would cut straight through the
/// component bodies, so the turning column is instead pushed outward
/// beyond the outermost port by a fixed clearance.
pub fn auto_route(source: RouteAnchor, target: RouteAnchor, cell_size: i32) -> Vec<Point> {
    let mut points = Vec::with_capacity(5);
    push_point(&mut points, source.port);

    if source.side == target.side
        && (source.node_x - target.node_x).abs() <= SAME_SIDE_THRESHOLD
    {
        let column = match source.side {
            PortSide::Right => source.port.x.max(target.port.x) + SAME_SIDE_CLEARANCE,
            PortSide::Left => source.port.x.min(target.port.x) - SAME_SIDE_CLEARANCE,
        };
        push_point(&mut points, Point::new(column, source.port.y));
        push_point(&mut points, Point::new(column, target.port.y));
    } else {
        let source_stub = source.stub(cell_size);
        let target_stub = target.stub(cell_size);
        let mid_x = (source_stub.x + target_stub.x) / 2;
        push_point(&mut points, source_stub);
        push_point(&mut points, Point::new(mid_x, source.port.y));
        push_point(&mut points, Point::new(mid_x, target.port.y));
    }

    push_point(&mut points, target.port);
    points
}

/// Append a point, collapsing consecutive duplicates so degenerate
/// zero-length segments never reach the renderer.
fn push_point(points: &mut Vec<Point>, point: Point) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

/// True when every segment of `points` is horizontal or vertical.
pub fn is_orthogonal(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|pair| pair[0].x == pair[1].x || pair[0].y == pair[1].y)
}
