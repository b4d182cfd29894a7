//! Net derivation over the wire graph.
//!
//! Read-only support for the analysis/reporting collaborator: ports
//! connected by wires form an electrical net, and path queries between
//! components may additionally travel through component bodies. Nothing
//! here mutates the schematic or solves circuit equations.

use std::collections::HashMap;

use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::component::{NodeId, PortRef, PortSide};
use crate::registry::NodeRegistry;
use crate::wire::WireGraph;

/// How two ports in the connectivity graph are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// The two ports of one component, joined through its body. Used by
    /// path queries, ignored by net grouping.
    Body,
    /// A committed wire.
    Wire,
}

/// One electrical net: the ports a group of wires ties together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Net {
    pub name: String,
    pub ports: Vec<PortRef>,
}

impl Net {
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.ports.iter().any(|p| p.node_id == node_id)
    }
}

/// Summary counts for the reporting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetlistStats {
    pub node_count: usize,
    pub wire_count: usize,
    pub net_count: usize,
}

/// Connectivity view over a snapshot of the registry and wire graph.
#[derive(Debug, Clone)]
pub struct Netlist {
    graph: UnGraph<PortRef, Link>,
    indices: HashMap<PortRef, NodeIndex>,
    node_count: usize,
    wire_count: usize,
}

impl Netlist {
    /// Build the connectivity graph: two port vertices per node, a body
    /// link between them, and one wire link per committed wire. Wires
    /// whose endpoints are stale (node already gone) are skipped; the
    /// editor's cascade makes that unreachable in practice.
    pub fn build(registry: &NodeRegistry, wires: &WireGraph) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut indices = HashMap::new();

        for node in registry.nodes() {
            let left = PortRef::new(node.id, PortSide::Left);
            let right = PortRef::new(node.id, PortSide::Right);
            let li = graph.add_node(left);
            let ri = graph.add_node(right);
            indices.insert(left, li);
            indices.insert(right, ri);
            graph.add_edge(li, ri, Link::Body);
        }

        for wire in wires.wires() {
            let (Some(&a), Some(&b)) = (indices.get(&wire.source), indices.get(&wire.target))
            else {
                tracing::warn!(id = %wire.id, "wire references missing node, skipped");
                continue;
            };
            graph.add_edge(a, b, Link::Wire);
        }

        Self {
            graph,
            indices,
            node_count: registry.len(),
            wire_count: wires.len(),
        }
    }

    /// Group ports into electrical nets by wire connectivity. Ports not
    /// touched by any wire are left out. Net names are `N1`, `N2`, ...
    /// in order of the lowest port they contain, so output is stable.
    pub fn nets(&self) -> Vec<Net> {
        let mut union = UnionFind::new(self.graph.node_count());
        let mut wired = vec![false; self.graph.node_count()];
        for edge in self.graph.edge_references() {
            if matches!(edge.weight(), Link::Wire) {
                union.union(edge.source().index(), edge.target().index());
                wired[edge.source().index()] = true;
                wired[edge.target().index()] = true;
            }
        }

        let mut groups: HashMap<usize, Vec<PortRef>> = HashMap::new();
        for index in self.graph.node_indices() {
            if !wired[index.index()] {
                continue;
            }
            let root = union.find(index.index());
            groups.entry(root).or_default().push(self.graph[index]);
        }

        let mut nets: Vec<Vec<PortRef>> = groups
            .into_values()
            .map(|mut ports| {
                ports.sort();
                ports
            })
            .collect();
        nets.sort();

        nets.into_iter()
            .enumerate()
            .map(|(i, ports)| Net {
                name: format!("N{}", i + 1),
                ports,
            })
            .collect()
    }

    /// True when the two ports share an electrical net.
    pub fn on_same_net(&self, a: PortRef, b: PortRef) -> bool {
        self.nets()
            .iter()
            .any(|net| net.ports.contains(&a) && net.ports.contains(&b))
    }

    /// Shortest component path between two nodes, travelling through
    /// wires and component bodies. Returns the node ids visited, in
    /// order, or None when disconnected or unknown.
    pub fn find_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let start = *self.indices.get(&PortRef::new(from, PortSide::Left))?;
        let goal_left = PortRef::new(to, PortSide::Left);
        let goal_right = PortRef::new(to, PortSide::Right);
        self.indices.get(&goal_left)?;

        let (_, path) = astar(
            &self.graph,
            start,
            |n| self.graph[n] == goal_left || self.graph[n] == goal_right,
            |_| 1,
            |_| 0,
        )?;

        let mut node_ids = Vec::new();
        for index in path {
            let id = self.graph[index].node_id;
            if node_ids.last() != Some(&id) {
                node_ids.push(id);
            }
        }
        Some(node_ids)
    }

    pub fn stats(&self) -> NetlistStats {
        NetlistStats {
            node_count: self.node_count,
            wire_count: self.wire_count,
            net_count: self.nets().len(),
        }
    }
}
