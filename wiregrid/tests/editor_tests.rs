//! End-to-end scenarios and invariant checks against the editor facade.

use wiregrid::prelude::*;
use wiregrid::route::is_orthogonal;
use wiregrid::DEFAULT_CELL_SIZE;

#[test]
fn scenario_a_two_click_auto_wire() {
    let mut ed = SchematicEditor::default();
    let battery = ed.add_node(NodeKind::Battery);
    let resistor = ed.add_node(NodeKind::Resistor);

    assert_eq!((battery, resistor), (1, 2));
    assert_eq!(ed.node(1).unwrap().value, 0.0);
    assert_eq!(ed.node(2).unwrap().value, 100.0);

    ed.port_click(1, PortSide::Right);
    ed.port_click(2, PortSide::Left);

    let wires: Vec<_> = ed.wire_graph().wires().collect();
    assert_eq!(wires.len(), 1);
    let wire = wires[0];
    assert!(wire.waypoints.is_empty());
    assert_eq!(wire.source, PortRef::new(1, PortSide::Right));
    assert_eq!(wire.target, PortRef::new(2, PortSide::Left));
}

#[test]
fn scenario_b_wire_through_picked_corners() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    let b = ed.add_node(NodeKind::Resistor);

    ed.port_click(a, PortSide::Right);
    ed.canvas_click(Point::new(300, 100));
    ed.canvas_click(Point::new(300, 200));
    ed.port_click(b, PortSide::Left);

    let wire = ed.wire_graph().wires().next().unwrap();
    assert_eq!(
        wire.waypoints,
        vec![Point::new(300, 100), Point::new(300, 200)]
    );

    // Manual mode renders exactly source -> corners -> target.
    let view = &ed.wire_views()[0];
    assert!(view.manual);
    assert_eq!(view.path.len(), 4);
    assert_eq!(view.path[1], Point::new(300, 100));
    assert_eq!(view.path[2], Point::new(300, 200));
}

#[test]
fn scenario_c_node_removal_cascades() {
    let mut ed = SchematicEditor::default();
    ed.add_node(NodeKind::Battery);
    ed.add_node(NodeKind::Battery);
    let resistor = ed.add_node(NodeKind::Resistor);
    let ground = ed.add_node(NodeKind::Ground);
    assert_eq!((resistor, ground), (3, 4));

    ed.move_node(resistor, 240, 80);
    ed.move_node(ground, 480, 140);

    ed.port_click(resistor, PortSide::Right);
    ed.port_click(ground, PortSide::Left);
    assert_eq!(ed.wire_count(), 1);

    let nodes_before = ed.node_count();
    ed.remove_node(resistor);
    assert_eq!(ed.wire_count(), 0);
    assert_eq!(ed.node_count(), nodes_before - 1);
}

#[test]
fn scenario_d_cancel_leaves_graph_untouched() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    ed.add_node(NodeKind::Resistor);

    ed.port_click(a, PortSide::Right);
    assert!(ed.is_drawing());
    ed.cancel_draw();

    assert!(!ed.is_drawing());
    assert_eq!(ed.wire_count(), 0);
}

#[test]
fn grid_alignment_holds_after_arbitrary_edits() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    let b = ed.add_node(NodeKind::Resistor);
    let c = ed.add_node(NodeKind::Ground);

    ed.move_node(a, 113, 557);
    ed.move_node(b, -31, 289);
    ed.move_node(c, 480, 141);
    ed.move_node(a, 113, 557);

    ed.port_click(b, PortSide::Right);
    ed.canvas_click(Point::new(301, 99));
    ed.canvas_click(Point::new(299, 201));
    ed.port_click(c, PortSide::Left);

    for node in ed.nodes() {
        assert!(node.position.is_aligned(DEFAULT_CELL_SIZE), "{node:?}");
    }
    for wire in ed.wire_graph().wires() {
        for corner in &wire.waypoints {
            assert!(corner.is_aligned(DEFAULT_CELL_SIZE), "{corner:?}");
        }
    }
}

#[test]
fn cascade_integrity_for_every_incident_wire() {
    let mut ed = SchematicEditor::default();
    let hub = ed.add_node(NodeKind::Battery);
    let spokes: Vec<_> = (0..4).map(|_| ed.add_node(NodeKind::Resistor)).collect();

    for &spoke in &spokes {
        ed.port_click(hub, PortSide::Right);
        ed.port_click(spoke, PortSide::Left);
    }
    // One wire not touching the hub.
    ed.port_click(spokes[0], PortSide::Right);
    ed.port_click(spokes[1], PortSide::Left);
    assert_eq!(ed.wire_count(), 5);

    ed.remove_node(hub);
    assert_eq!(ed.wire_count(), 1);
    for wire in ed.wire_graph().wires() {
        assert_ne!(wire.source.node_id, hub);
        assert_ne!(wire.target.node_id, hub);
    }
}

#[test]
fn path_endpoint_fidelity_both_modes() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    let b = ed.add_node(NodeKind::Resistor);
    ed.move_node(a, 100, 300);
    ed.move_node(b, 400, 100);

    // Auto.
    ed.port_click(a, PortSide::Right);
    ed.port_click(b, PortSide::Left);
    // Manual.
    ed.port_click(b, PortSide::Right);
    ed.canvas_click(Point::new(620, 300));
    ed.port_click(a, PortSide::Left);

    for view in ed.wire_views() {
        let src = ed.registry().port_position(view.source);
        let dst = ed.registry().port_position(view.target);
        assert_eq!(view.path.first(), Some(&src));
        assert_eq!(view.path.last(), Some(&dst));
        if !view.manual {
            assert!(is_orthogonal(&view.path));
        }
    }
}

#[test]
fn idempotent_move_leaves_state_identical() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    ed.move_node(a, 247, 93);
    let pos = ed.node(a).unwrap().position;
    let rev = ed.revision();

    ed.move_node(a, 247, 93);
    assert_eq!(ed.node(a).unwrap().position, pos);
    assert_eq!(ed.revision(), rev);
}

#[test]
fn auto_routes_recompute_after_node_moves() {
    let mut ed = SchematicEditor::default();
    let a = ed.add_node(NodeKind::Battery);
    let b = ed.add_node(NodeKind::Resistor);
    ed.move_node(a, 100, 300);
    ed.move_node(b, 400, 100);

    ed.port_click(a, PortSide::Right);
    ed.port_click(b, PortSide::Left);
    let before = ed.wire_views()[0].path.clone();

    ed.move_node(b, 600, 200);
    let after = ed.wire_views()[0].path.clone();
    assert_ne!(before, after);
    assert_eq!(
        *after.last().unwrap(),
        ed.registry().port_position(PortRef::new(b, PortSide::Left))
    );
}

#[test]
fn netlist_reflects_the_live_graph() {
    let mut ed = SchematicEditor::default();
    let battery = ed.add_node(NodeKind::Battery);
    let resistor = ed.add_node(NodeKind::Resistor);
    let ground = ed.add_node(NodeKind::Ground);

    ed.port_click(battery, PortSide::Right);
    ed.port_click(resistor, PortSide::Left);
    ed.port_click(resistor, PortSide::Right);
    ed.port_click(ground, PortSide::Left);

    let netlist = ed.netlist();
    assert_eq!(netlist.stats().net_count, 2);
    assert_eq!(
        netlist.find_path(battery, ground),
        Some(vec![battery, resistor, ground])
    );

    ed.remove_node(resistor);
    let netlist = ed.netlist();
    assert_eq!(netlist.stats().net_count, 0);
    assert_eq!(netlist.find_path(battery, ground), None);
}
