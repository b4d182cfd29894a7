//! Demo session: build a small circuit through the event API and print
//! what a renderer would see.

use wiregrid::prelude::*;

fn main() {
    let mut editor = SchematicEditor::default();

    let battery = editor.add_node(NodeKind::Battery);
    let resistor = editor.add_node(NodeKind::Resistor);
    let ground = editor.add_node(NodeKind::Ground);

    editor.update_value(battery, "9");
    editor.update_value(resistor, "470");
    editor.move_node(battery, 100, 300);
    editor.move_node(resistor, 400, 100);
    editor.move_node(ground, 400, 400);

    // Two-click auto-routed wire.
    editor.port_click(battery, PortSide::Right);
    editor.port_click(resistor, PortSide::Left);

    // Wire with user-picked corners.
    editor.port_click(resistor, PortSide::Right);
    editor.canvas_click(Point::new(640, 140));
    editor.canvas_click(Point::new(640, 440));
    editor.port_click(ground, PortSide::Right);

    println!("Nodes:");
    for node in editor.nodes() {
        println!(
            "  #{} {:?} {} {} at ({}, {})",
            node.id, node.kind, node.value, node.unit, node.position.x, node.position.y
        );
    }

    println!("Wires:");
    for wire in editor.wire_views() {
        let mode = if wire.manual { "manual" } else { "auto" };
        let path: Vec<String> = wire
            .path
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        println!("  [{}] {}", mode, path.join(" -> "));
    }

    println!("Nets:");
    let netlist = editor.netlist();
    for net in netlist.nets() {
        let ports: Vec<String> = net
            .ports
            .iter()
            .map(|p| format!("{}.{:?}", p.node_id, p.side))
            .collect();
        println!("  {}: {}", net.name, ports.join(", "));
    }
    println!(
        "{} nodes, {} wires, {} nets (revision {})",
        editor.node_count(),
        editor.wire_count(),
        netlist.stats().net_count,
        editor.revision()
    );
}
