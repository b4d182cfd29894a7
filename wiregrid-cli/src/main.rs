//! Wiregrid CLI - replay schematic editor sessions from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use wiregrid::editor::{DraftView, NodeView, WireView};
use wiregrid::prelude::*;

mod script;

#[derive(Parser)]
#[command(name = "wiregrid")]
#[command(about = "Schematic editor session replay tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an editor script and print the resulting document
    Run {
        /// Path to the script file (one editor event per line)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the component kinds the editor can place
    Kinds,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for tooling
    Json,
}

/// Everything a renderer or reporting panel would read after a session.
#[derive(Serialize)]
struct Document {
    nodes: Vec<NodeView>,
    wires: Vec<WireView>,
    draft: Option<DraftView>,
    nets: Vec<Net>,
    revision: u64,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run { script, format } => run_script(&script, format),
        Commands::Kinds => {
            print_kinds();
            0
        }
    };
    process::exit(exit_code);
}

fn run_script(path: &PathBuf, format: OutputFormat) -> i32 {
    let input = match std::fs::read_to_string(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            return 2;
        }
    };

    let commands = match script::parse_script(&input) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("error: {}: {}", path.display(), e);
            return 1;
        }
    };

    let mut editor = SchematicEditor::default();
    script::apply(&mut editor, &commands);

    let document = Document {
        nodes: editor.nodes(),
        wires: editor.wire_views(),
        draft: editor.draft(),
        nets: editor.netlist().nets(),
        revision: editor.revision(),
    };

    match format {
        OutputFormat::Human => print_human(&document),
        OutputFormat::Json => match serde_json::to_string_pretty(&document) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot encode document: {}", e);
                return 2;
            }
        },
    }
    0
}

fn print_human(document: &Document) {
    println!("Nodes ({}):", document.nodes.len());
    for node in &document.nodes {
        println!(
            "  #{} {:?} {} {} at ({}, {}) [{}x{}]",
            node.id,
            node.kind,
            node.value,
            node.unit,
            node.position.x,
            node.position.y,
            node.width,
            node.height
        );
    }

    println!("Wires ({}):", document.wires.len());
    for wire in &document.wires {
        let mode = if wire.manual { "manual" } else { "auto" };
        println!(
            "  {}.{:?} -> {}.{:?} [{}] {}",
            wire.source.node_id,
            wire.source.side,
            wire.target.node_id,
            wire.target.side,
            mode,
            format_path(&wire.path)
        );
    }

    if let Some(draft) = &document.draft {
        println!(
            "Draft: from {}.{:?} {}",
            draft.source.node_id,
            draft.source.side,
            format_path(&draft.preview)
        );
    }

    println!("Nets ({}):", document.nets.len());
    for net in &document.nets {
        let ports: Vec<String> = net
            .ports
            .iter()
            .map(|p| format!("{}.{:?}", p.node_id, p.side))
            .collect();
        println!("  {}: {}", net.name, ports.join(", "));
    }
}

fn format_path(path: &[Point]) -> String {
    let points: Vec<String> = path.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
    points.join(" -> ")
}

fn print_kinds() {
    println!("{:<10} {:>6} {:>7} {:>8} {:>5}", "KIND", "WIDTH", "HEIGHT", "DEFAULT", "UNIT");
    for kind in NodeKind::ALL {
        let spec = kind.spec();
        println!(
            "{:<10} {:>6} {:>7} {:>8} {:>5}",
            format!("{:?}", kind).to_lowercase(),
            spec.width,
            spec.height,
            spec.default_value,
            spec.unit
        );
    }
}
