//! Line-oriented editor scripts: one event per line, replayed against
//! the core in delivery order.
//!
//! Grammar (blank lines and `#` comments are skipped):
//!
//! ```text
//! add resistor|battery|ground
//! value <id> <raw>
//! move <id> <x> <y>
//! remove <id>
//! port <id> left|right
//! click <x> <y>
//! pointer <x> <y>
//! cancel
//! ```

use thiserror::Error;
use wiregrid::prelude::*;

/// One parsed editor event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(NodeKind),
    Value(NodeId, String),
    Move(NodeId, i32, i32),
    Remove(NodeId),
    Port(NodeId, PortSide),
    Click(Point),
    Pointer(Point),
    Cancel,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: {message}")]
    BadArguments { line: usize, message: String },
}

/// Parse a whole script. Line numbers in errors are 1-based.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let mut words = text.split_whitespace();
    let head = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let bad = |message: String| ScriptError::BadArguments { line, message };

    let command = match head {
        "add" => {
            let kind = match rest.as_slice() {
                ["resistor"] => NodeKind::Resistor,
                ["battery"] => NodeKind::Battery,
                ["ground"] => NodeKind::Ground,
                _ => return Err(bad(format!("expected `add <kind>`, got `{text}`"))),
            };
            Command::Add(kind)
        }
        "value" => match rest.as_slice() {
            [id, raw] => Command::Value(parse_id(line, id)?, (*raw).to_string()),
            _ => return Err(bad("expected `value <id> <raw>`".into())),
        },
        "move" => match rest.as_slice() {
            [id, x, y] => Command::Move(
                parse_id(line, id)?,
                parse_coord(line, x)?,
                parse_coord(line, y)?,
            ),
            _ => return Err(bad("expected `move <id> <x> <y>`".into())),
        },
        "remove" => match rest.as_slice() {
            [id] => Command::Remove(parse_id(line, id)?),
            _ => return Err(bad("expected `remove <id>`".into())),
        },
        "port" => match rest.as_slice() {
            [id, "left"] => Command::Port(parse_id(line, id)?, PortSide::Left),
            [id, "right"] => Command::Port(parse_id(line, id)?, PortSide::Right),
            _ => return Err(bad("expected `port <id> left|right`".into())),
        },
        "click" => match rest.as_slice() {
            [x, y] => Command::Click(Point::new(parse_coord(line, x)?, parse_coord(line, y)?)),
            _ => return Err(bad("expected `click <x> <y>`".into())),
        },
        "pointer" => match rest.as_slice() {
            [x, y] => Command::Pointer(Point::new(parse_coord(line, x)?, parse_coord(line, y)?)),
            _ => return Err(bad("expected `pointer <x> <y>`".into())),
        },
        "cancel" => {
            if !rest.is_empty() {
                return Err(bad("`cancel` takes no arguments".into()));
            }
            Command::Cancel
        }
        word => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: word.to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn parse_id(line: usize, word: &str) -> Result<NodeId, ScriptError> {
    word.parse().map_err(|_| ScriptError::BadArguments {
        line,
        message: format!("`{word}` is not a node id"),
    })
}

fn parse_coord(line: usize, word: &str) -> Result<i32, ScriptError> {
    word.parse().map_err(|_| ScriptError::BadArguments {
        line,
        message: format!("`{word}` is not a coordinate"),
    })
}

/// Replay parsed commands against an editor, in order.
pub fn apply(editor: &mut SchematicEditor, commands: &[Command]) {
    for command in commands {
        match command {
            Command::Add(kind) => {
                editor.add_node(*kind);
            }
            Command::Value(id, raw) => editor.update_value(*id, raw),
            Command::Move(id, x, y) => editor.move_node(*id, *x, *y),
            Command::Remove(id) => editor.remove_node(*id),
            Command::Port(id, side) => editor.port_click(*id, *side),
            Command::Click(point) => editor.canvas_click(*point),
            Command::Pointer(point) => editor.pointer_move(*point),
            Command::Cancel => editor.cancel_draw(),
        }
    }
}
