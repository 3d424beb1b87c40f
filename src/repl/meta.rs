use std::fmt::Write;

use crate::{
    storage::table::Table,
    types::{
        error::Result,
        page::{
            COMMON_NODE_HEADER_SIZE, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE,
            LEAF_NODE_MAX_CELLS, LEAF_NODE_SPACE_FOR_CELLS, NodeType,
        },
        row::ROW_SIZE,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    BTree,
    Constants,
}

impl MetaCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            ".exit" => Some(MetaCommand::Exit),
            ".btree" => Some(MetaCommand::BTree),
            ".constants" => Some(MetaCommand::Constants),
            _ => None,
        }
    }
}

pub fn render_tree(table: &mut Table) -> Result<String> {
    let root = table.root_page()?;
    let mut out = String::from("Tree:\n");
    match root.node_type()? {
        NodeType::Leaf => {
            let _ = writeln!(out, "leaf (size {})", root.num_cells());
            for (cell_num, key) in root.keys().enumerate() {
                let _ = writeln!(out, "  - {} : {}", cell_num, key);
            }
        }
        NodeType::Internal => out.push_str("internal\n"),
    }
    Ok(out)
}

pub fn render_constants() -> String {
    let mut out = String::from("Constants:\n");
    let constants = [
        ("ROW_SIZE", ROW_SIZE),
        ("COMMON_NODE_HEADER_SIZE", COMMON_NODE_HEADER_SIZE),
        ("LEAF_NODE_HEADER_SIZE", LEAF_NODE_HEADER_SIZE),
        ("LEAF_NODE_CELL_SIZE", LEAF_NODE_CELL_SIZE),
        ("LEAF_NODE_SPACE_FOR_CELLS", LEAF_NODE_SPACE_FOR_CELLS),
        ("LEAF_NODE_MAX_CELLS", LEAF_NODE_MAX_CELLS),
    ];
    for (name, value) in constants {
        let _ = writeln!(out, "{}: {}", name, value);
    }
    out
}
