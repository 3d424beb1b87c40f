pub mod meta;

use std::io::Write;

use log::warn;

use crate::{
    executor::{ExecuteResult, execute},
    planner::parser::StatementParser,
    repl::meta::{MetaCommand, render_constants, render_tree},
    storage::table::Table,
    types::error::{DatabaseError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Runs one input line against the table, writing user-facing output to
/// `out`. Only fatal storage errors are returned; the caller ends the
/// session on them.
pub fn run_line<W: Write>(
    line: &str,
    table: &mut Table,
    parser: &StatementParser,
    out: &mut W,
) -> Result<Control> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Control::Continue);
    }

    if line.starts_with('.') {
        match MetaCommand::parse(line) {
            Some(MetaCommand::Exit) => return Ok(Control::Exit),
            Some(MetaCommand::BTree) => write!(out, "{}", render_tree(table)?)?,
            Some(MetaCommand::Constants) => write!(out, "{}", render_constants())?,
            None => writeln!(out, "Unrecognized command '{}'", line)?,
        }
        return Ok(Control::Continue);
    }

    let statement = match parser.prepare(line) {
        Ok(statement) => statement,
        Err(err) => {
            writeln!(out, "{}", err)?;
            return Ok(Control::Continue);
        }
    };

    match execute(&statement, table) {
        Ok(ExecuteResult::Inserted) => {}
        Ok(ExecuteResult::Rows(rows)) => {
            for row in rows {
                writeln!(out, "{}", row)?;
            }
        }
        Err(err) if err.is_recoverable() => {
            warn!("{}", err);
            writeln!(out, "{}", user_message(&err))?;
            return Ok(Control::Continue);
        }
        Err(err) => return Err(err),
    }
    writeln!(out, "Executed.")?;
    Ok(Control::Continue)
}

fn user_message(err: &DatabaseError) -> String {
    match err {
        DatabaseError::LeafFull { .. } => "Error: Table full.".to_string(),
        DatabaseError::DuplicateKey { .. } => "Error: Duplicate key.".to_string(),
        other => format!("Error: {}", other),
    }
}
