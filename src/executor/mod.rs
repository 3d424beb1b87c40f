pub mod insert;
pub mod scan;

use crate::{
    executor::{
        insert::{Inserter, TableInserter},
        scan::{ScanIterator, TableScanner},
    },
    planner::types::Statement,
    storage::table::Table,
    types::{error::Result, row::Row},
};

#[derive(Debug, PartialEq, Eq)]
pub enum ExecuteResult {
    Inserted,
    Rows(Vec<Row>),
}

pub fn execute(statement: &Statement, table: &mut Table) -> Result<ExecuteResult> {
    match statement {
        Statement::Insert(row) => execute_insert(row, table),
        Statement::Select => execute_select(table),
    }
}

pub fn execute_insert(row: &Row, table: &mut Table) -> Result<ExecuteResult> {
    TableInserter::new(table).insert(row)?;
    Ok(ExecuteResult::Inserted)
}

pub fn execute_select(table: &mut Table) -> Result<ExecuteResult> {
    let rows = ScanIterator::new(TableScanner::new(table)?).collect::<Result<Vec<_>>>()?;
    Ok(ExecuteResult::Rows(rows))
}
