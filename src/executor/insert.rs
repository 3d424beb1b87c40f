use log::warn;

use crate::{
    storage::table::Table,
    types::{
        error::{DatabaseError, Result},
        row::Row,
    },
};

/// Trait for inserting rows into the table
pub trait Inserter {
    /// Insert a single row keyed by its id
    fn insert(&mut self, row: &Row) -> Result<()>;

    /// Insert rows in order, stopping at the first failure
    fn insert_batch(&mut self, rows: &[Row]) -> Result<()>;
}

/// Inserts rows into the root leaf at their sorted position
pub struct TableInserter<'a> {
    table: &'a mut Table,
}

impl<'a> TableInserter<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self { table }
    }
}

impl Inserter for TableInserter<'_> {
    fn insert(&mut self, row: &Row) -> Result<()> {
        let key = row.id;
        let page_num = self.table.root_page_num();
        if self.table.root_page()?.is_full() {
            warn!("Rejecting key {}: leaf page {} is full", key, page_num);
            return Err(DatabaseError::LeafFull { page_num });
        }

        let mut cursor = self.table.find(key)?;
        if cursor.key()? == Some(key) {
            warn!("Rejecting duplicate key {}", key);
            return Err(DatabaseError::DuplicateKey { key });
        }
        cursor.insert(key, row)
    }

    fn insert_batch(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            self.insert(row)?;
        }
        Ok(())
    }
}
