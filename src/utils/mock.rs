use std::path::PathBuf;

use tempfile::TempDir;

use crate::{
    storage::table::Table,
    types::{error::DatabaseError, row::Row},
};

/// A database file inside its own temporary directory, removed on drop.
pub struct TempDatabase {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self::with_prefix("pacul_test")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .expect("Failed to create temp dir");
        let path = dir.path().join(format!("{}.db", prefix));
        Self { path, _dir: dir }
    }

    pub fn open_table(&self) -> Result<Table, DatabaseError> {
        Table::open(&self.path)
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_user_row(id: u32) -> Row {
    Row::new(id, &format!("user{}", id), &format!("user{}@example.com", id))
        .expect("Generated row fits the column limits")
}
