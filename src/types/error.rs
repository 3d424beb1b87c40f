use thiserror::Error;

use crate::types::{Key, PageNum};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Db file is not a whole number of pages (length: {file_length}). Corrupt file.")]
    CorruptFile { file_length: u64 },

    #[error("Tried to fetch page number out of bounds. {page_num} >= {max}")]
    OutOfBounds { page_num: PageNum, max: usize },

    #[error("Tried to flush null page {page_num}")]
    NullPageFlush { page_num: PageNum },

    #[error("Leaf node full (page_num: {page_num})")]
    LeafFull { page_num: PageNum },

    #[error("Cell {cell_num} is out of range for page {page_num} with {num_cells} cells")]
    CellOutOfRange {
        page_num: PageNum,
        cell_num: u32,
        num_cells: u32,
    },

    #[error("Duplicate key {key}")]
    DuplicateKey { key: Key },

    #[error("Invalid page type: {0}")]
    InvalidPageType(u8),

    #[error("Column '{field}' is too long: {actual} bytes (max: {max})")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl DatabaseError {
    /// Errors the REPL reports and survives. Everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DatabaseError::LeafFull { .. } | DatabaseError::DuplicateKey { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
