use crate::{
    storage::{cursor::Cursor, table::Table},
    types::{error::Result, row::Row},
};

pub trait Scanner {
    fn scan(&mut self) -> Result<Option<Row>>;
    fn scan_batch(&mut self, batch_size: usize) -> Result<Vec<Row>>;
    fn reset(&mut self) -> Result<()>;
}

pub struct ScanIterator<S: Scanner> {
    scanner: S,
}

impl<S: Scanner> ScanIterator<S> {
    pub fn new(scanner: S) -> Self {
        Self { scanner }
    }
}

impl<S: Scanner> Iterator for ScanIterator<S> {
    type Item = Result<Row>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.scanner.scan() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Walks the table in key order with a cursor from the first cell.
pub struct TableScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> TableScanner<'a> {
    pub fn new(table: &'a mut Table) -> Result<Self> {
        Ok(Self {
            cursor: Cursor::start(table)?,
        })
    }
}

impl Scanner for TableScanner<'_> {
    fn scan(&mut self) -> Result<Option<Row>> {
        if self.cursor.is_end_of_table() {
            return Ok(None);
        }
        let row = self.cursor.row()?;
        self.cursor.advance()?;
        Ok(Some(row))
    }

    fn scan_batch(&mut self, batch_size: usize) -> Result<Vec<Row>> {
        let mut rows = Vec::with_capacity(batch_size);
        while rows.len() < batch_size {
            match self.scan()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor.rewind()
    }
}
