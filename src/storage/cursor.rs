use crate::{
    storage::table::Table,
    types::{
        Key, PageNum,
        error::{DatabaseError, Result},
        page::Page,
        row::Row,
    },
};

/// A position in the table: a cell of a leaf page.
///
/// Cursors borrow the table mutably, so only one is alive at a time. They
/// never leave the page they start on.
pub struct Cursor<'a> {
    table: &'a mut Table,
    page_num: PageNum,
    cell_num: u32,
    end_of_table: bool,
}

impl<'a> Cursor<'a> {
    pub fn start(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num();
        let num_cells = table.root_page()?.num_cells();
        Ok(Self {
            table,
            page_num,
            cell_num: 0,
            end_of_table: num_cells == 0,
        })
    }

    /// Positioned one past the last cell.
    pub fn end(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num();
        let num_cells = table.root_page()?.num_cells();
        Ok(Self {
            table,
            page_num,
            cell_num: num_cells,
            end_of_table: true,
        })
    }

    /// Positioned at the cell holding `key`, or where `key` would be inserted.
    pub fn find(table: &'a mut Table, key: Key) -> Result<Self> {
        let page_num = table.root_page_num();
        let page = table.root_page()?;
        let num_cells = page.num_cells();
        let cell_num = page.find_cell(key);
        Ok(Self {
            table,
            page_num,
            cell_num,
            end_of_table: cell_num >= num_cells,
        })
    }

    pub fn page_num(&self) -> PageNum {
        self.page_num
    }

    pub fn cell_num(&self) -> u32 {
        self.cell_num
    }

    pub fn is_end_of_table(&self) -> bool {
        self.end_of_table
    }

    fn page(&mut self) -> Result<&mut Page> {
        self.table.pager().get_page(self.page_num)
    }

    /// Key at the cursor, if it points at a stored cell.
    pub fn key(&mut self) -> Result<Option<Key>> {
        let cell_num = self.cell_num;
        let page = self.page()?;
        Ok((cell_num < page.num_cells()).then(|| page.key(cell_num)))
    }

    /// Serialized row at the cursor, borrowed from the page cache. Fails at
    /// end of table, where there is no stored cell to read.
    pub fn value(&mut self) -> Result<&[u8]> {
        let page_num = self.page_num;
        let cell_num = self.cell_num;
        let page = self.page()?;
        let num_cells = page.num_cells();
        if cell_num >= num_cells {
            return Err(DatabaseError::CellOutOfRange {
                page_num,
                cell_num,
                num_cells,
            });
        }
        Ok(page.value(cell_num))
    }

    pub fn row(&mut self) -> Result<Row> {
        Ok(Row::deserialize(self.value()?))
    }

    pub fn advance(&mut self) -> Result<()> {
        let num_cells = self.page()?.num_cells();
        if self.cell_num < num_cells {
            self.cell_num += 1;
        }
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }
        Ok(())
    }

    /// Moves back to the first cell of the page.
    pub fn rewind(&mut self) -> Result<()> {
        let num_cells = self.page()?.num_cells();
        self.cell_num = 0;
        self.end_of_table = num_cells == 0;
        Ok(())
    }

    /// Inserts `(key, row)` at the cursor's cell, shifting later cells right.
    ///
    /// The cursor must sit at the sorted position for `key`; `Table::find`
    /// and `Table::end` (for increasing keys) both give one.
    pub fn insert(&mut self, key: Key, row: &Row) -> Result<()> {
        let page_num = self.page_num;
        let cell_num = self.cell_num;
        let page = self.page()?;
        let num_cells = page.num_cells();
        if cell_num > num_cells {
            return Err(DatabaseError::CellOutOfRange {
                page_num,
                cell_num,
                num_cells,
            });
        }
        if page.is_full() {
            return Err(DatabaseError::LeafFull { page_num });
        }
        page.insert_cell(cell_num, key, row);
        Ok(())
    }
}
