use std::path::Path;

use log::{debug, info};

use crate::{
    storage::{cursor::Cursor, pager::Pager},
    types::{Key, PageNum, error::Result, page::Page},
};

/// The single table of a database file. The tree is one leaf page rooted at
/// page 0.
pub struct Table {
    pager: Pager,
    root_page_num: PageNum,
}

impl Table {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut pager = Pager::open(path)?;
        let root_page_num = 0;

        if pager.num_pages() == 0 {
            debug!("Empty database file, initializing root leaf");
            let root = pager.get_page(root_page_num)?;
            root.initialize_leaf();
            root.set_root(true);
        }

        Ok(Self {
            pager,
            root_page_num,
        })
    }

    /// Flushes every cached page and closes the file. Consuming `self` keeps
    /// the table from being used after close.
    pub fn close(self) -> Result<()> {
        info!("Closing table");
        self.pager.close()
    }

    pub fn root_page_num(&self) -> PageNum {
        self.root_page_num
    }

    pub fn pager(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn root_page(&mut self) -> Result<&mut Page> {
        self.pager.get_page(self.root_page_num)
    }

    pub fn num_rows(&mut self) -> Result<u32> {
        Ok(self.root_page()?.num_cells())
    }

    /// Keys of the root leaf in cell order, for the `.btree` listing.
    pub fn leaf_keys(&mut self) -> Result<Vec<Key>> {
        Ok(self.root_page()?.keys().collect())
    }

    pub fn start(&mut self) -> Result<Cursor<'_>> {
        Cursor::start(self)
    }

    pub fn end(&mut self) -> Result<Cursor<'_>> {
        Cursor::end(self)
    }

    pub fn find(&mut self, key: Key) -> Result<Cursor<'_>> {
        Cursor::find(self, key)
    }
}
