use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};

use log::{debug, info};

use crate::types::{
    PAGE_SIZE, PageNum, TABLE_MAX_PAGES,
    error::{DatabaseError, Result},
    page::Page,
};

/// Maps page numbers to cached page buffers backed by a single file.
///
/// Page `i` lives at byte offset `i * PAGE_SIZE`. Pages are loaded on first
/// access and stay cached until `close`.
pub struct Pager {
    file: File,
    file_length: u64,
    num_pages: u32,
    pages: [Option<Box<Page>>; TABLE_MAX_PAGES],
}

impl Pager {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let file_length = file.metadata()?.len();
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(DatabaseError::CorruptFile { file_length });
        }
        let num_pages = (file_length / PAGE_SIZE as u64) as u32;
        info!(
            "Opened database at {} ({} bytes, {} pages)",
            path.display(),
            file_length,
            num_pages
        );

        Ok(Self {
            file,
            file_length,
            num_pages,
            pages: std::array::from_fn(|_| None),
        })
    }

    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Highest page index touched so far, plus one.
    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn is_cached(&self, page_num: PageNum) -> bool {
        self.pages
            .get(page_num as usize)
            .is_some_and(|slot| slot.is_some())
    }

    fn page_offset(page_num: PageNum) -> u64 {
        page_num as u64 * PAGE_SIZE as u64
    }

    pub fn get_page(&mut self, page_num: PageNum) -> Result<&mut Page> {
        let index = page_num as usize;
        if index >= TABLE_MAX_PAGES {
            return Err(DatabaseError::OutOfBounds {
                page_num,
                max: TABLE_MAX_PAGES,
            });
        }

        let page = match self.pages[index].take() {
            Some(page) => page,
            None => self.load_page(page_num)?,
        };
        Ok(&mut **self.pages[index].insert(page))
    }

    fn load_page(&mut self, page_num: PageNum) -> Result<Box<Page>> {
        // Pages past the end of the file start out zeroed
        let mut page = Box::new(Page::new());
        let pages_on_disk = self.file_length / PAGE_SIZE as u64;
        if (page_num as u64) < pages_on_disk {
            debug!("Cache miss, reading page {} from disk", page_num);
            self.file.seek(SeekFrom::Start(Self::page_offset(page_num)))?;
            self.file.read_exact(page.as_bytes_mut())?;
        } else {
            debug!("Cache miss, allocating fresh page {}", page_num);
        }

        if page_num >= self.num_pages {
            self.num_pages = page_num + 1;
        }
        Ok(page)
    }

    pub fn flush(&mut self, page_num: PageNum) -> Result<()> {
        let page = self
            .pages
            .get(page_num as usize)
            .and_then(|slot| slot.as_deref())
            .ok_or(DatabaseError::NullPageFlush { page_num })?;

        debug!("Flushing page {}", page_num);
        self.file.seek(SeekFrom::Start(Self::page_offset(page_num)))?;
        self.file.write_all(page.as_bytes())?;

        let end = Self::page_offset(page_num) + PAGE_SIZE as u64;
        if end > self.file_length {
            self.file_length = end;
        }
        Ok(())
    }

    /// Flushes every cached page, releases the buffers and closes the file.
    pub fn close(mut self) -> Result<()> {
        for page_num in 0..self.num_pages {
            if !self.is_cached(page_num) {
                continue;
            }
            self.flush(page_num)?;
            self.pages[page_num as usize] = None;
        }

        self.file.flush()?;
        self.file.sync_all()?;
        info!("Closed database ({} pages)", self.num_pages);
        Ok(())
    }
}
