pub mod error;
pub mod page;
pub mod row;

// Common type aliases
pub type PageNum = u32;
pub type Key = u32;

// Pages are the unit of both file I/O and caching
pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;

// Logical column limits, not counting the NUL terminator
pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;
