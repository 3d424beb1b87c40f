use std::{borrow::Cow, fmt};

use crate::types::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, error::DatabaseError};

// Text columns reserve one extra byte for the NUL terminator
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE + 1;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE + 1;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/*
 * Serialized Row Layout (293 bytes)
 * ┌──────────┬──────────────────────────┬────────────────────────────┐
 * │ id (4)   │ username (32 + NUL)      │ email (255 + NUL)          │
 * │ offset 0 │ offset 4                 │ offset 37                  │
 * └──────────┴──────────────────────────┴────────────────────────────┘
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    username: [u8; USERNAME_SIZE],
    email: [u8; EMAIL_SIZE],
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            id,
            username: Self::text_column("username", username, COLUMN_USERNAME_SIZE)?,
            email: Self::text_column("email", email, COLUMN_EMAIL_SIZE)?,
        })
    }

    fn text_column<const N: usize>(
        field: &'static str,
        text: &str,
        max: usize,
    ) -> Result<[u8; N], DatabaseError> {
        let bytes = text.as_bytes();
        if bytes.len() > max {
            return Err(DatabaseError::FieldTooLong {
                field,
                max,
                actual: bytes.len(),
            });
        }
        let mut column = [0u8; N];
        column[..bytes.len()].copy_from_slice(bytes);
        Ok(column)
    }

    pub fn username(&self) -> Cow<'_, str> {
        Self::until_nul(&self.username)
    }

    pub fn email(&self) -> Cow<'_, str> {
        Self::until_nul(&self.email)
    }

    fn until_nul(column: &[u8]) -> Cow<'_, str> {
        let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
        String::from_utf8_lossy(&column[..end])
    }

    /// Writes the packed representation into `dest`, which must hold at least
    /// `ROW_SIZE` bytes. Lengths are not checked here; `Row::new` already did.
    pub fn serialize(&self, dest: &mut [u8]) {
        dest[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        dest[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE].copy_from_slice(&self.username);
        dest[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE].copy_from_slice(&self.email);
    }

    pub fn deserialize(src: &[u8]) -> Self {
        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&src[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        let mut username = [0u8; USERNAME_SIZE];
        username.copy_from_slice(&src[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);

        let mut email = [0u8; EMAIL_SIZE];
        email.copy_from_slice(&src[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);

        Self {
            id: u32::from_le_bytes(id),
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}
