use crate::{
    planner::{error::PrepareError, types::Statement},
    types::{error::DatabaseError, row::Row},
};

pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    pub fn prepare(&self, input: &str) -> Result<Statement, PrepareError> {
        let input = input.trim();
        if input.starts_with("insert") {
            return self.prepare_insert(input);
        }
        if input == "select" {
            return Ok(Statement::Select);
        }
        Err(PrepareError::UnrecognizedStatement(input.to_string()))
    }

    fn prepare_insert(&self, input: &str) -> Result<Statement, PrepareError> {
        let mut tokens = input.split_whitespace();
        let _keyword = tokens.next();
        let (Some(id), Some(username), Some(email)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(PrepareError::SyntaxError);
        };

        let id: i64 = id.parse().map_err(|_| PrepareError::SyntaxError)?;
        if id < 0 {
            return Err(PrepareError::NegativeId);
        }
        let id = u32::try_from(id).map_err(|_| PrepareError::SyntaxError)?;

        let row = Row::new(id, username, email).map_err(|err| match err {
            DatabaseError::FieldTooLong { .. } => PrepareError::StringTooLong,
            _ => PrepareError::SyntaxError,
        })?;
        Ok(Statement::Insert(row))
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
