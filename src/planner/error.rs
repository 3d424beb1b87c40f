#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrepareError {
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,
    #[error("String is too long.")]
    StringTooLong,
    #[error("ID must be positive.")]
    NegativeId,
}
