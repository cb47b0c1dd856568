use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Store unreachable or credentials rejected.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query `{query}` failed: {message}")]
    Query { query: String, message: String },

    /// The store answered but a row did not fit the expected record shape.
    /// `statement` names the operation, `query` is the Cypher that ran.
    #[error("could not decode rows of `{statement}`: {message}\n{query}")]
    Decode {
        statement: &'static str,
        query: String,
        message: String,
    },
}

impl StoreError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
