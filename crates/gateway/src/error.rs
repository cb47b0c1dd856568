use infra::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Store unreachable or credentials rejected. Fatal for the session.
    #[error("graph store unavailable: {0}")]
    Connection(String),

    #[error("query failed: {message}\n{query}")]
    Query { query: String, message: String },

    /// Ad-hoc query tried to write.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl GatewayError {
    pub fn is_connection(&self) -> bool {
        matches!(self, GatewayError::Connection(_))
    }
}

impl From<StoreError> for GatewayError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Connection(detail) => GatewayError::Connection(detail),
            StoreError::Query { query, message } | StoreError::Decode { query, message, .. } => {
                GatewayError::Query { query, message }
            }
        }
    }
}

impl From<csv::Error> for GatewayError {
    fn from(e: csv::Error) -> Self {
        GatewayError::Export(e.to_string())
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
