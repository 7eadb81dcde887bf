use thiserror::Error;

// global constants
pub const DUAL_TABLE: &str = "DUAL";
pub const ADMIN_CAPABILITY: &str = "all";
pub const CONFIG_FILE: &str = "config.json";

// global types
pub type Offset = usize;
pub type RowCount = u64;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Syntax(String),

    #[error("You are not authorized to use this feature.")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Execution(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Execution(err.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::Config(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;
