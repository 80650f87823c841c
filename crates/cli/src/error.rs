use connectors::sql::base::error::{ConnectorError, DbError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unsupported output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Connection failed: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Query failed: {0}")]
    Database(#[from] DbError),

    #[error("Index column '{0}' not present in result set")]
    IndexMissing(String),

    #[error("Index column '{column}' has non-numeric value '{value}'")]
    IndexNotNumeric { column: String, value: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
