use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or decoding a reference source.
///
/// Every variant is fatal to loading. Row-level problems in the taxonomy are
/// not errors; those rows are dropped.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be decoded into the expected shape.
    #[error("{source_id}: {message}")]
    DataFormat { source_id: String, message: String },

    /// The decoded document lacks its required list field, or it is not a sequence.
    #[error("{source_id}: field `{field}` {message}")]
    Schema { source_id: String, field: &'static str, message: String },
}

impl DataError {
    pub(crate) fn format(source_id: &str, message: impl ToString) -> Self {
        DataError::DataFormat { source_id: source_id.to_string(), message: message.to_string() }
    }

    pub(crate) fn schema(source_id: &str, field: &'static str, message: impl ToString) -> Self {
        DataError::Schema { source_id: source_id.to_string(), field, message: message.to_string() }
    }

    /// Identifier (usually a file path) of the source that failed.
    pub fn source_id(&self) -> String {
        match self {
            DataError::Io { path, .. } => path.display().to_string(),
            DataError::DataFormat { source_id, .. } | DataError::Schema { source_id, .. } => source_id.clone(),
        }
    }
}
