use thiserror::Error;

/// Errors raised by the shared metadata model and the column editing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// `samples` is not a valid `{"items": [...]}` document.
    #[error("sample data could not be decoded: {0}")]
    SampleDecode(String),

    /// A sample record does not carry one field per column.
    #[error("sample record {row} has {found} fields, expected {expected}")]
    SampleShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A sample record is missing one of the column names.
    #[error("sample record {row} has no value for column `{column}`")]
    SampleMissingColumn { row: usize, column: String },

    /// An edit targeted a slot outside the seeded column list.
    #[error("column index {index} is out of range for {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    /// An edit arrived before the column list was seeded from metadata.
    #[error("column list has not been loaded yet")]
    NotSeeded,

    /// The maximum length text is neither `N` nor `N,M`.
    #[error("invalid length `{0}`: expected digits or digits,decimals")]
    InvalidLength(String),
}

impl From<serde_json::Error> for MetaError {
    fn from(err: serde_json::Error) -> Self {
        MetaError::SampleDecode(err.to_string())
    }
}
