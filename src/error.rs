use std::path::PathBuf;
use thiserror::Error;

/// Loader error types
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("Missing required field `{field}` in {context}")]
    MissingField { field: &'static str, context: String },
    #[error("Unrecognized {kind} value: {value:?}")]
    UnrecognizedValue { kind: &'static str, value: String },
    #[error("Set code {0} appears more than once in the catalog")]
    DuplicateSetCode(String),
    #[error("Malformed {source_name} at line {line}: {reason}")]
    MalformedTable {
        source_name: String,
        line: usize,
        reason: String,
    },
    #[error("Block {0} is declared more than once in the supplemental block table")]
    DuplicateBlock(String),
    #[error("Set {set_code} is claimed by both block {first:?} and block {second:?}")]
    OverlappingBlockMembership {
        set_code: String,
        first: String,
        second: String,
    },
    #[error("Historical card id {old_id} names both {first:?} and {second:?}")]
    ConflictingHistoricalId {
        old_id: u32,
        first: String,
        second: String,
    },
    #[error("Configuration error: {0}")]
    Configuration(#[from] ::config::ConfigError),
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

impl LoaderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoaderError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        LoaderError::UnrecognizedValue {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn malformed_table(
        source_name: impl Into<String>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        LoaderError::MalformedTable {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Convert LoaderError to PyErr for PyO3 compatibility
#[cfg(feature = "python")]
impl From<LoaderError> for pyo3::PyErr {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::Io { .. } => pyo3::exceptions::PyIOError::new_err(err.to_string()),
            LoaderError::Configuration(_) => {
                pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
            }
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoaderError::unrecognized("rarity", "timeshifted");
        assert_eq!(err.to_string(), "Unrecognized rarity value: \"timeshifted\"");

        let err = LoaderError::malformed_table("additional_blocks.txt", 3, "missing tab");
        assert_eq!(
            err.to_string(),
            "Malformed additional_blocks.txt at line 3: missing tab"
        );

        let err = LoaderError::ConflictingHistoricalId {
            old_id: 17,
            first: "Shock".to_string(),
            second: "Fog".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Historical card id 17 names both \"Shock\" and \"Fog\""
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = LoaderError::io(
            "data/AllSets-x.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("data/AllSets-x.json"));
    }
}
