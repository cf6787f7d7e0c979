//! Error types for the clq-core crate.
//!
//! This module provides the [`DataError`] type for failures while loading an
//! external dataset file. Dataset loading is the only fallible I/O in the
//! crate; callers that want the degrade-to-empty behavior should go through
//! [`VehicleCatalog::from_json_file`](crate::catalog::VehicleCatalog::from_json_file),
//! which recovers from these errors instead of propagating them.

/// Errors that can occur while reading and parsing an external dataset.
///
/// # Examples
///
/// ```
/// use clq_core::DataError;
///
/// let error = DataError::Io(std::io::Error::new(
///     std::io::ErrorKind::NotFound,
///     "no such file",
/// ));
/// assert!(error.to_string().contains("no such file"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file is not a valid JSON array of records.
    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_display() {
        let error = DataError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let msg = error.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_parse_display() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let error = DataError::from(parse_err);
        assert!(error.to_string().contains("failed to parse"));
    }
}
