//! Core error types for document generation
//!
//! This module defines the error types used throughout the generation pipeline.

use thiserror::Error;

/// Core error types for document generation
#[derive(Error, Debug)]
pub enum UnifilarError {
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Zero-based row index, when the problem belongs to one row
        row: Option<usize>,
        message: String,
    },

    #[error("Serialization failure ({format}): {message}")]
    SerializationFailure {
        format: &'static str,
        message: String,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl UnifilarError {
    /// Create a malformed input error that is not tied to a row
    pub fn malformed_input(message: String) -> Self {
        Self::MalformedInput { row: None, message }
    }

    /// Create a malformed input error for a row (message uses 1-based numbering)
    pub fn malformed_row(row: usize, message: String) -> Self {
        Self::MalformedInput {
            row: Some(row),
            message: format!("row {}: {}", row + 1, message),
        }
    }

    /// Create a new serialization failure
    pub fn serialization_failure(format: &'static str, message: String) -> Self {
        Self::SerializationFailure { format, message }
    }

    /// Returns true for input errors
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row() {
        let error = UnifilarError::malformed_row(1, "missing column 'Tipo'".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed input"));
        assert!(error_msg.contains("row 2"));
        assert!(error_msg.contains("Tipo"));
        assert!(error.is_malformed_input());
        match error {
            UnifilarError::MalformedInput { row, .. } => assert_eq!(row, Some(1)),
            _ => panic!("Expected MalformedInput"),
        }
    }

    #[test]
    fn test_malformed_input() {
        let error = UnifilarError::malformed_input("expected an array of rows".to_string());
        assert!(format!("{}", error).contains("expected an array of rows"));
    }

    #[test]
    fn test_serialization_failure() {
        let error = UnifilarError::serialization_failure("dxf", "out of memory".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Serialization failure"));
        assert!(error_msg.contains("dxf"));
        assert!(error_msg.contains("out of memory"));
        assert!(!error.is_malformed_input());
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: UnifilarError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
