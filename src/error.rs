//! Error types for the Liberty parser and lookup layer.
//!
//! This module provides a unified error type [`LibertyError`] that covers
//! grammar violations, file access, and the cell/pin/attribute lookups
//! performed on behalf of command-line and WASM consumers.

use thiserror::Error;

/// Result type alias using [`LibertyError`].
pub type Result<T> = std::result::Result<T, LibertyError>;

/// Unified error type for all Liberty operations.
#[derive(Error, Debug)]
pub enum LibertyError {
    // ============ Parsing Errors ============
    /// Grammar violation. `offset` is a byte offset into the caller's buffer.
    #[error("Parse error at line {line}, column {column}: expected {expected}, found {found}")]
    Parse {
        offset: usize,
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    /// The root group parsed, but it is not a `library` group
    #[error("Parsed root is not a library group (found '{group_kind}')")]
    NotALibrary { group_kind: String },

    // ============ Lookup Errors ============
    /// No `cell` group with the requested name
    #[error("Cell not found: {cell}")]
    CellNotFound { cell: String },

    /// No `pin` group with the requested name inside the cell
    #[error("Pin not found in cell {cell}: {pin}")]
    PinNotFound { cell: String, pin: String },

    /// Required numeric attribute missing on the pin
    #[error("Attribute '{attribute}' not found on {cell}/{pin}")]
    AttributeNotFound {
        cell: String,
        pin: String,
        attribute: String,
    },

    // ============ I/O Errors ============
    /// Error reading a library file
    #[error("Cannot open liberty file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LibertyError {
    /// Create a parse error with an already-resolved source position.
    pub fn parse(
        offset: usize,
        line: usize,
        column: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Parse {
            offset,
            line,
            column,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Byte offset of a parse error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Process exit code a command-line consumer reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FileRead { .. } | Self::Parse { .. } => 1,
            Self::NotALibrary { .. } => 2,
            Self::CellNotFound { .. } => 3,
            Self::PinNotFound { .. } => 4,
            Self::AttributeNotFound { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = LibertyError::parse(3, 1, 4, "'{'", "';'");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.offset(), Some(3));

        let err = LibertyError::PinNotFound {
            cell: "INV".to_string(),
            pin: "Z".to_string(),
        };
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.offset(), None);
        assert_eq!(err.to_string(), "Pin not found in cell INV: Z");
    }

    #[test]
    fn test_parse_error_message() {
        let err = LibertyError::parse(10, 2, 5, "';'", "'}'");
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 5: expected ';', found '}'"
        );
    }
}
