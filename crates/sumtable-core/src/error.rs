//! Error types for sumtable-core
//!
//! Construction is the only fallible operation: window queries are total
//! and report fully out-of-bounds windows as a zero sum, not as an error.

use thiserror::Error;

/// Errors that can occur while building a summed-area table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Grid exceeds the configured maximum size
    #[error("grid {width}x{height} exceeds maximum {max_width}x{max_height}")]
    DimensionTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    /// Zero-sized grid
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Input buffer length does not match width * height
    #[error("input length mismatch: expected {expected} values, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Limits outside of 1..=hard cap
    #[error("invalid table limits: {max_width}x{max_height}")]
    InvalidLimits { max_width: u32, max_height: u32 },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
