//! Error types for generator table operations.
//!
//! Every failure is a precondition check: operations validate before they
//! mutate, so a returned error means the target table was left untouched.
//!
//! # Example
//!
//! ```
//! use gentab_core::{GenTableError, GenTableResult};
//!
//! fn check_row(row: usize, len: usize) -> GenTableResult<()> {
//!     if row >= len {
//!         return Err(GenTableError::IndexOutOfRange { index: row, len });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_row(5, 3).is_err());
//! ```

use thiserror::Error;

/// Errors raised by generator table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenTableError {
    /// Parallel arrays or row-aligned tables disagree on length.
    #[error("Length mismatch ({context}): expected {expected} rows, found {found}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// A selected row position lies outside `[0, len)`.
    #[error("Row index {index} out of range for {len} generators")]
    IndexOutOfRange { index: usize, len: usize },

    /// Column count does not fit the generator layout.
    #[error("Schema mismatch: found {found} columns, expected {required}")]
    SchemaMismatch { found: usize, required: &'static str },
}

/// Convenience type alias for Results using GenTableError.
pub type GenTableResult<T> = Result<T, GenTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenTableError::IndexOutOfRange { index: 5, len: 3 };
        assert!(err.to_string().contains("Row index 5"));
        assert!(err.to_string().contains("3 generators"));

        let err = GenTableError::SchemaMismatch {
            found: 20,
            required: "21 or at least 25",
        };
        assert!(err.to_string().contains("20 columns"));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> GenTableResult<()> {
            Err(GenTableError::LengthMismatch {
                context: "table sync",
                expected: 3,
                found: 2,
            })
        }

        fn outer() -> GenTableResult<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(
            outer(),
            Err(GenTableError::LengthMismatch { expected: 3, .. })
        ));
    }
}
