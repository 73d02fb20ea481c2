//! Shared error types for star profile derivation.
//!
//! All fallible operations in this workspace return [`StarResult`]. Each
//! variant captures the context needed to report the failure without the
//! caller re-deriving it.
//!
//! # Error Types
//!
//! - [`StarError::AmbiguousUnknown`] - a solver was given zero or several unknown slots
//! - [`StarError::NotInCatalog`] - HIP number absent from the loaded catalog
//! - [`StarError::NumericDomain`] - log of a non-positive value, division by zero, non-finite input
//! - [`StarError::Record`] - a catalog record field failed to parse at its documented offset
//! - [`StarError::Parse`] - a sexagesimal string matched neither HMS nor DMS

use thiserror::Error;

/// Types of numeric domain failures.
///
/// Used with [`StarError::NumericDomain`] to say what went wrong inside a
/// formula, independent of which derivation invoked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Division by zero attempted
    DivisionByZero,
    /// Logarithm of a zero or negative value attempted
    LogNonPositive,
    /// Input value outside the operation's valid domain (NaN, infinity)
    InvalidInput,
}

/// Standard error type for stellar property calculations.
#[derive(Error, Debug)]
pub enum StarError {
    /// A single-unknown solver was not given exactly one unknown slot.
    ///
    /// Fatal to the call; the equation is either fully determined or
    /// underdetermined and there is nothing to solve.
    #[error("{solver}: expected exactly one unknown of {slots} slots, got {known} known")]
    AmbiguousUnknown {
        /// Name of the solver that rejected the input
        solver: &'static str,
        /// Total number of slots in the equation
        slots: usize,
        /// How many slots carried known values
        known: usize,
    },

    /// The requested HIP number is not present in the catalog.
    #[error("HIP {hip} is not in the catalog")]
    NotInCatalog {
        /// Hipparcos catalog number that was looked up
        hip: u32,
    },

    /// A numeric computation left its valid domain.
    ///
    /// Carries the operation name and a description of the offending input
    /// so the failing step of a derivation chain is identifiable.
    #[error("Numeric domain error in {operation} ({kind:?}): {message}")]
    NumericDomain {
        /// Name of the operation that failed
        operation: String,
        /// Type of domain failure
        kind: MathErrorKind,
        /// Description including the offending inputs
        message: String,
    },

    /// A catalog record field could not be interpreted.
    #[error("Malformed catalog record field '{field}': {message}")]
    Record {
        /// Field name as documented in the offset contract
        field: &'static str,
        /// What was found instead
        message: String,
    },

    /// A coordinate string matched no accepted sexagesimal format.
    #[error("Cannot parse '{input}' as {expected}")]
    Parse {
        /// The rejected input
        input: String,
        /// Expected format ("HMS" or "DMS")
        expected: &'static str,
    },
}

/// Result type alias for stellar calculations.
pub type StarResult<T> = Result<T, StarError>;

/// Convenience constructors for common error patterns.
impl StarError {
    /// Create an ambiguous-unknown error for a solver with `slots` slots of
    /// which `known` held values.
    pub fn ambiguous_unknown(solver: &'static str, slots: usize, known: usize) -> Self {
        Self::AmbiguousUnknown {
            solver,
            slots,
            known,
        }
    }

    /// Create a numeric domain error.
    pub fn numeric_domain(operation: &str, kind: MathErrorKind, message: &str) -> Self {
        Self::NumericDomain {
            operation: operation.to_string(),
            kind,
            message: message.to_string(),
        }
    }

    /// Create a malformed-record error for a named field.
    pub fn record(field: &'static str, message: &str) -> Self {
        Self::Record {
            field,
            message: message.to_string(),
        }
    }

    /// Create a sexagesimal parse error.
    pub fn parse(input: &str, expected: &'static str) -> Self {
        Self::Parse {
            input: input.to_string(),
            expected,
        }
    }
}
