//! Shared error types used across submodules.

use thiserror::Error;

/// Result type alias using [`ValidationError`].
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Broad failure class of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed boundary description, non-finite or out-of-range scalar, mismatched lengths.
    InvalidConfiguration,
    /// Conductor outside the domain, or two conductors overlapping.
    Geometry,
    /// Query arguments whose shape disagrees with the constructed solver.
    QueryShape,
}

/// Rejected input. Raised synchronously, never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Boundary type name outside the eight supported kinds.
    #[error("unknown boundary type '{0}'")]
    UnknownBoundaryKind(String),

    /// Scalar parameter that is NaN or infinite.
    #[error("parameter '{name}' must be finite (got {value})")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Scalar parameter violating its sign or ordering constraint.
    #[error("parameter '{name}' is out of range: {message}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Human-readable constraint.
        message: String,
    },

    /// Parallel coordinate arrays of different length.
    #[error("length mismatch for '{name}': expected {expected}, got {actual}")]
    LengthMismatch {
        /// Array name.
        name: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Conductor set without any conductor.
    #[error("at least one conductor is required")]
    NoConductors,

    /// Conductor disk not contained in the domain rectangle.
    #[error("conductor {index} at ({x}, {y}) with diameter {diameter} lies outside the domain")]
    ConductorOutsideDomain {
        /// Conductor index (0-based).
        index: usize,
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Diameter.
        diameter: f64,
    },

    /// Two conductor disks touching, overlapping or coinciding.
    #[error("conductors {first} and {second} overlap")]
    ConductorOverlap {
        /// Lower conductor index.
        first: usize,
        /// Higher conductor index.
        second: usize,
    },

    /// Evaluation point outside the domain rectangle.
    #[error("evaluation point {index} at ({x}, {y}) lies outside the domain")]
    PointOutsideDomain {
        /// Point index (0-based).
        index: usize,
        /// Point x.
        x: f64,
        /// Point y.
        y: f64,
    },

    /// Evaluation coordinate arrays of different length.
    #[error("coordinate arrays differ in length: x has {x_len}, y has {y_len}")]
    CoordinateMismatch {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// Non-finite entry in a query argument.
    #[error("non-finite value in '{name}' at index {index}")]
    NonFiniteQuery {
        /// Argument name.
        name: &'static str,
        /// Flat (column-major for matrices) index of the entry.
        index: usize,
    },

    /// Current matrix whose row count differs from the conductor count.
    #[error("current matrix has {rows} rows, expected one per conductor ({expected})")]
    CurrentRows {
        /// Conductor count.
        expected: usize,
        /// Rows supplied.
        rows: usize,
    },
}

impl ValidationError {
    /// Failure class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownBoundaryKind(_)
            | Self::NonFinite { .. }
            | Self::OutOfRange { .. }
            | Self::LengthMismatch { .. }
            | Self::NoConductors => ErrorKind::InvalidConfiguration,
            Self::ConductorOutsideDomain { .. } | Self::ConductorOverlap { .. } => ErrorKind::Geometry,
            Self::PointOutsideDomain { .. }
            | Self::CoordinateMismatch { .. }
            | Self::NonFiniteQuery { .. }
            | Self::CurrentRows { .. } => ErrorKind::QueryShape,
        }
    }

    pub(crate) fn out_of_range(name: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            name,
            message: message.into(),
        }
    }
}
