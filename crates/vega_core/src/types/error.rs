//! Error types for structured error handling.
//!
//! This module provides:
//! - `GridError`: Errors from vega grid construction
//! - `DateError`: Errors from date construction and parsing
//! - `InterpolationError`: Errors from 1-D interpolation operations

use thiserror::Error;

/// Errors from vega grid construction.
///
/// # Variants
/// - `ShapeMismatch`: A row's value count differs from the expiry count
/// - `NoExpiries`: The grid was built with an empty expiry axis
///
/// # Examples
/// ```
/// use vega_core::types::GridError;
///
/// let err = GridError::ShapeMismatch { row: 2, expected: 8, got: 7 };
/// assert!(format!("{}", err).contains("row 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// A row's value count does not match the expiry axis.
    #[error("row {row} has {got} values, expected {expected} (one per expiry)")]
    ShapeMismatch {
        /// Zero-based index of the offending row
        row: usize,
        /// Expected value count (expiry axis length)
        expected: usize,
        /// Actual value count
        got: usize,
    },

    /// The grid has no expiry columns.
    #[error("grid has no expiry columns")]
    NoExpiries,
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g. February 30th)
/// - `ParseError`: Failed to parse a date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g. February 30th).
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("date parse error: {0}")]
    ParseError(String),
}

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside the valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use vega_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 0.10, min: -0.075, max: 0.075 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the valid interpolation domain.
    #[error("query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
