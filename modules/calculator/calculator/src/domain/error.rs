//! Error types for calculator operations.

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor was zero (`0.0` or `-0.0`).
    #[error("division by zero")]
    DivisionByZero,
}

/// Returned when a string does not name any [`Operation`](super::Operation).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOperationError {
    #[error("unknown operation '{0}' (expected add, subtract, multiply, divide or + - * /)")]
    Unknown(String),
}
