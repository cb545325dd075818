//! Domain service for calculator
//!
//! Contains the core arithmetic logic.

use tracing::debug;

use super::error::CalculatorError;

/// Domain service that performs arithmetic on two operands.
///
/// This is a stateless service: it holds no data, so it is `Copy` and can be
/// shared across threads without synchronization. Every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`, returning the real (non-truncated) quotient.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is `0.0` or `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            debug!(a, "rejecting division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Sum a slice of numbers by folding [`Calculator::add`] from `0.0`.
    #[must_use]
    pub fn sum(&self, values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, &v| self.add(acc, v))
    }
}
