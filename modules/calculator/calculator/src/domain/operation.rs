//! Run-time selection of a calculator operation.

use std::fmt;
use std::str::FromStr;

use super::error::{CalculatorError, ParseOperationError};
use super::service::Calculator;

/// One of the four binary operations a [`Calculator`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol used when rendering `a op b`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply this operation to `a` and `b` through `calc`.
    ///
    /// # Errors
    ///
    /// Only [`Operation::Divide`] can fail, with
    /// [`CalculatorError::DivisionByZero`].
    pub fn apply(self, calc: &Calculator, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            Operation::Add => Ok(calc.add(a, b)),
            Operation::Subtract => Ok(calc.subtract(a, b)),
            Operation::Multiply => Ok(calc.multiply(a, b)),
            Operation::Divide => calc.divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            _ => Err(ParseOperationError::Unknown(s.to_owned())),
        }
    }
}
