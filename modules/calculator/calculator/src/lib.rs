//! Calculator
//!
//! A stateless arithmetic service with four binary operations over `f64`.
//! Only division can fail, with [`CalculatorError::DivisionByZero`].
//!
//! ## Architecture
//!
//! - `domain/service.rs` - the `Calculator` itself
//! - `domain/operation.rs` - run-time selection of an operation
//! - `domain/error.rs` - error types
//! - `greeting.rs` - greeting text used by the demo binary
//!
//! ```
//! use calculator::{Calculator, CalculatorError};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert_eq!(calc.divide(1.0, 0.0), Err(CalculatorError::DivisionByZero));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === DOMAIN ===
pub mod domain;
pub use domain::{Calculator, CalculatorError, Operation, ParseOperationError};

// === PRESENTATION HELPERS ===
mod greeting;
pub use greeting::greet;
