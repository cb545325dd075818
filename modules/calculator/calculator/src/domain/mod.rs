//! Domain layer for calculator
//!
//! Contains the arithmetic service and the types it exchanges with callers.

pub mod error;
pub mod operation;
pub mod service;

pub use error::{CalculatorError, ParseOperationError};
pub use operation::Operation;
pub use service::Calculator;
