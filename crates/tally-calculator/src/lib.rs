#![deny(warnings)]
//! The Tally calculator.
//!
//! This crate provides the [`Calculator`] type, which performs one arithmetic
//! operation per call and remembers the value of the last successful one, and the
//! [`CalculatorError`] returned when an operation cannot be performed.

pub mod calculator;
pub mod error;

pub use calculator::Calculator;
pub use error::{CalculationResult, CalculatorError};
pub use tally_types::Operation;
