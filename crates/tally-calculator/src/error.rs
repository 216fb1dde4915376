use thiserror::Error;

pub type CalculationResult = Result<f64, CalculatorError>;

/// Errors raised by calculator operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was exactly zero
    #[error("cannot divide by zero")]
    DivisionByZero,
}
