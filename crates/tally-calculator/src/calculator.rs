use tally_types::Operation;
use tracing::debug;

use crate::error::{CalculationResult, CalculatorError};

/// A four-function calculator.
///
/// Every operation takes both operands explicitly. The stored result is only a record
/// of the last successful call and never feeds into the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    /// Creates a calculator whose stored result is `0.0`.
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    /// The value returned by the most recent successful operation, or `0.0` if none
    /// has run yet.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Adds `x` and `y`.
    pub fn add(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Add, x, y, x + y)
    }

    /// Subtracts `y` from `x`.
    pub fn subtract(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Subtract, x, y, x - y)
    }

    /// Multiplies `x` by `y`.
    pub fn multiply(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operation::Multiply, x, y, x * y)
    }

    /// Divides `x` by `y`.
    ///
    /// Fails with [`CalculatorError::DivisionByZero`] when `y == 0.0` (either sign of
    /// zero) and leaves the stored result untouched. Any other divisor, however small,
    /// is divided through and may produce an infinity.
    pub fn divide(&mut self, x: f64, y: f64) -> CalculationResult {
        if y == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(self.record(Operation::Divide, x, y, x / y))
    }

    /// Runs `operation` on `x` and `y`, with the same semantics as the dedicated method.
    pub fn calculate(&mut self, operation: Operation, x: f64, y: f64) -> CalculationResult {
        match operation {
            Operation::Add => Ok(self.add(x, y)),
            Operation::Subtract => Ok(self.subtract(x, y)),
            Operation::Multiply => Ok(self.multiply(x, y)),
            Operation::Divide => self.divide(x, y),
        }
    }

    fn record(&mut self, operation: Operation, x: f64, y: f64, value: f64) -> f64 {
        self.result = value;
        debug!(%operation, x, y, value, "calculation complete");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Calculator::new().result(), 0.0);
        assert_eq!(Calculator::default(), Calculator::new());
    }

    #[test]
    fn negative_zero_divisor_is_rejected() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(3.0, -0.0), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn tiny_divisor_divides_through() {
        let mut calc = Calculator::new();
        let value = calc.divide(1.0, f64::from_bits(1)).unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
        assert_eq!(calc.result(), value);
    }
}
