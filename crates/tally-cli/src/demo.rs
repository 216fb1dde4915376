use tally_calculator::{Calculator, CalculatorError};
use tally_types::Operation;

use crate::output::format_line;

/// The fixed sequence run by `tally demo`.
pub const DEMO_STEPS: [(Operation, f64, f64); 4] = [
    (Operation::Add, 5.0, 3.0),
    (Operation::Subtract, 10.0, 4.0),
    (Operation::Multiply, 6.0, 7.0),
    (Operation::Divide, 20.0, 5.0),
];

/// Runs [`DEMO_STEPS`] on `calculator` and returns one printable line per step.
pub fn run_demo(calculator: &mut Calculator) -> Result<Vec<String>, CalculatorError> {
    DEMO_STEPS
        .iter()
        .map(|&(operation, x, y)| {
            calculator.calculate(operation, x, y).map(|value| format_line(operation, value))
        })
        .collect()
}
