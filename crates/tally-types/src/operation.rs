use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four arithmetic operations a calculator can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `x + y`
    Add,
    /// `x - y`
    Subtract,
    /// `x * y`
    Multiply,
    /// `x / y`, fails when `y` is zero
    Divide,
}

/// Returned when a string does not name a known operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{input}': expected one of add, subtract, multiply, divide")]
pub struct ParseOperationError {
    /// The rejected input, as given
    pub input: String,
}

impl Operation {
    /// All operations, in the order the demonstration driver runs them.
    pub const ALL: [Operation; 4] =
        [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide];

    /// Machine-readable name, also used as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Human-readable label printed in front of a result.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    /// Infix operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
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

    /// Accepts the name, the symbol or the label of an operation, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                op.symbol() == needle
                    || op.name().eq_ignore_ascii_case(needle)
                    || op.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseOperationError { input: s.to_string() })
    }
}
