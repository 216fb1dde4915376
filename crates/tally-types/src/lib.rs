//! Tally Types
//!
//! This crate defines the types shared between `tally-calculator` and the `tally`
//! command line front end. Keeping `Operation` here lets the front end parse and print
//! operations without depending on calculator internals.

#![deny(warnings)]
#![deny(missing_docs)]

mod operation;
pub use operation::{Operation, ParseOperationError};
