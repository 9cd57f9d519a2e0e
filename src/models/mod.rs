//! Core data models for the equation solver.
//!
//! This module contains the parsed equation representation and the solution
//! returned by the solver.

mod equation;
mod solution;

pub use equation::{Equation, Terms, VariableTerm};
pub use solution::{Solution, VariableValue};
