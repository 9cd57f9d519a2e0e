//! Cramer's rule for a completed 2x2 system.

use crate::error::SolveError;
use crate::models::{Solution, VariableValue};

use super::completion::CompletedEquation;

/// Absolute tolerance below which a determinant is treated as zero.
pub const DEGENERACY_EPSILON: f64 = 1e-7;

/// Solves two completed equations over the same sorted variable pair.
///
/// A determinant within [`DEGENERACY_EPSILON`] of zero yields
/// [`SolveError::InfiniteSolutions`] when the equations are consistent and
/// [`SolveError::NoSolutions`] otherwise. Arithmetic that overflows to a
/// non-finite determinant or value is also reported as
/// [`SolveError::NoSolutions`].
pub fn solve_completed(
    first: &CompletedEquation,
    second: &CompletedEquation,
) -> Result<Solution, SolveError> {
    let [a11, a12] = first.terms.map(|term| term.coefficient);
    let [a21, a22] = second.terms.map(|term| term.coefficient);
    let (c1, c2) = (first.rhs, second.rhs);

    let determinant = a11 * a22 - a12 * a21;
    if !determinant.is_finite() {
        return Err(SolveError::NoSolutions);
    }
    if determinant.abs() < DEGENERACY_EPSILON {
        return if (c1 * a21 - c2 * a11).abs() < DEGENERACY_EPSILON {
            Err(SolveError::InfiniteSolutions)
        } else {
            Err(SolveError::NoSolutions)
        };
    }

    let first_value = (c1 * a22 - c2 * a12) / determinant;
    let second_value = (c2 * a11 - c1 * a21) / determinant;
    if !(first_value.is_finite() && second_value.is_finite()) {
        return Err(SolveError::NoSolutions);
    }

    let [first_variable, second_variable] = first.variables();
    Ok(Solution::new([
        VariableValue::new(first_variable, first_value),
        VariableValue::new(second_variable, second_value),
    ]))
}
