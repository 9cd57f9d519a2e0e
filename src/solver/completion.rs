//! Term completion and canonical ordering.
//!
//! Brings two parsed equations up to two terms each over the same variable
//! pair, padding one-term equations with a zero-coefficient term, then sorts
//! each equation's terms by variable.

use crate::error::SolveError;
use crate::models::{Equation, Terms, VariableTerm};

/// An equation with exactly two terms, sorted by variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedEquation {
    /// Terms in ascending variable order.
    pub terms: [VariableTerm; 2],
    /// The right-hand-side constant.
    pub rhs: f64,
}

impl CompletedEquation {
    fn new(mut terms: [VariableTerm; 2], rhs: f64) -> Self {
        terms.sort_by(|a, b| a.variable.cmp(&b.variable));
        Self { terms, rhs }
    }

    /// The sorted variable pair.
    pub fn variables(&self) -> [char; 2] {
        [self.terms[0].variable, self.terms[1].variable]
    }
}

/// Pads `single` with the variable of `other` that it does not already use.
fn pad_against(single: VariableTerm, other: &Terms) -> [VariableTerm; 2] {
    let missing = other
        .iter()
        .find(|term| term.variable != single.variable)
        .map_or(other.first().variable, |term| term.variable);
    [single, VariableTerm::zero(missing)]
}

/// Completes and sorts a pair of equations so they share one variable pair.
///
/// Fails with [`SolveError::EquationsMismatch`] when both equations name the
/// same single variable, or when the completed variable pairs differ.
pub fn complete_pair(
    first: &Equation,
    second: &Equation,
) -> Result<(CompletedEquation, CompletedEquation), SolveError> {
    let (first_terms, second_terms) = match (*first.terms(), *second.terms()) {
        (Terms::One(a), Terms::One(b)) => {
            if a.variable == b.variable {
                return Err(SolveError::EquationsMismatch);
            }
            (
                [a, VariableTerm::zero(b.variable)],
                [b, VariableTerm::zero(a.variable)],
            )
        }
        (Terms::One(a), Terms::Two(b1, b2)) => (pad_against(a, second.terms()), [b1, b2]),
        (Terms::Two(a1, a2), Terms::One(b)) => ([a1, a2], pad_against(b, first.terms())),
        (Terms::Two(a1, a2), Terms::Two(b1, b2)) => ([a1, a2], [b1, b2]),
    };

    let first = CompletedEquation::new(first_terms, first.rhs());
    let second = CompletedEquation::new(second_terms, second.rhs());

    if first.variables() != second.variables() {
        return Err(SolveError::EquationsMismatch);
    }

    Ok((first, second))
}
