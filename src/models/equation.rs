//! Equation model and related types.
//!
//! An equation holds one or two variable terms and a right-hand-side
//! constant. Terms are stored in a fixed-size [`Terms`] value rather than a
//! list, since an equation never has more than two of them.

use crate::error::ParseErrorKind;

/// One `coefficient * variable` term of an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableTerm {
    /// The single-letter variable name.
    pub variable: char,
    /// The coefficient multiplying the variable.
    pub coefficient: f64,
}

impl VariableTerm {
    /// Creates a new term.
    pub fn new(variable: char, coefficient: f64) -> Self {
        Self {
            variable,
            coefficient,
        }
    }

    /// Creates a term with a zero coefficient, used to complete a one-term equation.
    pub fn zero(variable: char) -> Self {
        Self::new(variable, 0.0)
    }
}

/// The left-hand side of an equation: exactly one or two terms.
///
/// A `Two` value always names two distinct variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Terms {
    /// A single variable term.
    One(VariableTerm),
    /// Two terms with distinct variables, in the order they were written.
    Two(VariableTerm, VariableTerm),
}

impl Terms {
    /// Iterates over the terms in written order.
    pub fn iter(&self) -> impl Iterator<Item = &VariableTerm> {
        let (first, second) = match self {
            Terms::One(term) => (term, None),
            Terms::Two(first, second) => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }

    /// Returns the first term as written.
    pub fn first(&self) -> &VariableTerm {
        match self {
            Terms::One(term) | Terms::Two(term, _) => term,
        }
    }

    /// Returns true if any term uses the given variable.
    pub fn contains(&self, variable: char) -> bool {
        self.iter().any(|term| term.variable == variable)
    }
}

/// A parsed linear equation in one or two variables.
///
/// Equations are created by [`crate::parser::parse`] (or `str::parse`) and
/// are immutable afterwards.
///
/// # Examples
///
/// ```
/// use equation_solver::models::{Equation, VariableTerm};
///
/// let equation: Equation = "2x - y = 1".parse().unwrap();
/// assert_eq!(equation.terms().iter().count(), 2);
/// assert_eq!(equation.terms().first(), &VariableTerm::new('x', 2.0));
/// assert_eq!(equation.rhs(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    terms: Terms,
    rhs: f64,
}

impl Equation {
    /// Creates a one-variable equation `coefficient * variable = rhs`.
    pub fn single(term: VariableTerm, rhs: f64) -> Self {
        Self {
            terms: Terms::One(term),
            rhs,
        }
    }

    /// Creates a two-variable equation, rejecting a repeated variable.
    pub fn pair(first: VariableTerm, second: VariableTerm, rhs: f64) -> Result<Self, ParseErrorKind> {
        if first.variable == second.variable {
            return Err(ParseErrorKind::DuplicateVariable {
                variable: first.variable,
            });
        }
        Ok(Self {
            terms: Terms::Two(first, second),
            rhs,
        })
    }

    /// Returns the left-hand side terms.
    pub fn terms(&self) -> &Terms {
        &self.terms
    }

    /// Returns the right-hand-side constant.
    pub fn rhs(&self) -> f64 {
        self.rhs
    }
}
