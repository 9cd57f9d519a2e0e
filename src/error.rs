//! Error types for the equation solver.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Parsing and solving each have their own error type, and [`EngineError`]
//! wraps both together with the configuration errors raised at startup.

use thiserror::Error;

/// The internal reason an equation string was rejected.
///
/// Callers only ever see the generic [`ParseError`] message. The kind is kept
/// for diagnostics and logging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The input was empty after whitespace removal.
    #[error("equation is empty")]
    Empty,

    /// The input does not match the equation grammar.
    #[error("input does not match the equation grammar")]
    Malformed,

    /// No `=` followed by a constant was found.
    #[error("missing right-hand side")]
    MissingRightHandSide,

    /// A numeric substring could not be parsed as a decimal number.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The substring that failed to parse.
        text: String,
    },

    /// The left-hand side holds a number of terms other than one or two.
    #[error("expected 1 or 2 variable terms, found {count}")]
    WrongTermCount {
        /// Number of terms found.
        count: usize,
    },

    /// The same variable letter appears twice in one equation.
    #[error("variable '{variable}' appears more than once")]
    DuplicateVariable {
        /// The repeated variable.
        variable: char,
    },
}

/// An equation string could not be parsed.
///
/// The display message is deliberately generic; use [`ParseError::kind`] for
/// the specific reason.
///
/// # Example
///
/// ```
/// use equation_solver::error::{ParseError, ParseErrorKind};
///
/// let error = ParseError::new("2x+y", ParseErrorKind::MissingRightHandSide);
/// assert_eq!(error.to_string(), "Invalid String");
/// assert_eq!(error.kind(), &ParseErrorKind::MissingRightHandSide);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid String")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// The whitespace-free input that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The specific reason for the rejection.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// A pair of parsed equations could not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The two equations do not constrain the same pair of variables.
    #[error("Equations Not Match")]
    EquationsMismatch,

    /// The equations are linearly dependent and consistent.
    #[error("Infinite Number of Solutions")]
    InfiniteSolutions,

    /// The equations are linearly dependent and inconsistent.
    #[error("No Solutions")]
    NoSolutions,
}

/// The main error type for the equation solver.
///
/// # Example
///
/// ```
/// use equation_solver::error::{EngineError, SolveError};
///
/// let error: EngineError = SolveError::NoSolutions.into();
/// assert_eq!(error.to_string(), "No Solutions");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An equation string was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed equations have no unique solution.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
