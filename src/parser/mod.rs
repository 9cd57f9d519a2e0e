//! Equation parsing.
//!
//! Converts a raw equation string such as `"2x + 3y = 12"` into an
//! [`Equation`]. Whitespace is removed first, the result is matched against
//! the equation grammar, and a left-to-right scan then builds the terms.
//!
//! Every rejection surfaces as the same [`ParseError`]; the specific reason is
//! available through [`ParseError::kind`] for logging.
//!
//! # Example
//!
//! ```
//! use equation_solver::parser::parse;
//!
//! let equation = parse("x = 5").unwrap();
//! assert_eq!(equation.terms().iter().count(), 1);
//! assert_eq!(equation.rhs(), 5.0);
//!
//! assert!(parse("2x + y").is_err());
//! ```

mod grammar;
mod scanner;

use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::models::Equation;

/// Parses an equation string of the form `[sign][coef]var[sign[coef]var]=[sign]const`.
pub fn parse(text: &str) -> Result<Equation, ParseError> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    parse_cleaned(&cleaned).map_err(|kind| ParseError::new(cleaned, kind))
}

fn parse_cleaned(input: &str) -> Result<Equation, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    if grammar::is_well_formed(input) {
        return scanner::scan(input);
    }
    // The scan names the reason when it can; anything it accepts is still malformed.
    match scanner::scan(input) {
        Err(kind) => Err(kind),
        Ok(_) => Err(ParseErrorKind::Malformed),
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
