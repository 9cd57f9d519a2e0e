//! Linear system solving.
//!
//! Solves a pair of parsed equations in at most two variables. One-variable
//! equations are completed with a zero-coefficient term for the other
//! equation's variable, both equations are sorted by variable name, and the
//! resulting 2x2 system is solved with Cramer's rule.
//!
//! # Example
//!
//! ```
//! use equation_solver::parser::parse;
//! use equation_solver::solver::solve;
//!
//! let first = parse("2x + 3y = 12").unwrap();
//! let second = parse("x - y = 1").unwrap();
//! let solution = solve(&first, &second).unwrap();
//! assert!((solution.value_of('x').unwrap() - 3.0).abs() < 1e-9);
//! assert!((solution.value_of('y').unwrap() - 2.0).abs() < 1e-9);
//! ```

mod completion;
mod cramer;

pub use completion::{CompletedEquation, complete_pair};
pub use cramer::{DEGENERACY_EPSILON, solve_completed};

use crate::error::{EngineResult, SolveError};
use crate::models::{Equation, Solution};
use crate::parser::parse;

/// Solves two parsed equations jointly.
pub fn solve(first: &Equation, second: &Equation) -> Result<Solution, SolveError> {
    let (first, second) = complete_pair(first, second)?;
    solve_completed(&first, &second)
}

/// Parses both equation strings and solves them.
///
/// The first equation is parsed before the second, so its error wins when
/// both are malformed.
pub fn solve_str(first: &str, second: &str) -> EngineResult<Solution> {
    let first = parse(first)?;
    let second = parse(second)?;
    Ok(solve(&first, &second)?)
}
