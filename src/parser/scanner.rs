//! Left-to-right scan that turns an equation string into an [`Equation`].
//!
//! The scan is also run over strings the grammar rejected, to name the reason.

use crate::error::ParseErrorKind;
use crate::models::{Equation, VariableTerm};

fn parse_number(text: &str) -> Result<f64, ParseErrorKind> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseErrorKind::InvalidNumber {
            text: text.to_string(),
        })
}

/// An empty coefficient means magnitude 1 (`x`, `-y`).
fn parse_magnitude(text: &str) -> Result<f64, ParseErrorKind> {
    if text.is_empty() {
        Ok(1.0)
    } else {
        parse_number(text)
    }
}

/// Scans a whitespace-free equation string.
///
/// A running sign and segment start are tracked; each letter closes a
/// coefficient segment, and `=` hands the remainder to the constant parser.
pub(crate) fn scan(input: &str) -> Result<Equation, ParseErrorKind> {
    let mut terms: [Option<VariableTerm>; 2] = [None, None];
    let mut count = 0;
    let mut sign = 1.0;
    let mut segment_start = 0;
    let mut rhs = None;

    for (index, character) in input.char_indices() {
        match character {
            '=' => {
                rhs = Some(parse_number(&input[index + 1..])?);
                break;
            }
            '+' | '-' => {
                sign = if character == '-' { -1.0 } else { 1.0 };
                segment_start = index + 1;
            }
            c if c.is_alphabetic() => {
                let magnitude = parse_magnitude(&input[segment_start..index])?;
                if let Some(slot) = terms.get_mut(count) {
                    *slot = Some(VariableTerm::new(c, sign * magnitude));
                }
                count += 1;
            }
            _ => {}
        }
    }

    let rhs = rhs.ok_or(ParseErrorKind::MissingRightHandSide)?;

    match (count, terms) {
        (1, [Some(term), None]) => Ok(Equation::single(term, rhs)),
        (2, [Some(first), Some(second)]) => Equation::pair(first, second, rhs),
        _ => Err(ParseErrorKind::WrongTermCount { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_two_terms() {
        let equation = scan("2x+3y=12").unwrap();
        let terms: Vec<VariableTerm> = equation.terms().iter().copied().collect();
        assert_eq!(
            terms,
            vec![VariableTerm::new('x', 2.0), VariableTerm::new('y', 3.0)]
        );
        assert_eq!(equation.rhs(), 12.0);
    }

    #[test]
    fn test_scan_implicit_coefficients() {
        let equation = scan("-x+y=-1").unwrap();
        let terms: Vec<VariableTerm> = equation.terms().iter().copied().collect();
        assert_eq!(
            terms,
            vec![VariableTerm::new('x', -1.0), VariableTerm::new('y', 1.0)]
        );
        assert_eq!(equation.rhs(), -1.0);
    }

    #[test]
    fn test_scan_decimal_coefficients() {
        let equation = scan("0.5a-.25b=1.5").unwrap();
        let terms: Vec<VariableTerm> = equation.terms().iter().copied().collect();
        assert_eq!(
            terms,
            vec![VariableTerm::new('a', 0.5), VariableTerm::new('b', -0.25)]
        );
        assert_eq!(equation.rhs(), 1.5);
    }

    #[test]
    fn test_scan_missing_rhs() {
        assert_eq!(scan("2x+y"), Err(ParseErrorKind::MissingRightHandSide));
    }

    #[test]
    fn test_scan_counts_extra_terms() {
        assert_eq!(
            scan("x+y+z=1"),
            Err(ParseErrorKind::WrongTermCount { count: 3 })
        );
    }

    #[test]
    fn test_scan_no_terms() {
        assert_eq!(
            scan("=1"),
            Err(ParseErrorKind::WrongTermCount { count: 0 })
        );
    }

    #[test]
    fn test_scan_duplicate_variable() {
        assert_eq!(
            scan("x+x=2"),
            Err(ParseErrorKind::DuplicateVariable { variable: 'x' })
        );
    }

    #[test]
    fn test_scan_reads_adjacent_letter_as_coefficient() {
        assert_eq!(
            scan("xy=5"),
            Err(ParseErrorKind::InvalidNumber {
                text: "x".to_string()
            })
        );
    }

    #[test]
    fn test_scan_rejects_non_finite_constant() {
        let huge = format!("x={}", "9".repeat(400));
        assert!(matches!(
            scan(&huge),
            Err(ParseErrorKind::InvalidNumber { .. })
        ));
    }
}
