//! Whole-string grammar check for a whitespace-free equation.

use std::sync::LazyLock;

use regex::Regex;

/// `[sign][coef]var[sign[coef]var]=[sign]const`, where a number is `digits`
/// or `digits? '.' digits` and a variable is one ASCII letter.
static EQUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]*\.?[0-9]+)?[a-zA-Z]([+-]([0-9]*\.?[0-9]+)?[a-zA-Z])?=[+-]?[0-9]*\.?[0-9]+$")
        .expect("valid regex literal")
});

/// Returns true if the input matches the equation grammar in full.
pub(crate) fn is_well_formed(input: &str) -> bool {
    EQUATION.is_match(input)
}
