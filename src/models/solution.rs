//! Solution model.
//!
//! A solution assigns a value to each of the two variables of a solved
//! system. On the wire it is a JSON array of `{"variable", "coefficient"}`
//! records, matching the format clients of the service already consume.

use serde::{Deserialize, Serialize};

/// The value of one variable in a solved system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableValue {
    /// The single-letter variable name.
    pub variable: char,
    /// The solved value of the variable.
    #[serde(rename = "coefficient")]
    pub value: f64,
}

impl VariableValue {
    /// Creates a new variable assignment.
    pub fn new(variable: char, value: f64) -> Self {
        Self { variable, value }
    }
}

/// The unique solution of a two-variable linear system.
///
/// Always holds exactly two entries, ordered by variable name.
///
/// # Examples
///
/// ```
/// use equation_solver::models::{Solution, VariableValue};
///
/// let solution = Solution::new([VariableValue::new('x', 3.0), VariableValue::new('y', 2.0)]);
/// assert_eq!(solution.value_of('y'), Some(2.0));
/// assert_eq!(
///     serde_json::to_string(&solution).unwrap(),
///     r#"[{"variable":"x","coefficient":3.0},{"variable":"y","coefficient":2.0}]"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution([VariableValue; 2]);

impl Solution {
    /// Creates a solution from two variable assignments.
    pub fn new(values: [VariableValue; 2]) -> Self {
        Self(values)
    }

    /// Returns both assignments in variable order.
    pub fn values(&self) -> &[VariableValue; 2] {
        &self.0
    }

    /// Returns the value assigned to `variable`, if it is part of this solution.
    pub fn value_of(&self, variable: char) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.variable == variable)
            .map(|entry| entry.value)
    }

    /// Iterates over the assignments in variable order.
    pub fn iter(&self) -> impl Iterator<Item = &VariableValue> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        Solution::new([VariableValue::new('a', -1.5), VariableValue::new('b', 4.0)])
    }

    #[test]
    fn test_value_of_known_and_unknown_variable() {
        let solution = sample();
        assert_eq!(solution.value_of('a'), Some(-1.5));
        assert_eq!(solution.value_of('b'), Some(4.0));
        assert_eq!(solution.value_of('c'), None);
    }

    #[test]
    fn test_serializes_as_array_with_coefficient_key() {
        let json = serde_json::to_value(sample()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["variable"], "a");
        assert_eq!(entries[0]["coefficient"], -1.5);
        assert_eq!(entries[1]["variable"], "b");
        assert!(entries[0].get("value").is_none());
    }

    #[test]
    fn test_deserializes_from_wire_format() {
        let json = r#"[{"variable":"x","coefficient":3.0},{"variable":"y","coefficient":2.0}]"#;
        let solution: Solution = serde_json::from_str(json).unwrap();
        assert_eq!(solution.value_of('x'), Some(3.0));
        assert_eq!(solution.iter().count(), 2);
    }
}
