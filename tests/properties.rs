//! Property tests for parsing and solving.

use proptest::prelude::*;

use equation_solver::models::VariableTerm;
use equation_solver::parser::parse;
use equation_solver::solver::solve;

/// Decimal values with at most two fractional digits, e.g. `-12.25`.
fn decimal() -> impl Strategy<Value = f64> {
    (-100_000i64..100_000).prop_map(|hundredths| hundredths as f64 / 100.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn single_term_parses_coefficient_and_constant(
        coefficient in decimal(),
        constant in decimal(),
        variable in proptest::char::range('a', 'z'),
    ) {
        let text = format!("{coefficient}{variable}={constant}");
        let equation = parse(&text).unwrap();

        prop_assert_eq!(equation.terms().iter().count(), 1);
        prop_assert_eq!(equation.terms().first(), &VariableTerm::new(variable, coefficient));
        prop_assert_eq!(equation.rhs(), constant);
    }

    #[test]
    fn implicit_unit_coefficient(negative in any::<bool>(), constant in decimal()) {
        let sign = if negative { "-" } else { "" };
        let equation = parse(&format!("{sign}q={constant}")).unwrap();

        let expected = if negative { -1.0 } else { 1.0 };
        prop_assert_eq!(equation.terms().first().coefficient, expected);
    }

    #[test]
    fn reparsing_is_idempotent(
        a in decimal(),
        b in decimal(),
        c in decimal(),
    ) {
        let text = format!("{a}x{b:+}y={c}");
        prop_assert_eq!(parse(&text).unwrap(), parse(&text).unwrap());
    }

    #[test]
    fn solving_recovers_known_solution(
        x0 in -1_000i32..1_000,
        y0 in -1_000i32..1_000,
        a1 in -20i32..20,
        b1 in -20i32..20,
        a2 in -20i32..20,
        b2 in -20i32..20,
    ) {
        prop_assume!(a1 * b2 - b1 * a2 != 0);

        let (x0, y0) = (f64::from(x0) / 4.0, f64::from(y0) / 4.0);
        let c1 = f64::from(a1) * x0 + f64::from(b1) * y0;
        let c2 = f64::from(a2) * x0 + f64::from(b2) * y0;

        let first = parse(&format!("{a1}x{b1:+}y={c1}")).unwrap();
        let second = parse(&format!("{a2}x{b2:+}y={c2}")).unwrap();
        let solution = solve(&first, &second).unwrap();

        prop_assert!((solution.value_of('x').unwrap() - x0).abs() < 1e-6);
        prop_assert!((solution.value_of('y').unwrap() - y0).abs() < 1e-6);
    }
}
