use exact_rational::{facade, Rational};

fn parse(s: &str) -> Rational {
    Rational::from_str_radix10(s).unwrap()
}

#[test]
fn recurring_decimal_reduces_to_a_third() {
    let mut r = parse("0.[3]");
    assert_eq!(r.to_fraction(), "0 1/3");
    let result = r.simplify(1000.0, || 0.0).unwrap();
    assert!(result, "1/3's walk completes and its exact-division test succeeds");
    assert_eq!(r.to_fraction(), "0 1/3");
}

#[test]
fn mixed_fraction_simplifies_and_keeps_its_sign() {
    let mut r = parse("-4 538/1284");
    let before = r.to_decimal(60).unwrap();
    assert_eq!(
        before,
        "-4.4[19003115264797507788161993769470404984423676012461059]"
    );

    let result = r.simplify(1000.0, || 0.0).unwrap();
    assert!(!result, "642/269's post-loop exact-division test fails");
    assert_eq!(r.to_fraction(), "-4 269/642");
}

#[test]
fn chained_operation_literal_scenario_reduces_exactly() {
    let mut r = parse("1/3");
    r.multiply(&parse("3/5"));
    r.multiply(&parse("9/7"));
    r.multiply(&parse("23/45"));
    r.multiply(&parse("12 45/87"));
    r.divide(&parse("99.75")).unwrap();
    r.simplify(1000.0, || 0.0).unwrap();
    assert_eq!(r.to_fraction(), "0 11132/674975");
}

#[test]
fn recurring_third_times_a_terminating_decimal_literal_scenario() {
    // 1/3 * 123.5 = 1/3 * 247/2 = 247/6 = 41 + 1/6, and 1/6 is 0.1[6].
    let mut a = parse("0.[3]");
    a.multiply(&parse("123.5"));
    assert_eq!(a.to_decimal(100).unwrap(), "41.1[6]");
}

#[test]
fn decimal_with_trailing_zero_denominator_renders_as_a_mixed_fraction() {
    let r = parse("123.5");
    assert_eq!(r.to_fraction(), "123 5/10");
}

#[test]
fn chained_multiply_divide_and_simplify_round_trip() {
    let a = parse("7/8");
    let b = parse("5/3");
    let mut c = facade::multiply(&a, &b);
    c.divide(&b).unwrap();
    c.simplify(1000.0, || 0.0).unwrap();
    assert_eq!(c.to_fraction(), a.to_fraction());
}

#[test]
fn integer_only_subtract_of_a_fractional_operand_discards_the_fraction() {
    let mut a = Rational::from_i64(5);
    let b = Rational::from_f64_mode(12.5, Some(false));
    a.subtract(&b);
    assert_eq!(a.value(), -7.0);
}

#[test]
fn multiplying_a_recurring_third_by_a_terminating_decimal() {
    let mut a = parse("0.[3]");
    let b = parse("123.5");
    a.multiply(&b);
    let rendered = a.to_decimal(20).unwrap();
    assert!(rendered.contains('['), "result should still recur: {rendered}");
}

#[test]
fn modulus_of_22_and_3_is_1() {
    let mut a = Rational::from_i64(22);
    let b = Rational::from_i64(3);
    a.modulus(&b).unwrap();
    assert_eq!(a.to_decimal(5).unwrap(), "1");
}

#[test]
fn comparisons_are_consistent_with_value() {
    let a = parse("1/3");
    let b = parse("2/3");
    assert!(a < b);
    assert!(b > a);
    assert_eq!(a, parse("2/6"));
}

#[test]
fn divide_by_zero_is_rejected_through_the_facade() {
    let a = Rational::from_i64(1);
    let zero = Rational::from_i64(0);
    assert!(facade::divide(&a, &zero).is_err());
}

#[test]
fn negative_zero_and_positive_zero_compare_equal() {
    let a = Rational::from_str_radix10("-0.0").unwrap();
    let b = Rational::from_i64(0);
    assert_eq!(a, b);
    assert!(!a.is_negative());
    assert!(!a.is_positive());
}

#[test]
fn simplify_on_an_already_exhausted_budget_still_returns_a_clean_result() {
    let mut r = parse("538/1284");
    let result = r.simplify(1.0, || 1_000_000.0).unwrap();
    assert!(!result, "a clock that's already past budget should try nothing");
    assert_eq!(r.to_fraction(), "0 538/1284");
}

#[test]
fn malformed_input_is_rejected_with_an_error() {
    assert!(Rational::from_str_radix10("3/").is_err());
    assert!(Rational::from_str_radix10("not a number").is_err());
    assert!(Rational::from_str_radix10("1/0").is_err());
}

#[test]
fn mode_override_forces_integer_only_even_for_fractional_text() {
    let r = Rational::from_str_radix10_mode("7/2", Some(true)).unwrap();
    assert!(r.is_integer());
}
