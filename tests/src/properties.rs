use descent::{
    grammar::{bracket_expr, expression, fractional, number, unsigned_integer},
    Number, ParseResult,
};
use proptest::prelude::*;

/// A rule either consumes a prefix of its input or reports the input untouched.
fn check_remainder<T>(input: &str, res: &ParseResult<'_, T>) -> Result<(), TestCaseError> {
    prop_assert!(input.ends_with(res.rest), "{:?} is not a suffix of {input:?}", res.rest);
    if !res.is_match() {
        prop_assert_eq!(res.rest, input);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_digits_parse_as_base10(digits in "[0-9]{1,30}") {
        let expected: i128 = digits.parse().unwrap();
        prop_assert_eq!(
            unsigned_integer(&digits).into_parts(),
            (Some(Number::Integer(expected)), "")
        );
    }

    #[test]
    fn test_remainder_is_suffix(input in "[0-9().+*/ -]{0,24}") {
        check_remainder(&input, &unsigned_integer(&input))?;
        check_remainder(&input, &fractional(&input))?;
        check_remainder(&input, &number(&input))?;
        check_remainder(&input, &bracket_expr(&input))?;
        check_remainder(&input, &expression(&input))?;
    }

    #[test]
    fn test_parse_is_deterministic(input in "[0-9().+*/-]{0,24}") {
        prop_assert_eq!(expression(&input), expression(&input));
    }

    #[test]
    fn test_display_reparses(input in "[0-9()+*/-]{1,24}") {
        if let Ok(expr) = descent::parse(&input) {
            prop_assert_eq!(descent::parse(&expr.to_string()), Ok(expr));
        }
    }
}
