//! The expression grammar. Each rule takes the remaining input and hands back what it
//! parsed together with the unconsumed suffix; a rule that does not match returns the
//! input it was given, so callers can try alternatives from the same spot.
//!
//! ```text
//! expression     = additive
//! additive       = multiplicative (("+" | "-") multiplicative)*
//! multiplicative = operand (("*" | "/") operand)*
//! operand        = bracket_expr | number
//! bracket_expr   = "(" expression ")"
//! number         = "-"? fractional
//! fractional     = unsigned ("." unsigned)?
//! unsigned       = digit+
//! ```
//!
//! Operator chains are folded in a loop, so stack depth grows with bracket nesting only.

use crate::{
    parsers::{digit, first_of, keyword},
    BinaryOp, Expr, Number, ParseResult, Rule,
};

const ADDITIVE: &[&str] = &["+", "-"];
const MULTIPLICATIVE: &[&str] = &["*", "/"];

/// One or more digits, most significant first. Runs too long for [i128] round to the
/// nearest `f64`, which is infinite past [f64::MAX].
pub fn unsigned_integer(input: &str) -> ParseResult<'_, Number> {
    let mut value: Option<Number> = None;
    let mut rest = input;
    while let (Some(d), after) = digit(rest).into_parts() {
        value = Some(match value {
            Some(v) => v.push_digit(d),
            None => Number::Integer(i128::from(d)),
        });
        rest = after;
    }
    match value {
        Some(Number::Decimal(_)) => {
            let digits = &input[..input.len() - rest.len()];
            match Number::parse_decimal(digits) {
                Some(value) => ParseResult::matched(value, rest),
                None => ParseResult::no_match(input),
            }
        }
        Some(value) => ParseResult::matched(value, rest),
        None => ParseResult::no_match(input),
    }
}

/// An unsigned integer with an optional fractional part. A `.` that is not followed by
/// digits is left in the remainder.
///
/// The value is read from the consumed text, so every fraction digit counts by position
/// (`1.05` is `1.05`) and fractions of any length round to the nearest `f64`.
pub fn fractional(input: &str) -> ParseResult<'_, Number> {
    let (Some(whole), rest) = unsigned_integer(input).into_parts() else {
        return ParseResult::no_match(input);
    };
    let (Some(_), digits) = keyword(rest, &["."]).into_parts() else {
        return ParseResult::matched(whole, rest);
    };
    let (Some(_), after) = unsigned_integer(digits).into_parts() else {
        return ParseResult::matched(whole, rest);
    };
    match Number::parse_decimal(&input[..input.len() - after.len()]) {
        Some(value) => ParseResult::matched(value, after),
        None => ParseResult::matched(whole, rest),
    }
}

/// A fractional number with an optional leading `-`. The sign is only consumed together
/// with the number after it.
pub fn number(input: &str) -> ParseResult<'_, Number> {
    let Some(unsigned) = input.strip_prefix('-') else {
        return fractional(input);
    };
    match fractional(unsigned).into_parts() {
        (Some(n), rest) => ParseResult::matched(-n, rest),
        (None, _) => ParseResult::no_match(input),
    }
}

/// A parenthesized expression. Nothing is consumed unless both brackets and the
/// expression between them parse.
pub fn bracket_expr(input: &str) -> ParseResult<'_, Expr> {
    let (Some(_), inner) = keyword(input, &["("]).into_parts() else {
        return ParseResult::no_match(input);
    };
    let (Some(expr), rest) = expression(inner).into_parts() else {
        return ParseResult::no_match(input);
    };
    let (Some(_), rest) = keyword(rest, &[")"]).into_parts() else {
        return ParseResult::no_match(input);
    };
    ParseResult::matched(Expr::brackets(expr), rest)
}

pub fn operand(input: &str) -> ParseResult<'_, Expr> {
    let rules: [fn(&str) -> ParseResult<'_, Expr>; 2] = [bracket_expr, number_operand];
    first_of(input, &rules)
}

fn number_operand(input: &str) -> ParseResult<'_, Expr> {
    number(input).map(Expr::Number)
}

pub fn multiplicative(input: &str) -> ParseResult<'_, Expr> {
    binary_chain(input, operand, MULTIPLICATIVE)
}

pub fn additive(input: &str) -> ParseResult<'_, Expr> {
    binary_chain(input, multiplicative, ADDITIVE)
}

/// Parse an expression from the start of `input`. Trailing text is returned as the
/// remainder rather than treated as a failure; see [crate::parse] for a strict variant.
pub fn expression(input: &str) -> ParseResult<'_, Expr> {
    let rules: [fn(&str) -> ParseResult<'_, Expr>; 1] = [additive];
    first_of(input, &rules)
}

/// Left-associative chain of `operand`s joined by `operators`. An operator with no operand
/// after it ends the chain and stays in the remainder.
fn binary_chain<'i>(
    input: &'i str,
    operand: impl Rule<'i, Expr>,
    operators: &[&'static str],
) -> ParseResult<'i, Expr> {
    let (Some(mut left), mut rest) = operand.parse(input).into_parts() else {
        return ParseResult::no_match(input);
    };
    loop {
        let (Some(symbol), after_op) = keyword(rest, operators).into_parts() else {
            break;
        };
        let (Some(right), after) = operand.parse(after_op).into_parts() else {
            break;
        };
        let Some(op) = BinaryOp::from_symbol(symbol) else {
            break;
        };
        left = Expr::binary(op, left, right);
        rest = after;
    }
    ParseResult::matched(left, rest)
}
