//! A recursive-descent parser for arithmetic expressions over integer and decimal
//! literals, unary minus, brackets and `+ - * /`.
//!
//! Every rule is a plain function from the remaining input to a [ParseResult]. Start from
//! [expression] to parse a prefix of some text, or [parse] to require the whole input.

pub mod ast;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod parsers;
pub mod result;

pub use ast::{BinaryOp, Expr, Number};
pub use error::ParseError;
pub use grammar::expression;
pub use parser::Rule;
pub use result::ParseResult;

/// Parse an expression that spans all of `input`.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    match expression(input).into_parts() {
        (Some(expr), "") => Ok(expr),
        (Some(_), rest) => Err(ParseError::UnexpectedInput(rest.to_string())),
        (None, _) => Err(ParseError::NoMatch),
    }
}
