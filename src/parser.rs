use std::fmt::Debug;

use crate::result::{describe, ParseResult};

/// The fundamental parsing construct for descent. Every grammar function is a rule, and
/// rules come with combinators for modifying their behavior.
pub trait Rule<'i, T> {
    /// Parse a value from the start of `input`. On fail, the returned remainder is `input`.
    fn parse(&self, input: &'i str) -> ParseResult<'i, T>;

    /// Map the output value using a mapping function.
    fn map<V>(self, f: impl Fn(T) -> V) -> impl Rule<'i, V>
    where
        Self: Sized,
    {
        move |input: &'i str| self.parse(input).map(&f)
    }

    /// Try another rule from the same input if this one fails.
    fn or(self, other: impl Rule<'i, T>) -> impl Rule<'i, T>
    where
        Self: Sized,
    {
        move |input: &'i str| {
            let res = self.parse(input);
            if res.is_match() {
                return res;
            }
            other.parse(input)
        }
    }

    /// Print every invocation of this rule and its outcome. Meant for debugging grammars.
    fn traced(self, name: &'static str) -> impl Rule<'i, T>
    where
        Self: Sized,
        T: Debug,
    {
        move |input: &'i str| {
            let res = self.parse(input);
            println!("[{name}] {input:?} => {}", describe(&res));
            res
        }
    }
}

impl<'i, T, F> Rule<'i, T> for F
where
    F: Fn(&'i str) -> ParseResult<'i, T>,
{
    fn parse(&self, input: &'i str) -> ParseResult<'i, T> {
        self(input)
    }
}
