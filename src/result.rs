use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
/// The output of a [crate::parser::Rule].
pub struct ParseResult<'i, T> {
    /// The successfully-parsed value, or [None] if the rule did not match.
    pub success: Option<T>,
    /// The unconsumed suffix of the input. On a failed match this is always the
    /// input the rule was given.
    pub rest: &'i str,
}

impl<'i, T> ParseResult<'i, T> {
    /// Generate a [ParseResult] holding a value and the input left after it.
    pub fn matched(value: T, rest: &'i str) -> Self {
        ParseResult {
            success: Some(value),
            rest,
        }
    }

    /// Generate a failed [ParseResult]. Takes the input the rule started from.
    pub fn no_match(input: &'i str) -> Self {
        ParseResult {
            success: None,
            rest: input,
        }
    }

    /// Map the output value using a mapping function.
    pub fn map<V>(self, f: impl FnOnce(T) -> V) -> ParseResult<'i, V> {
        ParseResult {
            success: self.success.map(f),
            rest: self.rest,
        }
    }

    pub fn is_match(&self) -> bool {
        self.success.is_some()
    }

    /// Number of bytes of `input` this result consumed. `input` must be the text the
    /// producing rule was called with.
    pub fn consumed(&self, input: &str) -> usize {
        input.len() - self.rest.len()
    }

    pub fn into_parts(self) -> (Option<T>, &'i str) {
        (self.success, self.rest)
    }
}

impl<'i, T> From<ParseResult<'i, T>> for (Option<T>, &'i str) {
    fn from(res: ParseResult<'i, T>) -> Self {
        res.into_parts()
    }
}

pub(crate) fn describe<T: Debug>(res: &ParseResult<'_, T>) -> String {
    match &res.success {
        Some(value) => format!("{value:?}, rest {:?}", res.rest),
        None => "no match".to_string(),
    }
}
