use crate::ParseResult;

/// Match the first of `keywords` that is a prefix of `input`, trying them in order.
/// Overlapping keywords must be listed longest first.
pub fn keyword<'i>(input: &'i str, keywords: &[&'static str]) -> ParseResult<'i, &'static str> {
    keywords
        .iter()
        .find_map(|kw| input.strip_prefix(*kw).map(|rest| ParseResult::matched(*kw, rest)))
        .unwrap_or_else(|| ParseResult::no_match(input))
}

/// Apply each rule to the same input and return the first match. Later rules are not run
/// once one succeeds.
pub fn first_of<'i, T>(
    input: &'i str,
    rules: &[for<'a> fn(&'a str) -> ParseResult<'a, T>],
) -> ParseResult<'i, T> {
    for rule in rules {
        let res = rule(input);
        if res.is_match() {
            return res;
        }
    }
    ParseResult::no_match(input)
}

/// Parse a single ASCII digit as its value.
pub fn digit(input: &str) -> ParseResult<'_, u8> {
    match input.as_bytes().first() {
        Some(c @ b'0'..=b'9') => ParseResult::matched(c - b'0', &input[1..]),
        _ => ParseResult::no_match(input),
    }
}
