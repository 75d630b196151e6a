use proc_macro::TokenStream;
use syn::{parse_macro_input, LitStr};

mod codegen;

/// Parse a literal expression at compile time, expanding to the [`descent::Expr`] it
/// describes. The whole literal must parse, otherwise compilation fails.
///
/// ```ignore
/// let tree = descent_macros::expr!("2+3*4");
/// assert_eq!(tree.sexpr(), "(+ 2 (* 3 4))");
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    let span = lit.span();
    let tokens = descent::parse(&lit.value())
        .map_err(|err| syn::Error::new(span, err))
        .and_then(|expr| codegen::expr_tokens(&expr, span));
    match tokens {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
