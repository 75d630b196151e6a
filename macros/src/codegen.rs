use descent::{BinaryOp, Expr, Number};
use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::{Error, Result};

/// Generate the code constructing `expr`. Errors are reported at `span`.
pub fn expr_tokens(expr: &Expr, span: Span) -> Result<TokenStream> {
    let stream = match expr {
        Expr::Number(n) => {
            let n = number_tokens(*n, span)?;
            quote! { ::descent::Expr::Number(#n) }
        }
        Expr::Brackets(inner) => {
            let inner = expr_tokens(inner, span)?;
            quote! { ::descent::Expr::brackets(#inner) }
        }
        Expr::Binary(op, left, right) => {
            let op = op_tokens(*op);
            let left = expr_tokens(left, span)?;
            let right = expr_tokens(right, span)?;
            quote! { ::descent::Expr::binary(#op, #left, #right) }
        }
    };
    Ok(stream)
}

fn number_tokens(n: Number, span: Span) -> Result<TokenStream> {
    let stream = match n {
        Number::Integer(n) => {
            let lit = Literal::i128_suffixed(n);
            quote! { ::descent::Number::Integer(#lit) }
        }
        Number::Decimal(n) if !n.is_finite() => {
            return Err(Error::new(span, format!("Number out of range: {n}")));
        }
        Number::Decimal(n) => {
            let lit = Literal::f64_suffixed(n);
            quote! { ::descent::Number::Decimal(#lit) }
        }
    };
    Ok(stream)
}

fn op_tokens(op: BinaryOp) -> TokenStream {
    match op {
        BinaryOp::Add => quote! { ::descent::BinaryOp::Add },
        BinaryOp::Sub => quote! { ::descent::BinaryOp::Sub },
        BinaryOp::Mul => quote! { ::descent::BinaryOp::Mul },
        BinaryOp::Div => quote! { ::descent::BinaryOp::Div },
    }
}
