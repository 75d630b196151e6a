use std::{fmt, ops::Neg};

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Digits with no fractional part, accumulated exactly.
    Integer(i128),
    /// A literal with a fractional part, or an integer too large for [i128].
    Decimal(f64),
}

impl Number {
    /// Shift a digit in at the least significant end: `self * 10 + digit`. Integers that
    /// would overflow continue as [Number::Decimal] and lose precision from there on.
    pub fn push_digit(self, digit: u8) -> Number {
        match self {
            Number::Integer(n) => n
                .checked_mul(10)
                .and_then(|n| n.checked_add(i128::from(digit)))
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Decimal(n as f64 * 10.0 + f64::from(digit))),
            Number::Decimal(n) => Number::Decimal(n * 10.0 + f64::from(digit)),
        }
    }

    /// The nearest `f64` to a literal of ASCII digits with at most one `.`. Values past
    /// [f64::MAX] are infinite.
    pub fn parse_decimal(text: &str) -> Option<Number> {
        text.parse().ok().map(Number::Decimal)
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Decimal(n) => n,
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(n) => n
                .checked_neg()
                .map(Number::Integer)
                .unwrap_or(Number::Decimal(-(n as f64))),
            Number::Decimal(n) => Number::Decimal(-n),
        }
    }
}

impl From<i128> for Number {
    fn from(n: i128) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Decimal(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            // Debug keeps the `.0` on whole decimals.
            Number::Decimal(n) => write!(f, "{n:?}"),
        }
    }
}

/// Binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl BinaryOp {
    /// Returns the operator character this operation is written with.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed expression tree. Trees are never modified after a rule returns them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    /// A parenthesized sub-expression, kept as its own node so grouping stays visible.
    Brackets(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn number(n: impl Into<Number>) -> Self {
        Expr::Number(n.into())
    }

    pub fn int(n: i128) -> Self {
        Expr::Number(Number::Integer(n))
    }

    pub fn decimal(n: f64) -> Self {
        Expr::Number(Number::Decimal(n))
    }

    pub fn brackets(inner: Expr) -> Self {
        Expr::Brackets(Box::new(inner))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    /// Render the tree in tagged prefix form, e.g. `(+ 2 (* 3 4))`.
    pub fn sexpr(&self) -> String {
        match self {
            Expr::Number(n) => n.to_string(),
            Expr::Brackets(inner) => format!("(brackets {})", inner.sexpr()),
            Expr::Binary(op, left, right) => {
                format!("({op} {} {})", left.sexpr(), right.sexpr())
            }
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Number(n)
    }
}

/// Infix rendering. Only bracket nodes print parentheses, so a parsed tree renders back to
/// its source text up to number spelling.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Brackets(inner) => write!(f, "({inner})"),
            Expr::Binary(op, left, right) => write!(f, "{left}{op}{right}"),
        }
    }
}
