//! Scalar values and runtime numeric kind dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MatrizError, Result};

/// The closed set of numeric kinds a [`Scalar`] can carry.
///
/// Every matrix is homogeneous in one of these kinds; the kind decides how
/// tokens are parsed and which arithmetic rules [`Scalar::apply`] uses.
///
/// # Examples
///
/// ```
/// use matriz::{NumericKind, Scalar};
///
/// let kind: NumericKind = "i64".parse().expect("known kind name");
/// assert_eq!(kind.parse_token("-7").expect("valid token"), Scalar::I64(-7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
}

impl NumericKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [NumericKind; 4] = [Self::I32, Self::I64, Self::F32, Self::F64];

    /// Returns the kind's canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Returns true for the integer kinds.
    ///
    /// Integer kinds use truncating division and report a zero divisor as
    /// an error; float kinds follow IEEE-754 and divide by zero silently.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    /// Parses a text token as a value of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotANumber`] when the token does not parse as
    /// the requested kind (for the integer kinds this includes tokens with a
    /// fractional part, such as `"2.5"`).
    pub fn parse_token(self, token: &str) -> Result<Scalar> {
        let parsed = match self {
            Self::I32 => token.parse::<i32>().map(Scalar::I32).ok(),
            Self::I64 => token.parse::<i64>().map(Scalar::I64).ok(),
            Self::F32 => token.parse::<f32>().map(Scalar::F32).ok(),
            Self::F64 => token.parse::<f64>().map(Scalar::F64).ok(),
        };
        parsed.ok_or_else(|| MatrizError::not_a_number(token, self.name()))
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = MatrizError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            other => Err(MatrizError::not_a_number(other, "numeric kind name")),
        }
    }
}

/// An elementwise arithmetic operation.
///
/// A plain tag; the concrete semantics are chosen per cell by
/// [`Scalar::apply`] from the operands' [`NumericKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl Op {
    /// Returns the conventional operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Two's-complement arithmetic for the integer kinds. Add/sub/mul wrap on
// overflow; division truncates toward zero, checks the divisor, and wraps
// the single overflowing quotient (MIN / -1).
macro_rules! int_apply {
    ($kind:ident, $a:expr, $b:expr, $op:expr) => {
        match $op {
            Op::Add => Ok(Scalar::$kind($a.wrapping_add($b))),
            Op::Sub => Ok(Scalar::$kind($a.wrapping_sub($b))),
            Op::Mul => Ok(Scalar::$kind($a.wrapping_mul($b))),
            Op::Div => {
                if $b == 0 {
                    Err(MatrizError::DivisionByZero)
                } else {
                    Ok(Scalar::$kind($a.wrapping_div($b)))
                }
            }
        }
    };
}

// IEEE-754 arithmetic for the float kinds; a zero divisor yields an
// infinity or NaN, never an error.
macro_rules! float_apply {
    ($kind:ident, $a:expr, $b:expr, $op:expr) => {
        Ok(Scalar::$kind(match $op {
            Op::Add => $a + $b,
            Op::Sub => $a - $b,
            Op::Mul => $a * $b,
            Op::Div => $a / $b,
        }))
    };
}

/// A single numeric value tagged with its runtime [`NumericKind`].
///
/// All arithmetic in this crate funnels through [`Scalar::apply`], which
/// matches on the pair of variants and applies the rules of the shared
/// kind. Kinds never mix silently: combining an `I32` with an `F64` is an
/// error, not a promotion.
///
/// # Examples
///
/// ```
/// use matriz::{Op, Scalar};
///
/// let sum = Scalar::apply(Scalar::I32(2), Scalar::I32(3), Op::Add).expect("same kind");
/// assert_eq!(sum, Scalar::I32(5));
///
/// assert!(Scalar::apply(Scalar::I32(2), Scalar::F64(3.0), Op::Add).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// 32-bit signed integer value.
    I32(i32),
    /// 64-bit signed integer value.
    I64(i64),
    /// 32-bit float value.
    F32(f32),
    /// 64-bit float value.
    F64(f64),
}

impl Scalar {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub fn kind(self) -> NumericKind {
        match self {
            Self::I32(_) => NumericKind::I32,
            Self::I64(_) => NumericKind::I64,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
        }
    }

    /// Applies `op` to two values of the same kind.
    ///
    /// The result always carries the operands' kind. Integer kinds wrap on
    /// overflow and truncate on division; float kinds follow IEEE-754, so a
    /// float division by zero succeeds with an infinity or NaN.
    ///
    /// # Errors
    ///
    /// - [`MatrizError::KindMismatch`] when the operands' kinds differ.
    /// - [`MatrizError::DivisionByZero`] for an integer division whose
    ///   divisor is zero.
    pub fn apply(a: Scalar, b: Scalar, op: Op) -> Result<Scalar> {
        match (a, b) {
            (Self::I32(x), Self::I32(y)) => int_apply!(I32, x, y, op),
            (Self::I64(x), Self::I64(y)) => int_apply!(I64, x, y, op),
            (Self::F32(x), Self::F32(y)) => float_apply!(F32, x, y, op),
            (Self::F64(x), Self::F64(y)) => float_apply!(F64, x, y, op),
            (a, b) => Err(MatrizError::KindMismatch {
                expected: a.kind(),
                actual: b.kind(),
            }),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
