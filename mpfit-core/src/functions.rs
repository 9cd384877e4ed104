//! The bank of elementary functions.
//!
//! Every function returns its value together with the first and second
//! derivative. Inputs outside the real domain (e.g. `ln(0)`, `1/0`) are not
//! guarded: the floating point result (`inf`, `NaN`) is passed on.
use crate::derivatives::{DerivativeOrder, Derivatives1, Derivatives2};
use crate::polynomial::{SparsePolynomial1, SparsePolynomial2};
use std::fmt;

/// Elementary functions of a single variable.
#[derive(Clone, Debug, PartialEq)]
pub enum Function1 {
    /// `x`
    Identity,
    /// `a + b x`
    Linear { a: f64, b: f64 },
    /// `x^p`
    Power(f64),
    /// `1 / x`
    Inverse,
    /// `exp(p x)`
    Exponential(f64),
    /// `ln(x)`
    Log,
    /// Sparse polynomial in `x`.
    Polynomial(SparsePolynomial1),
}

impl Function1 {
    pub fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        match self {
            Self::Identity => Derivatives1::identity(x, order),
            Self::Linear { a, b } => {
                Derivatives1::new(a + b * x, if order.first() { *b } else { 0.0 }, 0.0)
            }
            Self::Power(p) => {
                let f = x.powf(*p);
                let fx = if order.first() { p * f / x } else { 0.0 };
                let fxx = if order.second() { (p - 1.0) * fx / x } else { 0.0 };
                Derivatives1::new(f, fx, fxx)
            }
            Self::Inverse => {
                let f = x.recip();
                let fx = if order.first() { -f / x } else { 0.0 };
                let fxx = if order.second() { -2.0 * fx / x } else { 0.0 };
                Derivatives1::new(f, fx, fxx)
            }
            Self::Exponential(p) => {
                let f = (p * x).exp();
                let fx = if order.first() { p * f } else { 0.0 };
                let fxx = if order.second() { p * fx } else { 0.0 };
                Derivatives1::new(f, fx, fxx)
            }
            Self::Log => {
                let fx = if order.first() { x.recip() } else { 0.0 };
                let fxx = if order.second() { -fx / x } else { 0.0 };
                Derivatives1::new(x.ln(), fx, fxx)
            }
            Self::Polynomial(p) => p.evaluate(x, order),
        }
    }
}

impl Function1 {
    /// Formats the function with `v` as the name of its variable.
    pub(crate) fn fmt_with(&self, f: &mut fmt::Formatter<'_>, v: char) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "{v}"),
            Self::Linear { a, b } => write!(f, "{a} + {b}*{v}"),
            Self::Power(p) => write!(f, "{v}^{p}"),
            Self::Inverse => write!(f, "1/{v}"),
            Self::Exponential(p) => write!(f, "exp({p}*{v})"),
            Self::Log => write!(f, "ln({v})"),
            Self::Polynomial(p) => write!(f, "{p}"),
        }
    }
}

impl fmt::Display for Function1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, 'x')
    }
}

/// Elementary functions of two variables.
#[derive(Clone, Debug, PartialEq)]
pub enum Function2 {
    /// A function of `x` only.
    X(Function1),
    /// A function of `y` only.
    Y(Function1),
    /// `a + b x + c y`
    Linear { a: f64, b: f64, c: f64 },
    /// Sparse polynomial in `x` and `y`, Horner evaluation.
    Polynomial(SparsePolynomial2),
    /// Sparse polynomial in `x` and `y`, direct summation over the terms.
    DirectPolynomial(SparsePolynomial2),
}

impl Function2 {
    pub fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        match self {
            Self::X(g) => Derivatives2::from_x(g.evaluate(x, order)),
            Self::Y(g) => Derivatives2::from_y(g.evaluate(y, order)),
            Self::Linear { a, b, c } => {
                let mut d = Derivatives2::constant(a + b * x + c * y);
                if order.first() {
                    d.fx = *b;
                    d.fy = *c;
                }
                d
            }
            Self::Polynomial(p) => p.evaluate(x, y, order),
            Self::DirectPolynomial(p) => p.evaluate_direct(x, y, order),
        }
    }
}

impl fmt::Display for Function2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X(g) => write!(f, "{g}"),
            Self::Y(g) => g.fmt_with(f, 'y'),
            Self::Linear { a, b, c } => write!(f, "{a} + {b}*x + {c}*y"),
            Self::Polynomial(p) | Self::DirectPolynomial(p) => write!(f, "{p}"),
        }
    }
}
