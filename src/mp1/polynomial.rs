use crate::core::{
    Bivariate, DerivativeOrder, Derivatives1, Derivatives2, FitError, FitResult, Function1,
    SparsePolynomial2,
};
use std::fmt;

/// Polynomial with exponential pre and post factors,
/// `x^postx y^posty p(x^prex, y^prey)`.
///
/// A pre exponent of 1 and a post exponent of 0 are neutral and skipped
/// during evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedPolynomial {
    pub pre: [f64; 2],
    pub post: [f64; 2],
    pub polynomial: SparsePolynomial2,
}

impl TransformedPolynomial {
    pub fn new(pre: [f64; 2], post: [f64; 2], polynomial: SparsePolynomial2) -> Self {
        Self {
            pre,
            post,
            polynomial,
        }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::new([1.0, 1.0], [0.0, 0.0], SparsePolynomial2::default())
    }

    pub fn is_empty(&self) -> bool {
        self.polynomial.is_empty()
    }
}

fn pre_transform(v: f64, exponent: f64, order: DerivativeOrder) -> Derivatives1 {
    if exponent == 1.0 {
        Derivatives1::identity(v, order)
    } else {
        Function1::Power(exponent).evaluate(v, order)
    }
}

impl Bivariate for TransformedPolynomial {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        let [prex, prey] = self.pre;
        let [postx, posty] = self.post;
        let mut p = if prex == 1.0 && prey == 1.0 {
            self.polynomial.evaluate(x, y, order)
        } else {
            let gx = pre_transform(x, prex, order);
            let gy = pre_transform(y, prey, order);
            self.polynomial
                .evaluate(gx.f, gy.f, order)
                .compose(gx, gy, order)
        };
        if postx != 0.0 {
            let f = Function1::Power(postx).evaluate(x, order);
            p = p.product(Derivatives2::from_x(f), order);
        }
        if posty != 0.0 {
            let f = Function1::Power(posty).evaluate(y, order);
            p = p.product(Derivatives2::from_y(f), order);
        }
        p
    }
}

fn exponent(v: f64, row: &[f64]) -> FitResult<u32> {
    if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Ok(v as u32)
    } else {
        Err(FitError::MalformedCoefficientBlock(format!(
            "exponents must be non-negative integers, got row {row:?}"
        )))
    }
}

/// Reads a coefficient block `[[prex, prey], [postx, posty], [i, j, c], ...]`.
impl TryFrom<Vec<Vec<f64>>> for TransformedPolynomial {
    type Error = FitError;

    fn try_from(block: Vec<Vec<f64>>) -> FitResult<Self> {
        let mut rows = block.into_iter();
        let mut pair = |name: &str| match rows.next().as_deref() {
            Some(&[a, b]) => Ok([a, b]),
            Some(row) => Err(FitError::MalformedCoefficientBlock(format!(
                "expected [{name}x, {name}y], got {row:?}"
            ))),
            None => Err(FitError::MalformedCoefficientBlock(format!(
                "missing the {name} exponent row"
            ))),
        };
        let pre = pair("pre")?;
        let post = pair("post")?;
        let terms = rows
            .map(|row| match row[..] {
                [i, j, c] => Ok((exponent(i, &row)?, exponent(j, &row)?, c)),
                _ => Err(FitError::MalformedCoefficientBlock(format!(
                    "expected [i, j, c], got {row:?}"
                ))),
            })
            .collect::<FitResult<_>>()?;
        Ok(Self::new(pre, post, SparsePolynomial2::new(terms)?))
    }
}

impl fmt::Display for TransformedPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransformedPolynomial(pre={:?}, post={:?}, {})",
            self.pre, self.post, self.polynomial
        )
    }
}
