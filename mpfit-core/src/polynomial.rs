//! Sparse polynomials in one and two variables.
//!
//! Only the nonzero coefficients are stored. The list has to be sorted in
//! strictly descending order of the exponents (for two variables: by the
//! `x` exponent first, then by the `y` exponent). The list
//! ```text
//! [[4, 0.1], [2, 0.2], [1, 1.2], [0, 0.5]]
//! ```
//! corresponds to `p(x) = 0.5 + 1.2 x + 0.2 x^2 + 0.1 x^4` and
//! ```text
//! [[1, 1, 0.1], [0, 2, 0.2], [0, 1, 1.2], [0, 0, 0.5]]
//! ```
//! to `p(x, y) = 0.5 + 1.2 y + 0.2 y^2 + 0.1 x y`.
//!
//! Polynomials are evaluated with a Horner scheme that carries the first
//! and second derivatives along. The cost scales with the highest exponent,
//! not with the number of coefficients. The direct sum over the explicit
//! terms is available as an alternative and yields the same result.
use crate::derivatives::{DerivativeOrder, Derivatives1, Derivatives2};
use crate::errors::{FitError, FitResult};
use itertools::Itertools;
use std::fmt;

/// Sparse polynomial `p(x) = sum_n c_n x^n`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparsePolynomial1 {
    terms: Vec<(u32, f64)>,
}

impl SparsePolynomial1 {
    /// Creates a polynomial from `(exponent, coefficient)` pairs.
    pub fn new(terms: Vec<(u32, f64)>) -> FitResult<Self> {
        if let Some((a, b)) = terms.iter().tuple_windows().find(|(a, b)| a.0 <= b.0) {
            return Err(FitError::UnsortedCoefficients(format!(
                "exponent {} followed by {}",
                a.0, b.0
            )));
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[(u32, f64)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The largest exponent, `None` for an empty polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(|t| t.0)
    }

    /// Horner evaluation of the polynomial and its derivatives.
    pub fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        let mut p = Derivatives1::zero();
        let Some(degree) = self.degree() else {
            return p;
        };
        let mut rows = self.terms.iter().peekable();
        for n in (0..=degree).rev() {
            // exponents that are not listed have a zero coefficient
            let c = rows.next_if(|r| r.0 == n).map_or(0.0, |r| r.1);
            if order.second() {
                p.fxx = 2.0 * p.fx + x * p.fxx;
            }
            if order.first() {
                p.fx = p.f + x * p.fx;
            }
            p.f = c + x * p.f;
        }
        p
    }

    /// Direct summation over the explicit terms.
    pub fn evaluate_direct(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        let mut p = Derivatives1::zero();
        for &(n, c) in &self.terms {
            let n_i = n as i32;
            let nf = n as f64;
            p.f += c * x.powi(n_i);
            if order.first() && n > 0 {
                p.fx += nf * c * x.powi(n_i - 1);
            }
            if order.second() && n > 1 {
                p.fxx += nf * (nf - 1.0) * c * x.powi(n_i - 2);
            }
        }
        p
    }
}

impl fmt::Display for SparsePolynomial1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparsePolynomial1([{}])",
            self.terms
                .iter()
                .map(|(n, c)| format!("[{n}, {c}]"))
                .join(", ")
        )
    }
}

/// Sparse polynomial `p(x, y) = sum_ij c_ij x^i y^j`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparsePolynomial2 {
    terms: Vec<(u32, u32, f64)>,
}

impl SparsePolynomial2 {
    /// Creates a polynomial from `(x exponent, y exponent, coefficient)` triples.
    pub fn new(terms: Vec<(u32, u32, f64)>) -> FitResult<Self> {
        if let Some((a, b)) = terms
            .iter()
            .tuple_windows()
            .find(|(a, b)| (a.0, a.1) <= (b.0, b.1))
        {
            return Err(FitError::UnsortedCoefficients(format!(
                "exponents ({}, {}) followed by ({}, {})",
                a.0, a.1, b.0, b.1
            )));
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[(u32, u32, f64)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The largest `x` exponent, `None` for an empty polynomial.
    pub fn degree_x(&self) -> Option<u32> {
        self.terms.first().map(|t| t.0)
    }

    /// Horner evaluation of the polynomial and its derivatives.
    ///
    /// For every power of `x` the terms sharing that power form a
    /// polynomial `q(y)` that is evaluated with an inner Horner pass and
    /// then folded into the outer expansion in `x`.
    pub fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        let mut p = Derivatives2::zero();
        let Some(degree) = self.degree_x() else {
            return p;
        };
        let mut rows = self.terms.iter().peekable();
        for i in (0..=degree).rev() {
            let mut q = Derivatives1::zero();
            if let Some(j_max) = rows.peek().filter(|r| r.0 == i).map(|r| r.1) {
                for j in (0..=j_max).rev() {
                    let c = rows.next_if(|r| r.0 == i && r.1 == j).map_or(0.0, |r| r.2);
                    if order.second() {
                        q.fxx = 2.0 * q.fx + y * q.fxx;
                    }
                    if order.first() {
                        q.fx = q.f + y * q.fx;
                    }
                    q.f = c + y * q.f;
                }
            }
            // the second derivatives need the old first derivatives
            if order.second() {
                p.fyy = q.fxx + x * p.fyy;
                p.fxx = 2.0 * p.fx + x * p.fxx;
                p.fxy = p.fy + x * p.fxy;
            }
            if order.first() {
                p.fx = p.f + x * p.fx;
                p.fy = q.fx + x * p.fy;
            }
            p.f = q.f + x * p.f;
        }
        p
    }

    /// Direct summation over the explicit terms.
    pub fn evaluate_direct(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        let mut p = Derivatives2::zero();
        for &(i, j, c) in &self.terms {
            let (ii, jj) = (i as i32, j as i32);
            let (fi, fj) = (i as f64, j as f64);
            let xi = x.powi(ii);
            let yj = y.powi(jj);
            p.f += c * xi * yj;
            if order.first() {
                if i > 0 {
                    p.fx += fi * c * x.powi(ii - 1) * yj;
                }
                if j > 0 {
                    p.fy += fj * c * xi * y.powi(jj - 1);
                }
            }
            if order.second() {
                if i > 1 {
                    p.fxx += fi * (fi - 1.0) * c * x.powi(ii - 2) * yj;
                }
                if i > 0 && j > 0 {
                    p.fxy += fi * fj * c * x.powi(ii - 1) * y.powi(jj - 1);
                }
                if j > 1 {
                    p.fyy += fj * (fj - 1.0) * c * xi * y.powi(jj - 2);
                }
            }
        }
        p
    }
}

impl fmt::Display for SparsePolynomial2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparsePolynomial2([{}])",
            self.terms
                .iter()
                .map(|(i, j, c)| format!("[{i}, {j}, {c}]"))
                .join(", ")
        )
    }
}
