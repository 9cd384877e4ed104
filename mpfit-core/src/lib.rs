//! Analytic first and second derivatives of empirical fit functions.
//!
//! The crate provides sparse polynomials with Horner evaluation, a bank of
//! elementary functions and sum-of-products expression trees of one or two
//! variables. Every evaluation returns the value together with all first
//! and second partial derivatives, propagated exactly with the chain,
//! product and sum rules.
#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]

pub mod batch;
mod derivatives;
mod errors;
mod evaluate;
pub mod expression;
mod functions;
pub mod parameter;
mod polynomial;

pub use batch::{BatchDerivatives1, BatchDerivatives2};
pub use derivatives::{DerivativeOrder, Derivatives1, Derivatives2};
pub use errors::{FitError, FitResult};
pub use evaluate::{Bivariate, Univariate};
pub use functions::{Function1, Function2};
pub use polynomial::{SparsePolynomial1, SparsePolynomial2};
