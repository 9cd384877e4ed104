use crate::batch::{self, BatchDerivatives1, BatchDerivatives2};
use crate::derivatives::{DerivativeOrder, Derivatives1, Derivatives2};
use crate::errors::FitResult;
use crate::functions::{Function1, Function2};
use crate::polynomial::{SparsePolynomial1, SparsePolynomial2};
use ndarray::ArrayView1;

/// Anything that can be evaluated with derivatives as a function of one variable.
///
/// Implementors only provide the scalar [Univariate::evaluate]; the batch
/// version is derived from it.
pub trait Univariate: Sync {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1;

    fn evaluate_batch(&self, x: ArrayView1<f64>, order: DerivativeOrder) -> BatchDerivatives1 {
        batch::map1(x, |x| self.evaluate(x, order)).into()
    }
}

/// Anything that can be evaluated with derivatives as a function of two variables.
pub trait Bivariate: Sync {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2;

    fn evaluate_batch(
        &self,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
        order: DerivativeOrder,
    ) -> FitResult<BatchDerivatives2> {
        Ok(batch::map2(x, y, |x, y| self.evaluate(x, y, order))?.into())
    }
}

impl Univariate for Function1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        Function1::evaluate(self, x, order)
    }
}

impl Univariate for SparsePolynomial1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        SparsePolynomial1::evaluate(self, x, order)
    }
}

impl Bivariate for Function2 {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        Function2::evaluate(self, x, y, order)
    }
}

impl Bivariate for SparsePolynomial2 {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        SparsePolynomial2::evaluate(self, x, y, order)
    }
}
