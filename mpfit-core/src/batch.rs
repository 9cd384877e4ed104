//! Elementwise evaluation over arrays of input values.
//!
//! The batch is handed to [ndarray::Zip] as a whole. With the `rayon`
//! feature the same call is evaluated in parallel.
use crate::derivatives::{Derivatives1, Derivatives2};
use crate::errors::{FitError, FitResult};
use ndarray::{Array1, ArrayView1, Zip};

/// Values and derivatives of a function of one variable for a batch of inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchDerivatives1 {
    pub f: Array1<f64>,
    pub fx: Array1<f64>,
    pub fxx: Array1<f64>,
}

impl From<Array1<Derivatives1>> for BatchDerivatives1 {
    fn from(d: Array1<Derivatives1>) -> Self {
        Self {
            f: d.mapv(|d| d.f),
            fx: d.mapv(|d| d.fx),
            fxx: d.mapv(|d| d.fxx),
        }
    }
}

/// Values and derivatives of a function of two variables for a batch of inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchDerivatives2 {
    pub f: Array1<f64>,
    pub fx: Array1<f64>,
    pub fy: Array1<f64>,
    pub fxx: Array1<f64>,
    pub fxy: Array1<f64>,
    pub fyy: Array1<f64>,
}

impl From<Array1<Derivatives2>> for BatchDerivatives2 {
    fn from(d: Array1<Derivatives2>) -> Self {
        Self {
            f: d.mapv(|d| d.f),
            fx: d.mapv(|d| d.fx),
            fy: d.mapv(|d| d.fy),
            fxx: d.mapv(|d| d.fxx),
            fxy: d.mapv(|d| d.fxy),
            fyy: d.mapv(|d| d.fyy),
        }
    }
}

/// Applies `f` to every element of `x`.
pub fn map1<T, F>(x: ArrayView1<f64>, f: F) -> Array1<T>
where
    T: Send,
    F: Fn(f64) -> T + Sync + Send,
{
    tracing::trace!(len = x.len(), "batch evaluation");
    let zip = Zip::from(&x);
    #[cfg(feature = "rayon")]
    let out = zip.par_map_collect(|&x| f(x));
    #[cfg(not(feature = "rayon"))]
    let out = zip.map_collect(|&x| f(x));
    out
}

/// Applies `f` to every pair of elements of `x` and `y`.
pub fn map2<T, F>(x: ArrayView1<f64>, y: ArrayView1<f64>, f: F) -> FitResult<Array1<T>>
where
    T: Send,
    F: Fn(f64, f64) -> T + Sync + Send,
{
    if x.len() != y.len() {
        return Err(FitError::IncompatibleShapes(x.len(), y.len()));
    }
    tracing::trace!(len = x.len(), "batch evaluation");
    let zip = Zip::from(&x).and(&y);
    #[cfg(feature = "rayon")]
    let out = zip.par_map_collect(|&x, &y| f(x, y));
    #[cfg(not(feature = "rayon"))]
    let out = zip.map_collect(|&x, &y| f(x, y));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn pairwise() {
        let x = arr1(&[1.0, 2.0, 3.0]);
        let y = arr1(&[4.0, 5.0, 6.0]);
        let z = map2(x.view(), y.view(), |x, y| x * y).unwrap();
        assert_eq!(z, arr1(&[4.0, 10.0, 18.0]));
    }

    #[test]
    fn incompatible_shapes() {
        let x = arr1(&[1.0, 2.0, 3.0]);
        let y = arr1(&[4.0, 5.0]);
        assert!(matches!(
            map2(x.view(), y.view(), |x, y| x * y),
            Err(FitError::IncompatibleShapes(3, 2))
        ));
    }

    #[test]
    fn split_derivatives() {
        let x = arr1(&[1.0, 2.0]);
        let d: BatchDerivatives1 =
            map1(x.view(), |x| Derivatives1::new(x * x, 2.0 * x, 2.0)).into();
        assert_eq!(d.f, arr1(&[1.0, 4.0]));
        assert_eq!(d.fx, arr1(&[2.0, 4.0]));
        assert_eq!(d.fxx, arr1(&[2.0, 2.0]));
    }
}
