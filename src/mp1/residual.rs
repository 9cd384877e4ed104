use super::polynomial::TransformedPolynomial;
use crate::core::{Bivariate, DerivativeOrder, Derivatives1, Derivatives2, FitResult};

/// A polynomial damped by `exp(-dd^k)`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGroup {
    pub k: i32,
    pub polynomial: TransformedPolynomial,
}

impl WeightedGroup {
    /// The weight `exp(-dd^k)` and its derivatives with respect to `dd`.
    fn weight(&self, dd: f64, order: DerivativeOrder) -> Derivatives1 {
        let k = self.k as f64;
        let e = (-dd.powi(self.k)).exp();
        let mut w = Derivatives1::constant(e);
        if order.first() {
            let ed = -k * dd.powi(self.k - 1);
            w.fx = e * ed;
            if order.second() {
                let mut edd = ed * ed;
                if self.k > 1 {
                    edd -= k * (k - 1.0) * dd.powi(self.k - 2);
                }
                w.fxx = e * edd;
            }
        }
        w
    }
}

impl Bivariate for WeightedGroup {
    fn evaluate(&self, tt: f64, dd: f64, order: DerivativeOrder) -> Derivatives2 {
        let p = self.polynomial.evaluate(tt, dd, order);
        p.product(Derivatives2::from_y(self.weight(dd, order)), order)
    }
}

/// Residual part of the reduced Helmholtz energy,
/// `p0(tt, dd) + sum_k exp(-dd^k) pk(tt, dd)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Residual {
    pub base: TransformedPolynomial,
    pub weighted: Vec<WeightedGroup>,
}

impl Residual {
    /// Builds the residual contribution from a list of coefficient blocks.
    ///
    /// The first block is not weighted, block `k` is weighted with
    /// `exp(-dd^k)`. Without any blocks the residual vanishes.
    pub fn from_blocks(blocks: Vec<Vec<Vec<f64>>>) -> FitResult<Self> {
        let mut blocks = blocks.into_iter();
        let base = match blocks.next() {
            Some(block) => block.try_into()?,
            None => TransformedPolynomial::zero(),
        };
        let weighted = blocks
            .zip(1..)
            .map(|(block, k)| {
                Ok(WeightedGroup {
                    k,
                    polynomial: block.try_into()?,
                })
            })
            .collect::<FitResult<_>>()?;
        Ok(Self { base, weighted })
    }
}

impl Bivariate for Residual {
    fn evaluate(&self, tt: f64, dd: f64, order: DerivativeOrder) -> Derivatives2 {
        self.weighted
            .iter()
            .fold(self.base.evaluate(tt, dd, order), |a, g| {
                a + g.evaluate(tt, dd, order)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SparsePolynomial2;
    use approx::assert_relative_eq;
    use num_dual::{second_derivative, Dual2_64, DualNum, HyperDual64};
    use DerivativeOrder::*;

    fn blocks() -> Vec<Vec<Vec<f64>>> {
        vec![
            vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![1.0, 1.0, 0.5], vec![0.0, 2.0, -0.2]],
            vec![vec![0.5, 1.0], vec![0.0, 1.0], vec![2.0, 0.0, 1.1]],
            vec![vec![1.0, 1.0], vec![-1.0, 0.0], vec![0.0, 3.0, 0.3], vec![0.0, 0.0, -0.4]],
            vec![vec![1.0, 1.0], vec![0.0, 0.0]],
            vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![1.0, 0.0, 0.05]],
        ]
    }

    fn closed_form<D: DualNum<f64> + Copy>(t: D, d: D) -> D {
        let base = t * d * 0.5 - d.powi(2) * 0.2;
        let g1 = d * t * 1.1 * (-d).exp();
        let g2 = t.recip() * (d.powi(3) * 0.3 - 0.4) * (-d.powi(2)).exp();
        let g4 = t * 0.05 * (-d.powi(4)).exp();
        base + g1 + g2 + g4
    }

    #[test]
    fn blocks_to_groups() {
        let r = Residual::from_blocks(blocks()).unwrap();
        assert_eq!(r.weighted.len(), 4);
        assert_eq!(r.weighted.iter().map(|g| g.k).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert!(r.weighted[2].polynomial.is_empty());
    }

    #[test]
    fn residual_matches_dual_numbers() {
        let r = Residual::from_blocks(blocks()).unwrap();
        for (tt, dd) in [(1.2, 0.3), (0.8, 1.1), (2.5, 2.2)] {
            let a = r.evaluate(tt, dd, Second);
            let (f, ft, ftt) = second_derivative(|t| closed_form(t, Dual2_64::from_re(dd)), tt);
            let (_, fd, fdd) = second_derivative(|d| closed_form(Dual2_64::from_re(tt), d), dd);
            let td = closed_form(
                HyperDual64::from_re(tt).derivative1(),
                HyperDual64::from_re(dd).derivative2(),
            );
            assert_relative_eq!(a.f, f, max_relative = 1e-12);
            assert_relative_eq!(a.fx, ft, max_relative = 1e-12);
            assert_relative_eq!(a.fy, fd, max_relative = 1e-12);
            assert_relative_eq!(a.fxx, ftt, max_relative = 1e-12);
            assert_relative_eq!(a.fxy, td.eps1eps2, max_relative = 1e-12);
            assert_relative_eq!(a.fyy, fdd, max_relative = 1e-12);
        }
    }

    #[test]
    fn weight_at_zero_density() {
        for k in 1..4 {
            let g = WeightedGroup {
                k,
                polynomial: TransformedPolynomial::new(
                    [1.0, 1.0],
                    [0.0, 0.0],
                    SparsePolynomial2::new(vec![(0, 0, 1.0)]).unwrap(),
                ),
            };
            let a = g.evaluate(1.0, 0.0, Second);
            assert!(a.f.is_finite() && a.fy.is_finite() && a.fyy.is_finite());
            assert_eq!(a.f, 1.0);
        }
    }

    #[test]
    fn no_blocks() {
        let r = Residual::from_blocks(vec![]).unwrap();
        assert_eq!(r.evaluate(1.0, 0.5, Second), Derivatives2::zero());
    }
}
