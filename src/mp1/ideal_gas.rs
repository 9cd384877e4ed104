use crate::core::{Bivariate, DerivativeOrder, Derivatives2};

/// Ideal gas part of the reduced Helmholtz energy,
/// `c0 + c1 tt + c2 ln(tt) + c3 tt^-0.5 + c4 tt^-0.75 + ln(dd)`.
///
/// Evaluated as a function of `x = tt` and `y = dd`.
#[derive(Clone, Debug, PartialEq)]
pub struct IdealGas {
    pub c: [f64; 5],
}

impl IdealGas {
    pub fn new(c: [f64; 5]) -> Self {
        Self { c }
    }
}

impl Bivariate for IdealGas {
    fn evaluate(&self, tt: f64, dd: f64, order: DerivativeOrder) -> Derivatives2 {
        let [c0, c1, c2, c3, c4] = self.c;
        let mut a = Derivatives2::constant(c0 + c1 * tt + c2 * tt.ln() + dd.ln());

        let t75 = c4 * tt.powf(-0.75);
        let t50 = c3 * tt.powf(-0.5);
        a.f += t75 + t50;

        if order.first() {
            let t75 = -0.75 * t75 / tt;
            let t50 = -0.5 * t50 / tt;
            let t2 = c2 / tt;
            a.fx = t75 + t50 + c1 + t2;
            a.fy = dd.recip();
            if order.second() {
                a.fxx = -1.75 * t75 / tt - 1.5 * t50 / tt - t2 / tt;
                a.fyy = -a.fy / dd;
            }
        }
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_dual::{second_derivative, DualNum};
    use DerivativeOrder::*;

    #[test]
    fn density_only() {
        let ig = IdealGas::new([0.0; 5]);
        let a = ig.evaluate(2.0, 0.5, Second);
        assert_relative_eq!(a.f, 0.5f64.ln(), max_relative = 1e-15);
        assert_relative_eq!(a.f, -0.693147, epsilon = 1e-6);
        assert_eq!(a.fy, 2.0);
        assert_eq!(a.fx, 0.0);
        assert_eq!(a.fxx, 0.0);
        assert_eq!(a.fxy, 0.0);
        assert_eq!(a.fyy, -4.0);
    }

    #[test]
    fn constant_counts_once() {
        let a = IdealGas::new([1.5, 0.0, 0.0, 0.0, 0.0]).evaluate(2.0, 1.0, Zeroth);
        assert_eq!(a.f, 1.5);
    }

    #[test]
    fn temperature_terms() {
        let c = [-1.2, 3.4, 2.5, 0.8, -0.3];
        let ig = IdealGas::new(c);
        let tt = 1.7;
        let a = ig.evaluate(tt, 0.3, Second);
        let (f, ft, ftt) = second_derivative(
            |t| {
                t * c[1] + t.ln() * c[2] + t.powf(-0.5) * c[3] + t.powf(-0.75) * c[4]
                    + c[0]
                    + 0.3f64.ln()
            },
            tt,
        );
        assert_relative_eq!(a.f, f, max_relative = 1e-14);
        assert_relative_eq!(a.fx, ft, max_relative = 1e-14);
        assert_relative_eq!(a.fxx, ftt, max_relative = 1e-14);
    }
}
