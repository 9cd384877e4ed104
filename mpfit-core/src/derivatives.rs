//! Function values bundled with their first and second derivatives.
//!
//! All evaluators in this crate return either [Derivatives1] (one
//! independent variable) or [Derivatives2] (two independent variables).
//! Slots above the requested [DerivativeOrder] are always exactly zero.
//!
//! The product and chain rules implemented here are the only places
//! where derivatives are combined, so the update order (second
//! derivatives from the old first derivatives) is fixed in one spot.
use crate::errors::{FitError, FitResult};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Highest derivative order that is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DerivativeOrder {
    /// Only the function value.
    Zeroth,
    /// Function value and gradient.
    First,
    /// Function value, gradient and Hessian.
    #[default]
    Second,
}

impl DerivativeOrder {
    /// Whether first derivatives are evaluated.
    pub fn first(self) -> bool {
        self >= Self::First
    }

    /// Whether second derivatives are evaluated.
    pub fn second(self) -> bool {
        self >= Self::Second
    }
}

impl TryFrom<usize> for DerivativeOrder {
    type Error = FitError;

    fn try_from(order: usize) -> FitResult<Self> {
        match order {
            0 => Ok(Self::Zeroth),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            n => Err(FitError::UnsupportedDerivativeOrder(n)),
        }
    }
}

impl From<DerivativeOrder> for usize {
    fn from(order: DerivativeOrder) -> Self {
        match order {
            DerivativeOrder::Zeroth => 0,
            DerivativeOrder::First => 1,
            DerivativeOrder::Second => 2,
        }
    }
}

/// Value, first and second derivative of a function of one variable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Derivatives1 {
    pub f: f64,
    pub fx: f64,
    pub fxx: f64,
}

impl Derivatives1 {
    pub fn new(f: f64, fx: f64, fxx: f64) -> Self {
        Self { f, fx, fxx }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant `c` with vanishing derivatives.
    pub fn constant(c: f64) -> Self {
        Self::new(c, 0.0, 0.0)
    }

    /// The independent variable itself, `f = x`.
    pub fn identity(x: f64, order: DerivativeOrder) -> Self {
        Self::new(x, if order.first() { 1.0 } else { 0.0 }, 0.0)
    }

    /// Chain rule: `self` holds `f` and its derivatives evaluated at `g(x)`,
    /// `inner` holds `g(x)` and its derivatives with respect to `x`.
    pub fn compose(self, inner: Self, order: DerivativeOrder) -> Self {
        let mut out = self;
        if order.second() {
            out.fxx = self.fxx * inner.fx * inner.fx + self.fx * inner.fxx;
        }
        if order.first() {
            out.fx = self.fx * inner.fx;
        }
        out
    }

    /// Product rule: multiplies a running product `self` by one more factor.
    pub fn product(self, factor: Self, order: DerivativeOrder) -> Self {
        let mut t = self;
        if order.second() {
            t.fxx = self.fxx * factor.f + 2.0 * self.fx * factor.fx + self.f * factor.fxx;
        }
        if order.first() {
            t.fx = factor.f * self.fx + factor.fx * self.f;
        }
        t.f = self.f * factor.f;
        t
    }

    /// Multiplies value and all derivatives by a constant.
    pub fn scale(self, c: f64) -> Self {
        Self::new(self.f * c, self.fx * c, self.fxx * c)
    }
}

impl Add for Derivatives1 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.f + rhs.f, self.fx + rhs.fx, self.fxx + rhs.fxx)
    }
}

impl AddAssign for Derivatives1 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Derivatives1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(f={}, fx={}, fxx={})", self.f, self.fx, self.fxx)
    }
}

/// Value, gradient and Hessian of a function of two variables.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Derivatives2 {
    pub f: f64,
    pub fx: f64,
    pub fy: f64,
    pub fxx: f64,
    pub fxy: f64,
    pub fyy: f64,
}

impl Derivatives2 {
    pub fn new(f: f64, fx: f64, fy: f64, fxx: f64, fxy: f64, fyy: f64) -> Self {
        Self {
            f,
            fx,
            fy,
            fxx,
            fxy,
            fyy,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(c: f64) -> Self {
        Self::new(c, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Embeds a function of `x` only.
    pub fn from_x(d: Derivatives1) -> Self {
        Self::new(d.f, d.fx, 0.0, d.fxx, 0.0, 0.0)
    }

    /// Embeds a function of `y` only.
    pub fn from_y(d: Derivatives1) -> Self {
        Self::new(d.f, 0.0, d.fx, 0.0, 0.0, d.fxx)
    }

    /// Chain rule for independent substitutions `x -> g(x)` and `y -> h(y)`.
    ///
    /// Because `g` does not depend on `y` and `h` does not depend on `x`,
    /// the mixed partial only picks up `g' h'`.
    pub fn compose(
        self,
        inner_x: Derivatives1,
        inner_y: Derivatives1,
        order: DerivativeOrder,
    ) -> Self {
        let mut out = self;
        if order.second() {
            out.fxx = self.fxx * inner_x.fx * inner_x.fx + self.fx * inner_x.fxx;
            out.fyy = self.fyy * inner_y.fx * inner_y.fx + self.fy * inner_y.fxx;
            out.fxy = self.fxy * inner_x.fx * inner_y.fx;
        }
        if order.first() {
            out.fx = self.fx * inner_x.fx;
            out.fy = self.fy * inner_y.fx;
        }
        out
    }

    /// Product rule: multiplies a running product `self` by one more factor.
    pub fn product(self, factor: Self, order: DerivativeOrder) -> Self {
        let t = self;
        let f = factor;
        let mut out = t;
        if order.second() {
            out.fxx = t.fxx * f.f + 2.0 * t.fx * f.fx + t.f * f.fxx;
            out.fyy = t.fyy * f.f + 2.0 * t.fy * f.fy + t.f * f.fyy;
            out.fxy = t.fxy * f.f + t.fx * f.fy + t.fy * f.fx + t.f * f.fxy;
        }
        if order.first() {
            out.fx = f.f * t.fx + f.fx * t.f;
            out.fy = f.f * t.fy + f.fy * t.f;
        }
        out.f = t.f * f.f;
        out
    }

    pub fn scale(self, c: f64) -> Self {
        Self::new(
            self.f * c,
            self.fx * c,
            self.fy * c,
            self.fxx * c,
            self.fxy * c,
            self.fyy * c,
        )
    }
}

impl Add for Derivatives2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.f + rhs.f,
            self.fx + rhs.fx,
            self.fy + rhs.fy,
            self.fxx + rhs.fxx,
            self.fxy + rhs.fxy,
            self.fyy + rhs.fyy,
        )
    }
}

impl AddAssign for Derivatives2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Derivatives2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(f={}, fx={}, fy={}, fxx={}, fxy={}, fyy={})",
            self.f, self.fx, self.fy, self.fxx, self.fxy, self.fyy
        )
    }
}
