use super::univariate::Argument1;
use crate::derivatives::{DerivativeOrder, Derivatives1, Derivatives2};
use crate::evaluate::{Bivariate, Univariate};
use crate::functions::Function2;
use std::fmt;

/// A function of two variables whose `x` and `y` arguments may be replaced
/// by expressions of `x` and `y` alone, `f(g(x), h(y))`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node2 {
    pub function: Function2,
    pub argx: Option<Argument1>,
    pub argy: Option<Argument1>,
}

impl Node2 {
    pub fn new(function: Function2) -> Self {
        Self {
            function,
            argx: None,
            argy: None,
        }
    }

    pub fn with_argx(mut self, arg: impl Into<Argument1>) -> Self {
        self.argx = Some(arg.into());
        self
    }

    pub fn with_argy(mut self, arg: impl Into<Argument1>) -> Self {
        self.argy = Some(arg.into());
        self
    }
}

fn inner(arg: &Option<Argument1>, x: f64, order: DerivativeOrder) -> Derivatives1 {
    match arg {
        Some(arg) => arg.evaluate(x, order),
        None => Derivatives1::identity(x, order),
    }
}

impl Bivariate for Node2 {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        if self.argx.is_none() && self.argy.is_none() {
            return self.function.evaluate(x, y, order);
        }
        let gx = inner(&self.argx, x, order);
        let gy = inner(&self.argy, y, order);
        self.function
            .evaluate(gx.f, gy.f, order)
            .compose(gx, gy, order)
    }
}

/// A single factor of a term.
#[derive(Clone, Debug, PartialEq)]
pub enum Factor2 {
    Node(Node2),
    Group(Group2),
    Constant(f64),
}

impl From<Node2> for Factor2 {
    fn from(node: Node2) -> Self {
        Self::Node(node)
    }
}

impl From<Group2> for Factor2 {
    fn from(group: Group2) -> Self {
        Self::Group(group)
    }
}

impl From<f64> for Factor2 {
    fn from(c: f64) -> Self {
        Self::Constant(c)
    }
}

/// Product of factors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Term2(pub Vec<Factor2>);

impl Bivariate for Term2 {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        self.0
            .iter()
            .fold(Derivatives2::constant(1.0), |t, factor| match factor {
                Factor2::Node(n) => t.product(n.evaluate(x, y, order), order),
                Factor2::Group(g) => t.product(g.evaluate(x, y, order), order),
                Factor2::Constant(c) => t.scale(*c),
            })
    }
}

/// Sum of terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group2(pub Vec<Term2>);

impl Group2 {
    pub fn new(terms: Vec<Term2>) -> Self {
        Self(terms)
    }

    pub fn terms(&self) -> &[Term2] {
        &self.0
    }
}

impl Bivariate for Group2 {
    fn evaluate(&self, x: f64, y: f64, order: DerivativeOrder) -> Derivatives2 {
        self.0
            .iter()
            .fold(Derivatives2::zero(), |g, term| g + term.evaluate(x, y, order))
    }
}

impl fmt::Display for Node2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        let args: Vec<_> = [("x", &self.argx), ("y", &self.argy)]
            .into_iter()
            .filter_map(|(v, a)| match a {
                Some(Argument1::Node(n)) => Some(format!("{v}={n}")),
                Some(Argument1::Group(g)) => Some(format!("{v}={g}")),
                None => None,
            })
            .collect();
        if !args.is_empty() {
            write!(f, "[{}]", args.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Group2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<_> = self
            .0
            .iter()
            .map(|t| {
                t.0.iter()
                    .map(|factor| match factor {
                        Factor2::Node(n) => n.to_string(),
                        Factor2::Group(g) => g.to_string(),
                        Factor2::Constant(c) => c.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" * ")
            })
            .collect();
        write!(f, "({})", terms.join(" + "))
    }
}
