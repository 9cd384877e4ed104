use crate::derivatives::{DerivativeOrder, Derivatives1};
use crate::evaluate::Univariate;
use crate::functions::Function1;
use std::fmt;

/// Argument of a function node: either another node or a group.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument1 {
    Node(Box<Node1>),
    Group(Group1),
}

impl Univariate for Argument1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        match self {
            Self::Node(n) => n.evaluate(x, order),
            Self::Group(g) => g.evaluate(x, order),
        }
    }
}

/// An elementary function, optionally applied to an inner expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Node1 {
    pub function: Function1,
    pub arg: Option<Argument1>,
}

impl Node1 {
    pub fn new(function: Function1) -> Self {
        Self {
            function,
            arg: None,
        }
    }

    /// Composes the node with an inner expression, `f(g(x))`.
    pub fn with_arg(mut self, arg: impl Into<Argument1>) -> Self {
        self.arg = Some(arg.into());
        self
    }
}

impl From<Node1> for Argument1 {
    fn from(node: Node1) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<Group1> for Argument1 {
    fn from(group: Group1) -> Self {
        Self::Group(group)
    }
}

impl Univariate for Node1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        match &self.arg {
            Some(arg) => {
                let inner = arg.evaluate(x, order);
                self.function.evaluate(inner.f, order).compose(inner, order)
            }
            None => self.function.evaluate(x, order),
        }
    }
}

/// A single factor of a term.
#[derive(Clone, Debug, PartialEq)]
pub enum Factor1 {
    Node(Node1),
    Group(Group1),
    Constant(f64),
}

impl From<Node1> for Factor1 {
    fn from(node: Node1) -> Self {
        Self::Node(node)
    }
}

impl From<Group1> for Factor1 {
    fn from(group: Group1) -> Self {
        Self::Group(group)
    }
}

impl From<f64> for Factor1 {
    fn from(c: f64) -> Self {
        Self::Constant(c)
    }
}

/// Product of factors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Term1(pub Vec<Factor1>);

impl Univariate for Term1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        self.0
            .iter()
            .fold(Derivatives1::constant(1.0), |t, factor| match factor {
                Factor1::Node(n) => t.product(n.evaluate(x, order), order),
                Factor1::Group(g) => t.product(g.evaluate(x, order), order),
                Factor1::Constant(c) => t.scale(*c),
            })
    }
}

/// Sum of terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group1(pub Vec<Term1>);

impl Group1 {
    pub fn new(terms: Vec<Term1>) -> Self {
        Self(terms)
    }

    pub fn terms(&self) -> &[Term1] {
        &self.0
    }
}

impl Univariate for Group1 {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> Derivatives1 {
        self.0
            .iter()
            .fold(Derivatives1::zero(), |g, term| g + term.evaluate(x, order))
    }
}

impl fmt::Display for Node1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            None => write!(f, "{}", self.function),
            Some(Argument1::Node(n)) => write!(f, "{}[x={}]", self.function, n),
            Some(Argument1::Group(g)) => write!(f, "{}[x={}]", self.function, g),
        }
    }
}

impl fmt::Display for Group1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<_> = self
            .0
            .iter()
            .map(|t| {
                t.0.iter()
                    .map(|factor| match factor {
                        Factor1::Node(n) => n.to_string(),
                        Factor1::Group(g) => g.to_string(),
                        Factor1::Constant(c) => c.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" * ")
            })
            .collect();
        write!(f, "({})", terms.join(" + "))
    }
}
