use super::bivariate::{Factor2, Group2, Node2, Term2};
use super::univariate::{Argument1, Factor1, Group1, Node1, Term1};
use crate::errors::{FitError, FitResult};
use crate::functions::{Function1, Function2};
use crate::parameter::ParameterError;
use crate::polynomial::{SparsePolynomial1, SparsePolynomial2};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declarative form of a function node.
///
/// The same record describes nodes of one variable (`arg`) and of two
/// variables (`argx`, `argy`). Which keys are allowed depends on where the
/// record is used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NodeRecord {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<ArgumentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argx: Option<ArgumentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argy: Option<ArgumentRecord>,
}

/// Argument of a node: a nested node (JSON object) or a group (JSON array).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ArgumentRecord {
    Group(GroupRecord),
    Node(Box<NodeRecord>),
}

/// A group is a list of terms, every term is a list of factors.
pub type GroupRecord = Vec<Vec<FactorRecord>>;

/// A factor is a number, a nested group or a node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FactorRecord {
    Constant(f64),
    Group(GroupRecord),
    Node(NodeRecord),
}

impl NodeRecord {
    pub fn new(ty: &str, param: Option<Value>) -> Self {
        Self {
            ty: ty.into(),
            param,
            arg: None,
            argx: None,
            argy: None,
        }
    }

    fn param<T: DeserializeOwned>(&self) -> FitResult<T> {
        let param = self
            .param
            .clone()
            .ok_or_else(|| FitError::invalid_parameter(&self.ty, "missing `param`"))?;
        serde_json::from_value(param)
            .map_err(|e| FitError::invalid_parameter(&self.ty, e.to_string()))
    }

    fn reject(&self, key: &str, arg: &Option<ArgumentRecord>) -> FitResult<()> {
        match arg {
            Some(_) => Err(FitError::invalid_parameter(
                &self.ty,
                format!("`{key}` is not allowed here"),
            )),
            None => Ok(()),
        }
    }

    /// Elementary function of one variable named by the `type` tag.
    fn function1(&self, ty: &str) -> FitResult<Function1> {
        Ok(match ty {
            "x" => Function1::Identity,
            "lin" => {
                let [a, b]: [f64; 2] = self.param()?;
                Function1::Linear { a, b }
            }
            "pow" => Function1::Power(self.param()?),
            "inv" => Function1::Inverse,
            "exp" => Function1::Exponential(self.param()?),
            "log" => Function1::Log,
            "poly" => Function1::Polynomial(SparsePolynomial1::new(self.param()?)?),
            _ => return Err(FitError::UnknownFunction(self.ty.clone())),
        })
    }

    fn function2(&self) -> FitResult<Function2> {
        let ty = self.ty.as_str();
        Ok(match ty {
            "x" => Function2::X(Function1::Identity),
            "y" => Function2::Y(Function1::Identity),
            "lin" => {
                let [a, b, c]: [f64; 3] = self.param()?;
                Function2::Linear { a, b, c }
            }
            "poly" => Function2::Polynomial(SparsePolynomial2::new(self.param()?)?),
            "spoly" => Function2::DirectPolynomial(SparsePolynomial2::new(self.param()?)?),
            _ => {
                if let Some(base) = ty.strip_suffix('x').filter(|b| !b.is_empty()) {
                    Function2::X(self.function1(base)?)
                } else if let Some(base) = ty.strip_suffix('y').filter(|b| !b.is_empty()) {
                    Function2::Y(self.function1(base)?)
                } else {
                    return Err(FitError::UnknownFunction(self.ty.clone()));
                }
            }
        })
    }
}

impl ArgumentRecord {
    fn into_argument1(self) -> FitResult<Argument1> {
        Ok(match self {
            Self::Node(n) => Argument1::Node(Box::new(Node1::try_from(*n)?)),
            Self::Group(g) => Argument1::Group(group1(g)?),
        })
    }
}

impl TryFrom<NodeRecord> for Node1 {
    type Error = FitError;

    fn try_from(record: NodeRecord) -> FitResult<Self> {
        record.reject("argx", &record.argx)?;
        record.reject("argy", &record.argy)?;
        let function = record.function1(&record.ty)?;
        Ok(Self {
            function,
            arg: record.arg.map(ArgumentRecord::into_argument1).transpose()?,
        })
    }
}

impl TryFrom<NodeRecord> for Node2 {
    type Error = FitError;

    fn try_from(record: NodeRecord) -> FitResult<Self> {
        record.reject("arg", &record.arg)?;
        let function = record.function2()?;
        Ok(Self {
            function,
            argx: record.argx.map(ArgumentRecord::into_argument1).transpose()?,
            argy: record.argy.map(ArgumentRecord::into_argument1).transpose()?,
        })
    }
}

fn group1(record: GroupRecord) -> FitResult<Group1> {
    record
        .into_iter()
        .map(|term| {
            term.into_iter()
                .map(|factor| {
                    Ok(match factor {
                        FactorRecord::Constant(c) => Factor1::Constant(c),
                        FactorRecord::Group(g) => Factor1::Group(group1(g)?),
                        FactorRecord::Node(n) => Factor1::Node(n.try_into()?),
                    })
                })
                .collect::<FitResult<_>>()
                .map(Term1)
        })
        .collect::<FitResult<_>>()
        .map(Group1)
}

fn group2(record: GroupRecord) -> FitResult<Group2> {
    record
        .into_iter()
        .map(|term| {
            term.into_iter()
                .map(|factor| {
                    Ok(match factor {
                        FactorRecord::Constant(c) => Factor2::Constant(c),
                        FactorRecord::Group(g) => Factor2::Group(group2(g)?),
                        FactorRecord::Node(n) => Factor2::Node(n.try_into()?),
                    })
                })
                .collect::<FitResult<_>>()
                .map(Term2)
        })
        .collect::<FitResult<_>>()
        .map(Group2)
}

impl Group1 {
    /// Builds a group of one variable from its declarative form.
    pub fn from_record(record: GroupRecord) -> FitResult<Self> {
        let group = group1(record)?;
        tracing::debug!(terms = group.terms().len(), "built group: {group}");
        Ok(group)
    }

    /// Parses a group of one variable from a JSON string.
    pub fn from_json(json: &str) -> FitResult<Self> {
        Self::from_record(parse(json)?)
    }
}

impl Group2 {
    /// Builds a group of two variables from its declarative form.
    pub fn from_record(record: GroupRecord) -> FitResult<Self> {
        let group = group2(record)?;
        tracing::debug!(terms = group.terms().len(), "built group: {group}");
        Ok(group)
    }

    /// Parses a group of two variables from a JSON string.
    pub fn from_json(json: &str) -> FitResult<Self> {
        Self::from_record(parse(json)?)
    }
}

impl Node1 {
    /// Parses a node of one variable from a JSON string.
    pub fn from_json(json: &str) -> FitResult<Self> {
        parse::<NodeRecord>(json)?.try_into()
    }
}

impl Node2 {
    /// Parses a node of two variables from a JSON string.
    pub fn from_json(json: &str) -> FitResult<Self> {
        parse::<NodeRecord>(json)?.try_into()
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> FitResult<T> {
    Ok(serde_json::from_str(json).map_err(ParameterError::from)?)
}

impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => Err(fmt::Error),
        }
    }
}
