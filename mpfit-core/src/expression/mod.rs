//! Sum-of-products expressions built from the elementary function bank.
//!
//! A [Group1] (or [Group2]) is a sum of terms, every term is a product of
//! factors, and every factor is a function node, a nested group or a
//! numeric constant. The argument of a function node may itself be a node
//! or a group, e.g. `p(x^0.5)`:
//! ```text
//! {"type": "poly", "param": [[2, 1.0], [0, 3.0]], "arg": {"type": "pow", "param": 0.5}}
//! ```
//! Derivatives are propagated analytically through the tree with the
//! chain rule (across compositions), the product rule (across factors)
//! and the sum rule (across terms).
//!
//! Trees are usually built from their declarative JSON form, see
//! [NodeRecord] and [GroupRecord].
mod bivariate;
mod record;
mod univariate;

pub use bivariate::{Factor2, Group2, Node2, Term2};
pub use record::{ArgumentRecord, FactorRecord, GroupRecord, NodeRecord};
pub use univariate::{Argument1, Factor1, Group1, Node1, Term1};
