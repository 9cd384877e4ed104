//! Multi-phase Helmholtz energy fits with analytic derivatives.
//!
//! `mpfit` evaluates empirical fits of the Helmholtz free energy, and the
//! thermodynamic properties that follow from them, for batches of
//! temperatures and densities. The fits are built from the sparse
//! polynomials and expression trees of [core] (`mpfit-core`).
//!
//! ```no_run
//! # use mpfit::mp1::Mp1;
//! # use mpfit::core::parameter::IdentifierOption;
//! # use ndarray::arr1;
//! let water = Mp1::from_json("water", "parameters.json", IdentifierOption::Name)?;
//! let p = water.p_d(arr1(&[300.0, 400.0]).view(), arr1(&[996.5, 1.2]).view())?;
//! # Ok::<(), mpfit::core::FitError>(())
//! ```
#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]

pub mod mp1;

/// Re-export of the expression engine.
pub mod core {
    pub use mpfit_core::*;
}
