//! Multi-phase Helmholtz energy fits.
//!
//! The reduced Helmholtz energy `a = A / (R T)` is split into an ideal gas
//! and a residual part, both functions of the reduced inverse temperature
//! `tt = tc / T` and the reduced density `dd = d / dc`:
//! ```text
//! ao(tt, dd) = c0 + c1 tt + c2 ln(tt) + c3 tt^-0.5 + c4 tt^-0.75 + ln(dd)
//! ar(tt, dd) = p0(tt, dd) + sum_k exp(-dd^k) pk(tt, dd)
//! ```
//! where every `pk` is a sparse polynomial with pre and post exponents
//! (see [TransformedPolynomial]). Thermodynamic properties follow from the
//! analytic derivatives of `ao` and `ar`.
//!
//! All properties are evaluated for batches of temperatures and densities.
//! Units are those of the parameters: `p` has the units of `r T d`.
use crate::core::parameter::{Identifier, IdentifierOption, ParameterError, PureRecord};
use crate::core::{batch, BatchDerivatives2, Bivariate, DerivativeOrder, Derivatives2, FitResult};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

mod ideal_gas;
mod polynomial;
mod residual;

pub use ideal_gas::IdealGas;
pub use polynomial::TransformedPolynomial;
pub use residual::{Residual, WeightedGroup};

/// Parameters of a multi-phase fit.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Mp1Record {
    /// Ideal gas coefficients
    pub ig: [f64; 5],
    /// Residual coefficient blocks `[[prex, prey], [postx, posty], [i, j, c], ...]`
    #[serde(default)]
    pub ar: Vec<Vec<Vec<f64>>>,
    /// Reference temperature of the reduced inverse temperature `tt`
    pub tc: f64,
    /// Reference density of the reduced density `dd`
    pub dc: f64,
    /// Specific gas constant
    pub r: f64,
}

impl Mp1Record {
    pub fn new(ig: [f64; 5], ar: Vec<Vec<Vec<f64>>>, tc: f64, dc: f64, r: f64) -> Self {
        Self { ig, ar, tc, dc, r }
    }
}

impl fmt::Display for Mp1Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mp1Record(ig={:?}", self.ig)?;
        write!(f, ", groups={}", self.ar.len())?;
        write!(f, ", tc={}, dc={}, r={})", self.tc, self.dc, self.r)
    }
}

/// Reduced Helmholtz energy and its derivatives with respect to `tt` (x) and `dd` (y).
#[derive(Clone, Debug, PartialEq)]
pub struct HelmholtzDerivatives {
    pub ideal_gas: BatchDerivatives2,
    pub residual: BatchDerivatives2,
    pub total: BatchDerivatives2,
}

/// A multi-phase Helmholtz energy fit of a pure substance.
#[derive(Clone, Debug)]
pub struct Mp1 {
    identifier: Identifier,
    mw: f64,
    tc: f64,
    dc: f64,
    r: f64,
    ideal_gas: IdealGas,
    residual: Residual,
}

impl Mp1 {
    /// Builds a fit from a substance record.
    ///
    /// ```
    /// # use mpfit::core::parameter::{Identifier, PureRecord};
    /// # use mpfit::mp1::{Mp1, Mp1Record};
    /// # use ndarray::arr1;
    /// let ig = [0.0; 5];
    /// let record = Mp1Record::new(ig, vec![], 1.0, 1.0, 0.5);
    /// let identifier = Identifier::from_formula("argon", "Ar");
    /// let argon = Mp1::new(PureRecord::new(identifier, 39.948, record))?;
    /// let p = argon.p_d(arr1(&[2.0]).view(), arr1(&[3.0]).view())?;
    /// assert_eq!(p[0], 3.0);
    /// # Ok::<(), mpfit::core::FitError>(())
    /// ```
    pub fn new(record: PureRecord<Mp1Record>) -> FitResult<Self> {
        let PureRecord {
            identifier,
            molarweight,
            model_record: m,
        } = record;
        let residual = Residual::from_blocks(m.ar)?;
        tracing::debug!(
            substance = %identifier,
            weighted_groups = residual.weighted.len(),
            "built mp1 fit"
        );
        Ok(Self {
            identifier,
            mw: molarweight,
            tc: m.tc,
            dc: m.dc,
            r: m.r,
            ideal_gas: IdealGas::new(m.ig),
            residual,
        })
    }

    /// Reads the fit of a single substance from a json file.
    pub fn from_json<P: AsRef<Path>>(
        substance: &str,
        file: P,
        identifier_option: IdentifierOption,
    ) -> FitResult<Self> {
        let record = PureRecord::from_json(&[substance], file, identifier_option)?
            .pop()
            .ok_or_else(|| ParameterError::ComponentsNotFound(substance.into()))?;
        Self::new(record)
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Molar weight
    pub fn mw(&self) -> f64 {
        self.mw
    }

    pub fn tc(&self) -> f64 {
        self.tc
    }

    pub fn dc(&self) -> f64 {
        self.dc
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn ideal_gas(&self) -> &IdealGas {
        &self.ideal_gas
    }

    pub fn residual(&self) -> &Residual {
        &self.residual
    }

    fn reduce(&self, t: f64, d: f64) -> (f64, f64) {
        (self.tc / t, d / self.dc)
    }

    /// Evaluates `f(T, tt, dd, ao, ar)` for every pair of temperature and density.
    fn map<F>(
        &self,
        t: ArrayView1<f64>,
        d: ArrayView1<f64>,
        order: DerivativeOrder,
        f: F,
    ) -> FitResult<Array1<f64>>
    where
        F: Fn(f64, f64, f64, Derivatives2, Derivatives2) -> f64 + Sync + Send,
    {
        batch::map2(t, d, |t, d| {
            let (tt, dd) = self.reduce(t, d);
            let ao = self.ideal_gas.evaluate(tt, dd, order);
            let ar = self.residual.evaluate(tt, dd, order);
            f(t, tt, dd, ao, ar)
        })
    }

    /// Reduced Helmholtz energy with first and second derivatives.
    pub fn helmholtz(
        &self,
        t: ArrayView1<f64>,
        d: ArrayView1<f64>,
        order: DerivativeOrder,
    ) -> FitResult<HelmholtzDerivatives> {
        let a = batch::map2(t, d, |t, d| {
            let (tt, dd) = self.reduce(t, d);
            (
                self.ideal_gas.evaluate(tt, dd, order),
                self.residual.evaluate(tt, dd, order),
            )
        })?;
        Ok(HelmholtzDerivatives {
            ideal_gas: a.mapv(|(ao, _)| ao).into(),
            residual: a.mapv(|(_, ar)| ar).into(),
            total: a.mapv(|(ao, ar)| ao + ar).into(),
        })
    }

    /// Pressure from temperature and density.
    pub fn p_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        batch::map2(t, d, |t, d| {
            let (tt, dd) = self.reduce(t, d);
            let ar = self.residual.evaluate(tt, dd, DerivativeOrder::First);
            self.r * t * d * (1.0 + dd * ar.fy)
        })
    }

    /// Compressibility factor `p / (d r T)`.
    pub fn z_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        batch::map2(t, d, |t, d| {
            let (tt, dd) = self.reduce(t, d);
            let ar = self.residual.evaluate(tt, dd, DerivativeOrder::First);
            1.0 + dd * ar.fy
        })
    }

    /// Specific internal energy.
    pub fn e_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        self.map(t, d, DerivativeOrder::First, |t, tt, _, ao, ar| {
            self.r * t * tt * (ao.fx + ar.fx)
        })
    }

    /// Specific enthalpy.
    pub fn h_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        self.map(t, d, DerivativeOrder::First, |t, tt, dd, ao, ar| {
            self.r * t * (1.0 + tt * (ao.fx + ar.fx) + dd * ar.fy)
        })
    }

    /// Specific entropy.
    pub fn s_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        self.map(t, d, DerivativeOrder::First, |_, tt, _, ao, ar| {
            self.r * (tt * (ao.fx + ar.fx) - ao.f - ar.f)
        })
    }

    /// Specific isochoric heat capacity.
    pub fn cv_d(&self, t: ArrayView1<f64>, d: ArrayView1<f64>) -> FitResult<Array1<f64>> {
        self.map(t, d, DerivativeOrder::Second, |_, tt, _, ao, ar| {
            -self.r * tt * tt * (ao.fxx + ar.fxx)
        })
    }
}

impl fmt::Display for Mp1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mp1({}", self.identifier)?;
        write!(f, ", mw={}, tc={}, dc={}, r={}", self.mw, self.tc, self.dc, self.r)?;
        write!(f, ", weighted_groups={})", self.residual.weighted.len())
    }
}
