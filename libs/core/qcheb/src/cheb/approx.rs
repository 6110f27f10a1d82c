use std::{
    f64::consts::PI,
    fmt::Display,
    ops::{Add, Sub},
};

use itertools::Itertools;
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};

use super::{ChebBasis, Error, Interval, Source};
use crate::num::{DerX1d, DerXX1d, Func1d};

// -----------------------------------------------------------------------------
// ChebApprox
// -----------------------------------------------------------------------------
/// Truncated Chebyshev series `Σ_{j=0}^{n} c_j T_j(2(x - a)/(b - a) - 1)` on `[a, b]`.
///
/// Regardless of how it is built, an approximant of degree `n` holds `n + 1` coefficients
/// and `n + 1` basis functions, and evaluation and differentiation use all of them.
/// The constant term is stored already halved, so the series is a plain weighted sum.
///
/// Instances are immutable. Arithmetic and differentiation return new instances.
///
/// # Example
/// ```
/// use qcheb::{cheb::{ChebApprox, Interval}, num::Func1d};
///
/// let itv = Interval::new(0.0, 2.0).unwrap();
/// let approx = ChebApprox::fit(f64::exp, itv, 12);
///
/// let y = approx.eval(&0.5).unwrap();
/// assert!((y - 0.5_f64.exp()).abs() < 1e-10);
///
/// let dy = approx.derivative().eval(&0.5).unwrap();
/// assert!((dy - 0.5_f64.exp()).abs() < 1e-8);
///
/// assert!(approx.eval(&2.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "ChebApproxData", try_from = "ChebApproxData")]
pub struct ChebApprox {
    interval: Interval,
    coefficients: Vec<f64>,
    basis: Vec<ChebBasis>,
}

//
// construction
//
impl ChebApprox {
    /// Degree used when the caller does not specify one.
    pub const DEFAULT_DEGREE: usize = 10;

    /// Builds an approximant from a [Source].
    ///
    /// `degree` is used only for callable sources.
    /// For coefficient sources, the degree is the number of coefficients minus one.
    pub fn construct(
        source: Source<'_>,
        interval: Interval,
        degree: usize,
    ) -> Result<Self, Error> {
        match source {
            Source::Func(f) => Ok(Self::fit(f, interval, degree)),
            Source::Elementary(f) => {
                Self::fit_func1d(&f, interval, degree).map_err(|never| match never {})
            }
            Source::Coefficients(coefficients) => Self::with_coefficients(coefficients, interval),
        }
    }

    /// Interpolates `f` at the `degree + 1` Chebyshev nodes of `interval`.
    ///
    /// Coefficients are computed by direct summation, which costs `O(degree^2)`.
    pub fn fit<F>(f: F, interval: Interval, degree: usize) -> Self
    where
        F: Fn(f64) -> f64,
    {
        log::debug!("Fitting Chebyshev approximant of degree {degree} on {interval}");
        let ys = Self::nodes(&interval, degree).into_iter().map(f).collect_vec();
        Self::from_samples(interval, ys)
    }

    /// [ChebApprox::fit] for a [Func1d]. The first failing sample aborts the fit.
    ///
    /// # Example
    /// ```
    /// use qcheb::{cheb::{ChebApprox, Interval}, num::ElementaryFn};
    ///
    /// let itv = Interval::new(0.0, 1.0).unwrap();
    /// let tested = ChebApprox::fit_func1d(&ElementaryFn::Sin, itv, 6).unwrap();
    /// assert_eq!(tested, ChebApprox::fit(f64::sin, itv, 6));
    /// ```
    pub fn fit_func1d<F>(f: &F, interval: Interval, degree: usize) -> Result<Self, F::Error>
    where
        F: Func1d<f64, Output = f64>,
    {
        log::debug!("Fitting Chebyshev approximant of degree {degree} on {interval}");
        let ys = Self::nodes(&interval, degree)
            .iter()
            .map(|x| f.eval(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_samples(interval, ys))
    }

    // `ys` are the values at `nodes(interval, ys.len() - 1)` and must not be empty.
    fn from_samples(interval: Interval, ys: Vec<f64>) -> Self {
        let angles = node_angles(ys.len() - 1);
        let scale = 2.0 / angles.len() as f64;
        let mut coefficients = (0..angles.len())
            .map(|j| {
                let j = j as f64;
                let sum: f64 = angles.iter().zip(&ys).map(|(x, y)| (j * x).cos() * y).sum();
                scale * sum
            })
            .collect_vec();
        coefficients[0] /= 2.0;
        log::trace!("Fitted coefficients: {coefficients:?}");

        Self::from_parts(interval, coefficients)
    }

    /// Takes `coefficients` verbatim as the weights of `T_0, T_1, ...`.
    ///
    /// The first element is the constant term itself (not doubled).
    /// Every coefficient must be finite.
    pub fn with_coefficients(coefficients: Vec<f64>, interval: Interval) -> Result<Self, Error> {
        if coefficients.is_empty() {
            return Err(Error::InvalidArgumentType {
                found: "empty sequence".to_string(),
            });
        }
        if let Some(c) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(Error::InvalidArgumentType {
                found: format!("non-finite coefficient {c}"),
            });
        }
        Ok(Self::from_parts(interval, coefficients))
    }

    /// Sample points used by [ChebApprox::fit], ordered from `upper` to `lower`.
    pub fn nodes(interval: &Interval, degree: usize) -> Vec<f64> {
        node_angles(degree)
            .into_iter()
            .map(|x| interval.from_canonical(&x.cos()))
            .collect()
    }

    // `coefficients` must not be empty.
    fn from_parts(interval: Interval, coefficients: Vec<f64>) -> Self {
        let basis = ChebBasis::family(coefficients.len() - 1, interval);
        ChebApprox {
            interval,
            coefficients,
            basis,
        }
    }
}

fn node_angles(degree: usize) -> Vec<f64> {
    let m = (degree + 1) as f64;
    (0..=degree).map(|k| (k as f64 + 0.5) * PI / m).collect()
}

//
// methods
//
impl ChebApprox {
    #[inline]
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    pub fn basis(&self) -> &[ChebBasis] {
        &self.basis
    }

    /// Evaluates at every point of `xs`.
    ///
    /// All points are checked before any evaluation,
    /// so either every value is returned or the first offending point is reported.
    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, Error> {
        xs.iter().try_for_each(|x| self.check_domain(x))?;
        Ok(xs.iter().map(|x| self.sum_basis(*x)).collect())
    }

    /// Derivative series on the same interval with the same degree.
    ///
    /// Uses the recurrence `d_j = d_{j+2} + 2(j + 1) c_{j+1}` from the top index down,
    /// then rescales by `2 / (b - a)` for the interval map.
    pub fn derivative(&self) -> Self {
        let c = &self.coefficients;
        let n = self.degree();

        let mut d = vec![0.0; n + 1];
        for j in (0..n).rev() {
            let upper = d.get(j + 2).copied().unwrap_or(0.0);
            d[j] = upper + 2.0 * (j + 1) as f64 * c[j + 1];
        }
        // the recurrence yields the doubled constant term
        d[0] /= 2.0;

        let scale = 2.0 / self.interval.width();
        d.iter_mut().for_each(|v| *v *= scale);
        log::trace!("Derivative coefficients: {d:?}");

        Self::from_parts(self.interval, d)
    }

    /// Elementwise sum of coefficients.
    #[inline]
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
        self.combine(other, |l, r| l + r)
    }

    /// Elementwise difference of coefficients.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error> {
        self.combine(other, |l, r| l - r)
    }

    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self, Error> {
        if self.interval != other.interval || self.degree() != other.degree() {
            log::debug!(
                "Refusing to combine degree {} on {} with degree {} on {}",
                self.degree(),
                self.interval,
                other.degree(),
                other.interval
            );
            return Err(Error::IncompatibleApproximants {
                lhs_interval: self.interval,
                lhs_degree: self.degree(),
                rhs_interval: other.interval,
                rhs_degree: other.degree(),
            });
        }
        let coefficients = self
            .coefficients
            .iter()
            .zip_eq(&other.coefficients)
            .map(|(l, r)| op(*l, *r))
            .collect();
        Ok(Self::from_parts(self.interval, coefficients))
    }

    #[inline]
    fn check_domain(&self, x: &f64) -> Result<(), Error> {
        if self.interval.contains(x) {
            Ok(())
        } else {
            Err(Error::Domain {
                x: *x,
                interval: self.interval,
            })
        }
    }

    #[inline]
    fn sum_basis(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .zip(&self.basis)
            .map(|(c, basis)| c * basis.apply(x))
            .sum()
    }
}

impl Func1d<f64> for ChebApprox {
    type Output = f64;
    type Error = Error;

    #[inline]
    fn eval(&self, x: &f64) -> Result<f64, Error> {
        self.check_domain(x)?;
        Ok(self.sum_basis(*x))
    }
}

// Each call builds the derivative series anew.
// Evaluating at many points should go through `derivative()` and `eval_many`.
impl DerX1d<f64> for ChebApprox {
    type DerX = f64;

    #[inline]
    fn der_x(&self, x: &f64) -> Result<f64, Error> {
        self.check_domain(x)?;
        Ok(self.derivative().sum_basis(*x))
    }
}

impl DerXX1d<f64> for ChebApprox {
    type DerXX = f64;

    fn der_xx(&self, x: &f64) -> Result<f64, Error> {
        self.check_domain(x)?;
        Ok(self.derivative().derivative().sum_basis(*x))
    }

    fn der_0_x_xx(&self, x: &f64) -> Result<(f64, f64, f64), Error> {
        self.check_domain(x)?;
        let der = self.derivative();
        let der2 = der.derivative();
        Ok((self.sum_basis(*x), der.sum_basis(*x), der2.sum_basis(*x)))
    }
}

impl Add for &ChebApprox {
    type Output = Result<ChebApprox, Error>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &ChebApprox {
    type Output = Result<ChebApprox, Error>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Display for ChebApprox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ChebApprox {{")?;
        writeln!(f, "  interval: {},", self.interval)?;
        writeln!(f, "  degree: {},", self.degree())?;
        writeln!(f, "  coefficients: {:?}", self.coefficients)?;
        write!(f, "}}")
    }
}

//
// ser/de
//
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct ChebApproxData {
    interval: Interval,
    /// Weights of `T_0, T_1, ...`. The first one is the constant term itself.
    coefficients: Vec<f64>,
}

impl From<ChebApprox> for ChebApproxData {
    #[inline]
    fn from(approx: ChebApprox) -> Self {
        ChebApproxData {
            interval: approx.interval,
            coefficients: approx.coefficients,
        }
    }
}

impl TryFrom<ChebApproxData> for ChebApprox {
    type Error = Error;

    #[inline]
    fn try_from(data: ChebApproxData) -> Result<Self, Error> {
        ChebApprox::with_coefficients(data.coefficients, data.interval)
    }
}

impl JsonSchema for ChebApprox {
    fn schema_name() -> String {
        "ChebApprox".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        ChebApproxData::json_schema(gen)
    }
}
