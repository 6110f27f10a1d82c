use std::{convert::Infallible, f64::consts::PI};

use super::{DerX1d, Func1d};

// -----------------------------------------------------------------------------
// ElementaryFn
// -----------------------------------------------------------------------------
/// Named elementary functions of a real variable.
///
/// These are the callables which can be referred to by name from configuration,
/// e.g. `"sin"` in a JSON document.
/// Outside of the natural domain (such as `log` of a negative number),
/// the result follows `f64` semantics, that is, `NaN`.
///
/// # Example
/// ```
/// use std::str::FromStr;
/// use qcheb::num::ElementaryFn;
///
/// let f = ElementaryFn::from_str("square").unwrap();
/// assert_eq!(f.apply(3.0), 9.0);
/// assert_eq!(f.to_string(), "square");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementaryFn {
    Identity,
    Square,
    Cube,
    Sin,
    Cos,
    Exp,
    Log,
    Sqrt,
    Erf,
    Abs,
}

impl ElementaryFn {
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            ElementaryFn::Identity => x,
            ElementaryFn::Square => x * x,
            ElementaryFn::Cube => x * x * x,
            ElementaryFn::Sin => x.sin(),
            ElementaryFn::Cos => x.cos(),
            ElementaryFn::Exp => x.exp(),
            ElementaryFn::Log => x.ln(),
            ElementaryFn::Sqrt => x.sqrt(),
            ElementaryFn::Erf => libm::erf(x),
            ElementaryFn::Abs => x.abs(),
        }
    }

    /// Exact first derivative.
    /// `abs` uses the sign of `x`, hence `0` at the kink.
    #[inline]
    pub fn apply_der_x(&self, x: f64) -> f64 {
        match self {
            ElementaryFn::Identity => 1.0,
            ElementaryFn::Square => 2.0 * x,
            ElementaryFn::Cube => 3.0 * x * x,
            ElementaryFn::Sin => x.cos(),
            ElementaryFn::Cos => -x.sin(),
            ElementaryFn::Exp => x.exp(),
            ElementaryFn::Log => x.recip(),
            ElementaryFn::Sqrt => 0.5 / x.sqrt(),
            ElementaryFn::Erf => 2.0 / PI.sqrt() * (-x * x).exp(),
            ElementaryFn::Abs => {
                if x == 0.0 {
                    0.0
                } else {
                    x.signum()
                }
            }
        }
    }
}

impl Func1d<f64> for ElementaryFn {
    type Output = f64;
    type Error = Infallible;

    #[inline]
    fn eval(&self, x: &f64) -> Result<f64, Infallible> {
        Ok(self.apply(*x))
    }
}

impl DerX1d<f64> for ElementaryFn {
    type DerX = f64;

    #[inline]
    fn der_x(&self, x: &f64) -> Result<f64, Infallible> {
        Ok(self.apply_der_x(*x))
    }
}
